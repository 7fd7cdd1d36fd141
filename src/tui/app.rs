//! 主循环：输入 → tick → 布局/尺寸观察 → frame → 绘制

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::editor::TextArea;
use super::input::{map_key, EditorCommand, KeyIntent};
use super::render::{draw, FrameView, PanelLayout};
use super::terminal_guard::{install_termination_signals, TerminalGuard, TerminationSignal};
use crate::app::Workbench;
use crate::kernel::services::adapters::{BoaScriptEngine, SandboxFrame, VtTerminalHost};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action, AppState, Workspace};

pub type TuiWorkbench = Workbench<TextArea, SandboxFrame, VtTerminalHost>;

const MAX_POLL_TIMEOUT: Duration = Duration::from_millis(50);
const LOG_BUFFER_CAP: usize = 200;
const MAX_LOG_DRAIN_PER_TICK: usize = 256;

pub struct App {
    workbench: TuiWorkbench,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings, log_rx: Option<Receiver<String>>) -> Self {
        let engine = BoaScriptEngine::new(settings.execution.clone());
        let state = AppState::new(Workspace::with_samples(), settings);
        let mut workbench = Workbench::new(
            state,
            TextArea::new(),
            SandboxFrame::attached(),
            VtTerminalHost::default(),
            engine,
        );
        // Renders right away when preview starts enabled.
        workbench.dispatch(Action::PreviewDue, Instant::now());

        Self {
            workbench,
            log_rx,
            logs: VecDeque::new(),
            should_quit: false,
        }
    }

    pub fn workbench(&self) -> &TuiWorkbench {
        &self.workbench
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => {
                let intent = map_key(key, &self.workbench.state().ui);
                self.apply_intent(intent, now)
            }
            Event::Paste(text) => {
                let mut changed = false;
                for ch in text.chars() {
                    let command = if ch == '\n' {
                        EditorCommand::Newline
                    } else {
                        EditorCommand::Insert(ch)
                    };
                    changed |= self.apply_editor_command(command, now);
                }
                changed
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn apply_intent(&mut self, intent: KeyIntent, now: Instant) -> bool {
        match intent {
            KeyIntent::Quit => {
                self.should_quit = true;
                true
            }
            KeyIntent::Dispatch(action) => self.workbench.dispatch(action, now),
            KeyIntent::Editor(command) => self.apply_editor_command(command, now),
            KeyIntent::SelectRelative(delta) => self.select_relative(delta, now),
            KeyIntent::Ignore => false,
        }
    }

    fn apply_editor_command(&mut self, command: EditorCommand, now: Instant) -> bool {
        let editor = self.workbench.editor_mut();
        let edited = match command {
            EditorCommand::Insert(ch) => editor.insert_char(ch),
            EditorCommand::Newline => editor.insert_newline(),
            EditorCommand::Backspace => editor.backspace(),
            EditorCommand::Delete => editor.delete(),
            EditorCommand::Move(movement) => {
                editor.move_cursor(movement);
                return true;
            }
        };
        match edited {
            Some(content) => {
                self.workbench
                    .dispatch(Action::EditActiveContent(content), now);
                true
            }
            None => false,
        }
    }

    fn select_relative(&mut self, delta: isize, now: Instant) -> bool {
        let workspace = &self.workbench.state().workspace;
        if workspace.is_empty() {
            return false;
        }
        let len = workspace.len() as isize;
        let current = workspace.active_index().map_or(-1, |i| i as isize);
        let next = (current + delta).clamp(0, len - 1) as usize;
        let Some(name) = workspace.files().get(next).map(|f| f.name.clone()) else {
            return false;
        };
        self.workbench.dispatch(Action::SelectFile { name }, now)
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.as_ref() else {
            return false;
        };

        let mut changed = false;
        for _ in 0..MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => {
                    if self.logs.len() >= LOG_BUFFER_CAP {
                        self.logs.pop_front();
                    }
                    self.logs.push_back(line);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.log_rx = None;
                    break;
                }
            }
        }
        changed
    }

    /// How long the loop may block on input before a timer or frame callback is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.workbench.has_pending_frame() {
            return Duration::ZERO;
        }
        self.workbench
            .next_deadline()
            .map_or(MAX_POLL_TIMEOUT, |deadline| {
                deadline.saturating_duration_since(now).min(MAX_POLL_TIMEOUT)
            })
    }

    fn render(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let area = terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, area.width, area.height);
        let layout = PanelLayout::compute(area, &self.workbench.state().ui);

        let now = Instant::now();
        if let Some(size) = layout.terminal_host_size() {
            self.workbench.observe_terminal_host(size, now);
        }
        self.workbench.frame();

        let log_line = self.logs.back().map(String::as_str);
        let (state, editor, preview, sessions) = self.workbench.view_parts();
        let files = state
            .workspace
            .files()
            .iter()
            .map(|f| {
                (
                    f.name.as_str(),
                    state.workspace.active_name() == Some(f.name.as_str()),
                )
            })
            .collect();
        let active_title = state
            .workspace
            .active_file()
            .map(|f| format!("{} [{}]", f.name, f.language.display_name()));

        terminal.draw(|frame| {
            draw(
                frame,
                &layout,
                FrameView {
                    ui: &state.ui,
                    files,
                    active_title,
                    editor,
                    preview,
                    terminal: sessions.session(),
                    log_line,
                },
            )
        })?;
        Ok(())
    }
}

pub fn run(settings: Settings, log_rx: Option<Receiver<String>>) -> io::Result<()> {
    let guard = TerminalGuard::new(settings.terminal.cursor_blink)?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    let _signal_thread = install_termination_signals(guard.restorer(), signal_tx)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(settings, log_rx);
    tracing::info!("workbench started");

    while !app.should_quit() {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "shutting down on signal");
            break;
        }

        let now = Instant::now();
        if event::poll(app.poll_timeout(now))? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.workbench.tick(Instant::now());
        app.poll_logs();
        app.render(&mut terminal)?;
    }

    app.workbench.shutdown();
    tracing::info!("workbench stopped");
    drop(guard);
    Ok(())
}

//! 布局与绘制（ratatui）

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::editor::TextArea;
use crate::kernel::services::adapters::SandboxFrame;
use crate::kernel::services::ports::{PreviewFrame, TerminalSurface};
use crate::kernel::state::{FocusTarget, NoticeLevel, UiState};
use crate::kernel::terminal::{HostSize, TerminalSession};
use crate::kernel::theme::{profile, Rgb, ThemeName};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH_PERCENT: u16 = 20;
const TERMINAL_HEIGHT_PERCENT: u16 = 35;
const LINE_NUMBER_WIDTH: usize = 4;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Colors for one frame, taken from the active theme profile.
#[derive(Debug, Clone, Copy)]
pub struct UiPalette {
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub selection_bg: Color,
    pub accent_fg: Color,
    pub terminal_bg: Color,
    pub terminal_fg: Color,
}

impl UiPalette {
    pub fn for_theme(theme: ThemeName) -> Self {
        let p = profile(theme);
        Self {
            bg: color(p.editor_bg),
            fg: color(p.editor_fg),
            muted_fg: color(p.line_number_fg),
            selection_bg: color(p.selection_bg),
            accent_fg: color(p.accent_fg),
            terminal_bg: color(p.terminal_bg),
            terminal_fg: color(p.terminal_fg),
        }
    }

    fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent_fg)
        } else {
            Style::default().fg(self.muted_fg)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub editor: Rect,
    pub preview: Option<Rect>,
    pub terminal: Option<Rect>,
    pub status: Rect,
}

impl PanelLayout {
    pub fn compute(area: Rect, ui: &UiState) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(SIDEBAR_WIDTH_PERCENT),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let (work, terminal) = if ui.terminal_visible {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Percentage(TERMINAL_HEIGHT_PERCENT),
                ])
                .split(columns[1]);
            (split[0], Some(split[1]))
        } else {
            (columns[1], None)
        };

        let (editor, preview) = if ui.preview_enabled {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(work);
            (split[0], Some(split[1]))
        } else {
            (work, None)
        };

        Self {
            header: rows[0],
            sidebar: columns[0],
            editor,
            preview,
            terminal,
            status: rows[2],
        }
    }

    /// Size of the terminal grid area (inside the panel border).
    pub fn terminal_host_size(&self) -> Option<HostSize> {
        self.terminal.map(|area| {
            let inner = Block::default().borders(Borders::ALL).inner(area);
            HostSize::new(inner.width, inner.height)
        })
    }
}

pub struct FrameView<'a, T: TerminalSurface> {
    pub ui: &'a UiState,
    pub files: Vec<(&'a str, bool)>,
    pub active_title: Option<String>,
    pub editor: &'a mut TextArea,
    pub preview: &'a SandboxFrame,
    pub terminal: Option<&'a TerminalSession<T>>,
    pub log_line: Option<&'a str>,
}

pub fn draw<T: TerminalSurface>(frame: &mut Frame, layout: &PanelLayout, mut view: FrameView<'_, T>) {
    let palette = UiPalette::for_theme(view.ui.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    draw_header(frame, layout.header, view.ui, &palette);
    draw_sidebar(frame, layout.sidebar, &view, &palette);
    draw_editor(frame, layout.editor, &mut *view.editor, &view.active_title, view.ui, &palette);
    if let Some(area) = layout.preview {
        draw_preview(frame, area, view.preview, &palette);
    }
    if let Some(area) = layout.terminal {
        draw_terminal(frame, area, view.terminal, view.ui, &palette);
    }
    draw_status(frame, layout.status, view.ui, view.log_line, &palette);
    if view.ui.new_file_dialog.visible {
        draw_dialog(frame, frame.area(), view.ui, &palette);
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn draw_header(frame: &mut Frame, area: Rect, ui: &UiState, palette: &UiPalette) {
    let text = format!(
        " zbench │ preview: {} │ terminal: {} │ theme: {} │ ^N new ^R run ^P preview ^T terminal ^L theme ^O focus ^Q quit",
        on_off(ui.preview_enabled),
        on_off(ui.terminal_visible),
        ui.theme.label(),
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(palette.accent_fg)),
        area,
    );
}

fn draw_sidebar<T: TerminalSurface>(
    frame: &mut Frame,
    area: Rect,
    view: &FrameView<'_, T>,
    palette: &UiPalette,
) {
    let block = Block::default()
        .title(" Files ")
        .borders(Borders::ALL)
        .border_style(palette.border(view.ui.focus == FocusTarget::Sidebar));

    let items: Vec<ListItem> = view
        .files
        .iter()
        .map(|(name, _)| ListItem::new(*name))
        .collect();
    let mut state = ListState::default();
    state.select(view.files.iter().position(|(_, active)| *active));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.selection_bg))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &mut TextArea,
    title: &Option<String>,
    ui: &UiState,
    palette: &UiPalette,
) {
    let focused = ui.focus == FocusTarget::Editor;
    let block = Block::default()
        .title(title.as_deref().map_or(" No file ".to_string(), |t| format!(" {t} ")))
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.is_empty() || !editor.has_model() {
        return;
    }

    let top = editor.scroll_to_cursor(inner.height as usize);
    let lines: Vec<Line> = (top..top + inner.height as usize)
        .map_while(|row| {
            editor.line(row).map(|text| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", row + 1, width = LINE_NUMBER_WIDTH - 1),
                        Style::default().fg(palette.muted_fg),
                    ),
                    Span::raw(text.replace('\t', "    ")),
                ])
            })
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && !ui.new_file_dialog.visible {
        let (row, _) = editor.cursor();
        let x = inner.x as usize + LINE_NUMBER_WIDTH + editor.cursor_display_col();
        let y = inner.y as usize + row - top;
        let x = x.min(inner.right().saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, y as u16));
    }
}

fn draw_preview(frame: &mut Frame, area: Rect, preview: &SandboxFrame, palette: &UiPalette) {
    let title = format!(" Preview [sandbox: {}] ", preview.sandbox());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    let body = match preview.document() {
        Some(doc) => Paragraph::new(doc.html.clone()),
        None => Paragraph::new("Waiting for first render...")
            .style(Style::default().fg(palette.muted_fg)),
    };
    frame.render_widget(body.block(block), area);
}

fn draw_terminal<T: TerminalSurface>(
    frame: &mut Frame,
    area: Rect,
    session: Option<&TerminalSession<T>>,
    ui: &UiState,
    palette: &UiPalette,
) {
    let focused = ui.focus == FocusTarget::Terminal;
    // A live session keeps the colors it was created with.
    let (bg, fg) = session.map_or((palette.terminal_bg, palette.terminal_fg), |s| {
        (color(s.options().background), color(s.options().foreground))
    });
    let block = Block::default()
        .title(" Terminal ")
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(Style::default().bg(bg).fg(fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = session else {
        frame.render_widget(
            Paragraph::new("Terminal starting...").style(Style::default().fg(palette.muted_fg)),
            inner,
        );
        return;
    };
    let terminal = session.surface();

    let lines: Vec<Line> = terminal
        .visible_rows()
        .into_iter()
        .take(inner.height as usize)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused && !inner.is_empty() {
        let (row, col) = terminal.cursor_position();
        let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
        let y = inner.y.saturating_add(row).min(inner.bottom().saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

fn draw_status(
    frame: &mut Frame,
    area: Rect,
    ui: &UiState,
    log_line: Option<&str>,
    palette: &UiPalette,
) {
    let line = match &ui.notice {
        Some(notice) => {
            let fg = match notice.level {
                NoticeLevel::Info => palette.accent_fg,
                NoticeLevel::Warning => Color::Yellow,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", notice.message),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled("(Esc to dismiss)", Style::default().fg(palette.muted_fg)),
            ])
        }
        None => Line::from(Span::styled(
            log_line.unwrap_or_default().to_string(),
            Style::default().fg(palette.muted_fg),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_dialog(frame: &mut Frame, area: Rect, ui: &UiState, palette: &UiPalette) {
    let dialog = &ui.new_file_dialog;
    let rect = centered(area, 48, 4);
    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(Style::default().bg(palette.bg).fg(palette.fg));
    let inner = block.inner(rect);

    let mut lines = vec![Line::from(dialog.value.as_str())];
    if let Some(err) = &dialog.error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);

    if !inner.is_empty() {
        let col = dialog.value[..dialog.cursor.min(dialog.value.len())]
            .chars()
            .count() as u16;
        let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;

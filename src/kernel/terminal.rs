//! Terminal session lifecycle: one live instance, coalesced layout fits, keystroke echo.
//!
//! The terminal is a cosmetic echo surface. Keystrokes are written back verbatim and Enter
//! prints a fresh prompt; no line buffer is kept and nothing is ever interpreted.

use std::time::Instant;

use super::schedule::{ScheduledTask, Scheduler, TaskHandle, TaskSlot, When};
use super::services::ports::{TerminalHost, TerminalSink, TerminalSurface};
use super::theme::{profile, Rgb, ThemeName};

pub const TERMINAL_GREETING: &str = "zbench terminal";

/// Size of the host surface in the host's layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSize {
    pub width: u16,
    pub height: u16,
}

impl HostSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    #[error("host surface has zero size ({width}x{height})")]
    ZeroSize { width: u16, height: u16 },
    #[error("terminal surface is detached")]
    Detached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    pub foreground: Rgb,
    pub background: Rgb,
    pub cursor_blink: bool,
    pub echo: bool,
    pub prompt: String,
    pub scrollback: usize,
}

impl TerminalOptions {
    /// Colors are captured here; a live session never picks up later theme switches.
    pub fn for_theme(theme: ThemeName, prompt: impl Into<String>) -> Self {
        let p = profile(theme);
        Self {
            foreground: p.terminal_fg,
            background: p.terminal_bg,
            cursor_blink: true,
            echo: true,
            prompt: prompt.into(),
            scrollback: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAddon {
    Fit,
    WebLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKeyCode {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermModifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermKey {
    pub code: TermKeyCode,
    pub modifiers: TermModifiers,
}

impl TermKey {
    pub fn new(code: TermKeyCode) -> Self {
        Self {
            code,
            modifiers: TermModifiers::default(),
        }
    }

    pub fn with_modifiers(code: TermKeyCode, modifiers: TermModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn char(ch: char) -> Self {
        Self::new(TermKeyCode::Char(ch))
    }
}

/// What the echo surface writes for `key`, if anything.
pub fn echo_for_key(key: &TermKey, prompt: &str) -> Option<String> {
    let m = key.modifiers;
    if m.alt || m.ctrl || m.meta {
        return None;
    }

    match key.code {
        TermKeyCode::Enter => Some(format!("\r\n{prompt}")),
        TermKeyCode::Char(ch) => Some(ch.to_string()),
        TermKeyCode::Tab => Some("\t".to_string()),
        TermKeyCode::Backspace | TermKeyCode::Escape | TermKeyCode::Other => None,
    }
}

/// Watches the host surface; only real size changes trigger a fit.
#[derive(Debug, Default)]
struct ResizeObserver {
    connected: bool,
    last: Option<HostSize>,
}

impl ResizeObserver {
    fn connect() -> Self {
        Self {
            connected: true,
            last: None,
        }
    }

    fn observe(&mut self, size: HostSize) -> bool {
        if !self.connected || self.last == Some(size) {
            return false;
        }
        self.last = Some(size);
        true
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.last = None;
    }
}

pub struct TerminalSession<S: TerminalSurface> {
    surface: S,
    options: TerminalOptions,
    addons: Vec<TerminalAddon>,
    observer: ResizeObserver,
    pending_fit: TaskSlot,
    grid: Option<GridSize>,
}

impl<S: TerminalSurface> TerminalSession<S> {
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn addons(&self) -> &[TerminalAddon] {
        &self.addons
    }

    pub fn grid(&self) -> Option<GridSize> {
        self.grid
    }

    pub fn prompt(&self) -> &str {
        &self.options.prompt
    }
}

impl<S: TerminalSurface> TerminalSink for TerminalSession<S> {
    fn write(&mut self, text: &str) {
        self.surface.write(text);
    }

    fn write_line(&mut self, text: &str) {
        self.surface.write_line(text);
    }
}

impl<S: TerminalSurface> std::fmt::Debug for TerminalSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("options", &self.options)
            .field("addons", &self.addons)
            .field("grid", &self.grid)
            .finish()
    }
}

/// Owns the single terminal instance. `acquire`/`release` bracket one visible-panel interval.
pub struct TerminalSessionManager<H: TerminalHost> {
    host: H,
    session: Option<TerminalSession<H::Surface>>,
}

impl<H: TerminalHost> TerminalSessionManager<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            session: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TerminalSession<H::Surface>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut TerminalSession<H::Surface>> {
        self.session.as_mut()
    }

    /// Creates the instance if none exists. Returns `false` when one is already live.
    pub fn acquire(&mut self, options: TerminalOptions) -> bool {
        if self.session.is_some() {
            return false;
        }

        let mut surface = self.host.create(&options);
        surface.write_line(TERMINAL_GREETING);
        surface.write(&options.prompt);

        self.session = Some(TerminalSession {
            surface,
            options,
            addons: vec![TerminalAddon::Fit, TerminalAddon::WebLinks],
            observer: ResizeObserver::connect(),
            pending_fit: TaskSlot::new(),
            grid: None,
        });
        tracing::debug!("terminal session acquired");
        true
    }

    /// Resize handler. Coalesces bursts: only the latest request survives to the next frame.
    pub fn observe_host_size(
        &mut self,
        size: HostSize,
        scheduler: &mut Scheduler,
        now: Instant,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.observer.observe(size) {
            return false;
        }

        session
            .pending_fit
            .replace(scheduler, now, When::NextFrame, ScheduledTask::FitTerminal);
        true
    }

    /// Runs a fit scheduled by `observe_host_size`. Stale handles are ignored.
    pub fn run_fit(&mut self, handle: TaskHandle) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.pending_fit.complete(handle) {
            return false;
        }
        let Some(size) = session.observer.last else {
            return false;
        };

        match session.surface.fit(size) {
            Ok(grid) => {
                let changed = session.grid != Some(grid);
                session.grid = Some(grid);
                changed
            }
            Err(err) => {
                tracing::warn!(error = %err, "terminal fit skipped");
                false
            }
        }
    }

    pub fn handle_key(&mut self, key: &TermKey) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.options.echo {
            return false;
        }
        let Some(text) = echo_for_key(key, &session.options.prompt) else {
            return false;
        };
        session.surface.write(&text);
        true
    }

    /// Tears the instance down. Nothing scheduled or observed may outlive this call.
    pub fn release(&mut self, scheduler: &mut Scheduler) -> bool {
        let Some(mut session) = self.session.take() else {
            return false;
        };

        session.observer.disconnect();
        session.pending_fit.cancel(scheduler);
        session.surface.dispose();
        tracing::debug!("terminal session released");
        true
    }

    pub fn live_observers(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |s| usize::from(s.observer.connected))
    }

    pub fn has_pending_fit(&self, scheduler: &Scheduler) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.pending_fit.is_pending(scheduler))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/terminal.rs"]
mod tests;

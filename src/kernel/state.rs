use super::preview::PreviewState;
use super::services::ports::Settings;
use super::theme::ThemeName;
use super::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Sidebar,
    Editor,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub preview_enabled: bool,
    pub terminal_visible: bool,
    pub theme: ThemeName,
    pub focus: FocusTarget,
    pub notice: Option<Notice>,
    pub new_file_dialog: InputDialogState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            preview_enabled: false,
            terminal_visible: false,
            theme: ThemeName::default(),
            focus: FocusTarget::Editor,
            notice: None,
            new_file_dialog: InputDialogState::default(),
        }
    }
}

impl UiState {
    /// Sidebar -> Editor -> Terminal, skipping the terminal while it is hidden.
    pub fn next_focus(&self) -> FocusTarget {
        match self.focus {
            FocusTarget::Sidebar => FocusTarget::Editor,
            FocusTarget::Editor if self.terminal_visible => FocusTarget::Terminal,
            FocusTarget::Editor | FocusTarget::Terminal => FocusTarget::Sidebar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub workspace: Workspace,
    pub ui: UiState,
    pub preview: PreviewState,
    pub settings: Settings,
}

impl AppState {
    pub fn new(workspace: Workspace, settings: Settings) -> Self {
        let ui = UiState {
            preview_enabled: settings.preview.enabled,
            theme: settings.theme,
            ..UiState::default()
        };
        Self {
            workspace,
            ui,
            preview: PreviewState::default(),
            settings,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Workspace::with_samples(), Settings::default())
    }
}

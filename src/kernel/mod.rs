//! Headless workbench core (state/action/effect).

pub mod action;
pub mod effect;
pub mod execution;
pub mod language;
pub mod preview;
pub mod schedule;
pub mod services;
pub mod state;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use execution::{ExecutionDispatcher, ExecutionOutcome};
pub use language::{classify, Language};
pub use preview::{build_document, PreviewDocument, PreviewError, PreviewState};
pub use schedule::{ScheduledTask, Scheduler, TaskHandle, TaskSlot, When};
pub use state::{AppState, FocusTarget, InputDialogState, Notice, NoticeLevel, UiState};
pub use store::{DispatchResult, Store};
pub use terminal::{
    FitError, GridSize, HostSize, TermKey, TermKeyCode, TermModifiers, TerminalOptions,
    TerminalSessionManager,
};
pub use theme::{ThemeName, ThemeProfile};
pub use workspace::{Workspace, WorkspaceError, WorkspaceFile};

use std::time::Duration;

use crate::kernel::preview::PreviewDocument;
use crate::kernel::terminal::{TermKey, TerminalOptions};
use crate::kernel::workspace::WorkspaceFile;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Push the active file (or its absence) and the theme into the editor surface.
    SyncEditor,
    SchedulePreview {
        delay: Duration,
    },
    CancelPreview,
    RenderPreview(PreviewDocument),
    AcquireTerminal(TerminalOptions),
    ReleaseTerminal,
    TerminalKey(TermKey),
    Execute(WorkspaceFile),
}

use crate::kernel::preview::PreviewDocument;
use crate::kernel::state::FocusTarget;
use crate::kernel::terminal::TermKey;
use crate::kernel::theme::ThemeName;

#[derive(Debug, Clone)]
pub enum Action {
    CreateFile {
        name: String,
    },
    SelectFile {
        name: String,
    },
    DeactivateFile,
    EditActiveContent(String),
    SetPreviewEnabled(bool),
    TogglePreview,
    /// The preview debounce elapsed.
    PreviewDue,
    PreviewRendered(PreviewDocument),
    SetTerminalVisible(bool),
    ToggleTerminal,
    TerminalKey(TermKey),
    RunActiveFile,
    SetTheme(ThemeName),
    ToggleTheme,
    SetFocus(FocusTarget),
    CycleFocus,
    DismissNotice,
    OpenNewFileDialog,
    NewFileDialogInput(char),
    NewFileDialogBackspace,
    NewFileDialogConfirm,
    NewFileDialogCancel,
}

use crate::kernel::language::Language;
use crate::kernel::preview::{PreviewDocument, PreviewError};
use crate::kernel::theme::{EditorThemeDefinition, ThemeName};

/// Rich editing widget. Content changes flow back as `Action::EditActiveContent`.
pub trait EditorSurface {
    /// Must be called for every theme before the first `set_model`.
    fn register_theme(&mut self, theme: &EditorThemeDefinition);

    fn set_model(&mut self, content: &str, language: Language, theme: ThemeName);

    /// Detaches the current model (no active file).
    fn clear_model(&mut self) {}
}

/// Isolated document context for previewed code.
pub trait PreviewFrame {
    /// Sandbox permission tokens applied to the frame.
    fn sandbox(&self) -> &str;

    fn is_attached(&self) -> bool;

    fn write_document(&mut self, document: &PreviewDocument) -> Result<(), PreviewError>;
}

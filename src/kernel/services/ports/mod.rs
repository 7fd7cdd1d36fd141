//! Service ports: traits + data contracts.

pub mod script;
pub mod settings;
pub mod surfaces;
pub mod terminal;

pub use script::{ExecutionError, ScriptEngine};
pub use settings::{ExecutionSettings, PreviewSettings, Settings, TerminalSettings};
pub use surfaces::{EditorSurface, PreviewFrame};
pub use terminal::{TerminalHost, TerminalSink, TerminalSurface};

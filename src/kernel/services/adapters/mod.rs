//! Service adapters: concrete implementations of the kernel ports.

pub mod paths;
pub mod sandbox_frame;
pub mod script;
pub mod settings;
#[cfg(feature = "terminal")]
pub mod vt_terminal;

pub use paths::{ensure_log_dir, get_log_dir};
pub use sandbox_frame::SandboxFrame;
pub use script::BoaScriptEngine;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, SettingsError,
};
#[cfg(feature = "terminal")]
pub use vt_terminal::{VtTerminal, VtTerminalHost};

//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel talks to (editor, preview frame, terminal, script engine).
//! - `adapters`: concrete implementations (boa engine, vt100 screen, settings file).

pub mod adapters;
pub mod ports;

//! TUI host (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the core builds without terminal crates.

pub mod app;
pub mod editor;
pub mod input;
pub mod render;
pub mod terminal_guard;

pub use app::{run, App, TuiWorkbench};

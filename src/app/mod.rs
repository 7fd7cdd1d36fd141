//! Application layer: wires the kernel store to concrete surfaces.

pub mod workbench;

pub use workbench::Workbench;

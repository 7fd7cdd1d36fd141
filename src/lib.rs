//! zbench - 单会话代码工作台
//!
//! 模块结构：
//! - kernel: 无界面核心（工作区、预览、终端会话、执行、调度、store）
//! - app: 工作台（执行 effect，驱动定时器与帧回调）
//! - tui: 终端界面宿主（ratatui + crossterm）

pub mod app;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;

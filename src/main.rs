//zbench/src/main.rs
use std::io;

use zbench::kernel::services::adapters::{ensure_settings_file, load_settings};

mod logging;

fn main() -> io::Result<()> {
    let mut logging_guard = logging::init();
    let log_rx = logging_guard.as_mut().and_then(|guard| guard.take_log_rx());
    if let Some(guard) = &logging_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    // 首次启动时写出默认配置，失败不影响启动
    match ensure_settings_file() {
        Ok(path) => tracing::debug!(path = %path.display(), "settings file ready"),
        Err(err) => tracing::warn!(error = %err, "cannot create settings file"),
    }
    let settings = load_settings();

    let result = zbench::tui::run(settings, log_rx);
    if let Err(err) = &result {
        tracing::error!(error = %err, "workbench exited with error");
    }
    drop(logging_guard);
    result
}

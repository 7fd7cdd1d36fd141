use crate::kernel::terminal::{FitError, GridSize, HostSize, TerminalOptions};

/// Write side of a terminal display. Execution output goes through this.
pub trait TerminalSink {
    fn write(&mut self, text: &str);

    fn write_line(&mut self, text: &str) {
        self.write(text);
        self.write("\r\n");
    }
}

/// One terminal-emulation instance bound to a host surface.
pub trait TerminalSurface: TerminalSink {
    /// Recomputes the row/column grid to fill `host`.
    fn fit(&mut self, host: HostSize) -> Result<GridSize, FitError>;

    fn dispose(&mut self);

    fn visible_rows(&self) -> Vec<String>;

    fn cursor_position(&self) -> (u16, u16) {
        (0, 0)
    }
}

/// Factory for terminal instances; colors and cursor style are fixed at construction.
pub trait TerminalHost {
    type Surface: TerminalSurface;

    fn create(&mut self, options: &TerminalOptions) -> Self::Surface;
}

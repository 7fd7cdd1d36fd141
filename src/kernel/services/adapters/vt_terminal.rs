//! Terminal surface backed by a `vt100` screen model.

use crate::kernel::services::ports::{TerminalHost, TerminalSink, TerminalSurface};
use crate::kernel::terminal::{FitError, GridSize, HostSize, TerminalOptions};

const DEFAULT_COLS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

pub struct VtTerminal {
    parser: vt100::Parser,
    cols: u16,
    rows: u16,
    disposed: bool,
}

impl VtTerminal {
    pub fn new(cols: u16, rows: u16, scrollback_len: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            parser: vt100::Parser::new(rows, cols, scrollback_len),
            cols,
            rows,
            disposed: false,
        }
    }

    pub fn grid(&self) -> GridSize {
        GridSize {
            cols: self.cols,
            rows: self.rows,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }
}

impl TerminalSink for VtTerminal {
    fn write(&mut self, text: &str) {
        if self.disposed || text.is_empty() {
            return;
        }
        self.parser.process(text.as_bytes());
    }
}

impl TerminalSurface for VtTerminal {
    fn fit(&mut self, host: HostSize) -> Result<GridSize, FitError> {
        if self.disposed {
            return Err(FitError::Detached);
        }
        if host.is_empty() {
            return Err(FitError::ZeroSize {
                width: host.width,
                height: host.height,
            });
        }

        if self.cols != host.width || self.rows != host.height {
            self.cols = host.width;
            self.rows = host.height;
            self.parser.screen_mut().set_size(self.rows, self.cols);
        }
        Ok(self.grid())
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }

    fn visible_rows(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .parser
            .screen()
            .rows(0, self.cols)
            .take(self.rows as usize)
            .collect();
        rows.resize(self.rows as usize, String::new());
        rows
    }

    fn cursor_position(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VtTerminalHost {
    cols: u16,
    rows: u16,
}

impl Default for VtTerminalHost {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl TerminalHost for VtTerminalHost {
    type Surface = VtTerminal;

    fn create(&mut self, options: &TerminalOptions) -> VtTerminal {
        VtTerminal::new(self.cols, self.rows, options.scrollback)
    }
}

//! 编辑器控件
//!
//! 职责：
//! - 文本存储（Rope）与光标（行, 字符列）
//! - 实现 `EditorSurface`：注册主题、切换模型
//! - 每次编辑返回完整新文本，由调用方转成 `Action::EditActiveContent`

use ropey::{Rope, RopeSlice};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

use crate::kernel::language::Language;
use crate::kernel::services::ports::EditorSurface;
use crate::kernel::theme::{EditorThemeDefinition, ThemeName};

fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Default)]
pub struct TextArea {
    rope: Rope,
    cursor: (usize, usize),
    scroll_row: usize,
    language: Option<Language>,
    theme: ThemeName,
    themes: FxHashMap<&'static str, EditorThemeDefinition>,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_model(&self) -> bool {
        self.language.is_some()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Definition registered for the current theme, if any.
    pub fn theme_definition(&self) -> Option<&EditorThemeDefinition> {
        self.themes.get(self.theme.editor_theme_id())
    }

    pub fn is_registered(&self, theme: ThemeName) -> bool {
        self.themes.contains_key(theme.editor_theme_id())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = slice_to_cow(self.rope.line(row));
        Some(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn line_len(&self, row: usize) -> usize {
        let line = slice_to_cow(self.rope.line(row));
        line.trim_end_matches(['\n', '\r']).chars().count()
    }

    fn cursor_char(&self) -> usize {
        self.rope.line_to_char(self.cursor.0) + self.cursor.1
    }

    pub fn insert_char(&mut self, ch: char) -> Option<String> {
        if !self.has_model() {
            return None;
        }
        let at = self.cursor_char();
        self.rope.insert_char(at, ch);
        self.cursor = if ch == '\n' {
            (self.cursor.0 + 1, 0)
        } else {
            (self.cursor.0, self.cursor.1 + 1)
        };
        Some(self.text())
    }

    pub fn insert_newline(&mut self) -> Option<String> {
        self.insert_char('\n')
    }

    pub fn backspace(&mut self) -> Option<String> {
        if !self.has_model() {
            return None;
        }
        let (row, col) = self.cursor;
        if col > 0 {
            let end = self.cursor_char();
            self.rope.remove(end - 1..end);
            self.cursor = (row, col - 1);
        } else if row > 0 {
            let prev_len = self.line_len(row - 1);
            let end = self.rope.line_to_char(row);
            self.rope.remove(end - 1..end);
            self.cursor = (row - 1, prev_len);
        } else {
            return None;
        }
        Some(self.text())
    }

    pub fn delete(&mut self) -> Option<String> {
        if !self.has_model() {
            return None;
        }
        let start = self.cursor_char();
        if start >= self.rope.len_chars() {
            return None;
        }
        self.rope.remove(start..start + 1);
        Some(self.text())
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let (row, col) = self.cursor;
        let last_row = self.rope.len_lines().saturating_sub(1);
        self.cursor = match movement {
            CursorMove::Left if col > 0 => (row, col - 1),
            CursorMove::Left if row > 0 => (row - 1, self.line_len(row - 1)),
            CursorMove::Right if col < self.line_len(row) => (row, col + 1),
            CursorMove::Right if row < last_row => (row + 1, 0),
            CursorMove::Up if row > 0 => (row - 1, col.min(self.line_len(row - 1))),
            CursorMove::Down if row < last_row => (row + 1, col.min(self.line_len(row + 1))),
            CursorMove::Home => (row, 0),
            CursorMove::End => (row, self.line_len(row)),
            _ => (row, col),
        };
    }

    /// Keeps the cursor row inside a viewport of `height` rows; returns the first visible row.
    pub fn scroll_to_cursor(&mut self, height: usize) -> usize {
        let height = height.max(1);
        if self.cursor.0 < self.scroll_row {
            self.scroll_row = self.cursor.0;
        } else if self.cursor.0 >= self.scroll_row + height {
            self.scroll_row = self.cursor.0 + 1 - height;
        }
        self.scroll_row
    }

    /// Display column of the cursor, counting wide characters as two cells.
    pub fn cursor_display_col(&self) -> usize {
        let Some(line) = self.line(self.cursor.0) else {
            return 0;
        };
        line.chars()
            .take(self.cursor.1)
            .map(|ch| if ch == '\t' { 4 } else { ch.width().unwrap_or(0) })
            .sum()
    }
}

impl EditorSurface for TextArea {
    fn register_theme(&mut self, theme: &EditorThemeDefinition) {
        self.themes.insert(theme.id, theme.clone());
    }

    fn set_model(&mut self, content: &str, language: Language, theme: ThemeName) {
        if !self.is_registered(theme) {
            tracing::warn!(theme = theme.editor_theme_id(), "editor theme not registered");
        }
        self.theme = theme;
        self.language = Some(language);

        // Re-syncing the same text (theme switch) keeps the cursor where it was.
        if self.rope != content {
            self.rope = Rope::from_str(content);
            self.cursor = (0, 0);
            self.scroll_row = 0;
        }
    }

    fn clear_model(&mut self) {
        self.rope = Rope::new();
        self.cursor = (0, 0);
        self.scroll_row = 0;
        self.language = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/editor.rs"]
mod tests;

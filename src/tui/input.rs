//! crossterm 键盘事件 → 工作台意图

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::editor::CursorMove;
use crate::kernel::state::{FocusTarget, UiState};
use crate::kernel::terminal::{TermKey, TermKeyCode, TermModifiers};
use crate::kernel::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Move(CursorMove),
}

#[derive(Debug, Clone)]
pub enum KeyIntent {
    Quit,
    Dispatch(Action),
    Editor(EditorCommand),
    /// Move the sidebar selection by this many files.
    SelectRelative(isize),
    Ignore,
}

pub fn map_key(key: KeyEvent, ui: &UiState) -> KeyIntent {
    if key.kind == KeyEventKind::Release {
        return KeyIntent::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        return KeyIntent::Quit;
    }

    if ui.new_file_dialog.visible {
        return map_dialog_key(key);
    }

    if ctrl {
        let action = match key.code {
            KeyCode::Char('n') => Action::OpenNewFileDialog,
            KeyCode::Char('p') => Action::TogglePreview,
            KeyCode::Char('t') => Action::ToggleTerminal,
            KeyCode::Char('r') => Action::RunActiveFile,
            KeyCode::Char('l') => Action::ToggleTheme,
            KeyCode::Char('o') => Action::CycleFocus,
            _ if ui.focus == FocusTarget::Terminal => {
                return KeyIntent::Dispatch(Action::TerminalKey(into_term_key(key)));
            }
            _ => return KeyIntent::Ignore,
        };
        return KeyIntent::Dispatch(action);
    }

    if key.code == KeyCode::Esc && ui.notice.is_some() {
        return KeyIntent::Dispatch(Action::DismissNotice);
    }

    match ui.focus {
        FocusTarget::Sidebar => match key.code {
            KeyCode::Up => KeyIntent::SelectRelative(-1),
            KeyCode::Down => KeyIntent::SelectRelative(1),
            KeyCode::Enter => KeyIntent::Dispatch(Action::SetFocus(FocusTarget::Editor)),
            _ => KeyIntent::Ignore,
        },
        FocusTarget::Editor => map_editor_key(key),
        FocusTarget::Terminal => KeyIntent::Dispatch(Action::TerminalKey(into_term_key(key))),
    }
}

fn map_dialog_key(key: KeyEvent) -> KeyIntent {
    let action = match key.code {
        KeyCode::Esc => Action::NewFileDialogCancel,
        KeyCode::Enter => Action::NewFileDialogConfirm,
        KeyCode::Backspace => Action::NewFileDialogBackspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::NewFileDialogInput(ch)
        }
        _ => return KeyIntent::Ignore,
    };
    KeyIntent::Dispatch(action)
}

fn map_editor_key(key: KeyEvent) -> KeyIntent {
    let command = match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            EditorCommand::Insert(ch)
        }
        KeyCode::Tab => EditorCommand::Insert('\t'),
        KeyCode::Enter => EditorCommand::Newline,
        KeyCode::Backspace => EditorCommand::Backspace,
        KeyCode::Delete => EditorCommand::Delete,
        KeyCode::Left => EditorCommand::Move(CursorMove::Left),
        KeyCode::Right => EditorCommand::Move(CursorMove::Right),
        KeyCode::Up => EditorCommand::Move(CursorMove::Up),
        KeyCode::Down => EditorCommand::Move(CursorMove::Down),
        KeyCode::Home => EditorCommand::Move(CursorMove::Home),
        KeyCode::End => EditorCommand::Move(CursorMove::End),
        _ => return KeyIntent::Ignore,
    };
    KeyIntent::Editor(command)
}

pub fn into_term_key(key: KeyEvent) -> TermKey {
    let modifiers = TermModifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        meta: key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    let code = match key.code {
        KeyCode::Char(ch) => TermKeyCode::Char(ch),
        KeyCode::Enter => TermKeyCode::Enter,
        KeyCode::Tab => TermKeyCode::Tab,
        KeyCode::Backspace => TermKeyCode::Backspace,
        KeyCode::Esc => TermKeyCode::Escape,
        _ => TermKeyCode::Other,
    };
    TermKey::with_modifiers(code, modifiers)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/input.rs"]
mod tests;

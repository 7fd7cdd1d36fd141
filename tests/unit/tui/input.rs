use super::*;
use crate::kernel::state::Notice;
use crossterm::event::KeyEventState;

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn plain(code: KeyCode) -> KeyEvent {
    key(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    key(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn ui_with_focus(focus: FocusTarget) -> UiState {
    UiState {
        focus,
        terminal_visible: true,
        ..UiState::default()
    }
}

#[test]
fn global_shortcuts_map_to_actions() {
    let ui = UiState::default();
    assert!(matches!(map_key(ctrl('q'), &ui), KeyIntent::Quit));
    assert!(matches!(
        map_key(ctrl('p'), &ui),
        KeyIntent::Dispatch(Action::TogglePreview)
    ));
    assert!(matches!(
        map_key(ctrl('t'), &ui),
        KeyIntent::Dispatch(Action::ToggleTerminal)
    ));
    assert!(matches!(
        map_key(ctrl('r'), &ui),
        KeyIntent::Dispatch(Action::RunActiveFile)
    ));
    assert!(matches!(
        map_key(ctrl('n'), &ui),
        KeyIntent::Dispatch(Action::OpenNewFileDialog)
    ));
}

#[test]
fn dialog_captures_typing() {
    let mut ui = UiState::default();
    ui.new_file_dialog.visible = true;

    assert!(matches!(
        map_key(plain(KeyCode::Char('a')), &ui),
        KeyIntent::Dispatch(Action::NewFileDialogInput('a'))
    ));
    assert!(matches!(
        map_key(ctrl('p'), &ui),
        KeyIntent::Ignore
    ));
    assert!(matches!(
        map_key(plain(KeyCode::Esc), &ui),
        KeyIntent::Dispatch(Action::NewFileDialogCancel)
    ));
    assert!(matches!(map_key(ctrl('q'), &ui), KeyIntent::Quit));
}

#[test]
fn escape_dismisses_notice_first() {
    let mut ui = UiState::default();
    ui.notice = Some(Notice::warning("x"));
    assert!(matches!(
        map_key(plain(KeyCode::Esc), &ui),
        KeyIntent::Dispatch(Action::DismissNotice)
    ));
}

#[test]
fn focus_routes_plain_keys() {
    let sidebar = ui_with_focus(FocusTarget::Sidebar);
    assert!(matches!(
        map_key(plain(KeyCode::Down), &sidebar),
        KeyIntent::SelectRelative(1)
    ));

    let editor = ui_with_focus(FocusTarget::Editor);
    assert!(matches!(
        map_key(plain(KeyCode::Char('x')), &editor),
        KeyIntent::Editor(EditorCommand::Insert('x'))
    ));
    assert!(matches!(
        map_key(plain(KeyCode::Enter), &editor),
        KeyIntent::Editor(EditorCommand::Newline)
    ));

    let terminal = ui_with_focus(FocusTarget::Terminal);
    match map_key(plain(KeyCode::Char('l')), &terminal) {
        KeyIntent::Dispatch(Action::TerminalKey(k)) => assert_eq!(k, TermKey::char('l')),
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn terminal_key_carries_modifiers() {
    let k = into_term_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(k.modifiers.ctrl);
    assert_eq!(k.code, TermKeyCode::Char('c'));
    assert_eq!(into_term_key(plain(KeyCode::F(1))).code, TermKeyCode::Other);
}

#[test]
fn release_events_are_ignored() {
    let mut ev = plain(KeyCode::Char('a'));
    ev.kind = KeyEventKind::Release;
    assert!(matches!(map_key(ev, &UiState::default()), KeyIntent::Ignore));
}

use super::{Action, AppState, Effect, FocusTarget, Notice};
use crate::kernel::preview::build_document;
use crate::kernel::terminal::TerminalOptions;
use crate::kernel::theme::ThemeName;

mod input_dialog;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::CreateFile { name } => self.create_file(&name).1,
            Action::SelectFile { name } => {
                if !self.state.workspace.set_active(&name) {
                    return DispatchResult::none();
                }
                let mut effects = vec![Effect::SyncEditor];
                effects.push(self.preview_followup());
                DispatchResult::changed(effects)
            }
            Action::DeactivateFile => {
                if !self.state.workspace.clear_active() {
                    return DispatchResult::none();
                }
                DispatchResult::changed(vec![Effect::SyncEditor, Effect::CancelPreview])
            }
            Action::EditActiveContent(content) => {
                if !self.state.workspace.update_active_content(content) {
                    return DispatchResult::none();
                }
                let effects = if self.active_is_previewable() && self.state.ui.preview_enabled {
                    vec![self.schedule_preview()]
                } else {
                    Vec::new()
                };
                DispatchResult::changed(effects)
            }
            Action::SetPreviewEnabled(enabled) => self.set_preview_enabled(enabled),
            Action::TogglePreview => {
                let enabled = !self.state.ui.preview_enabled;
                self.set_preview_enabled(enabled)
            }
            Action::PreviewDue => {
                if !self.state.ui.preview_enabled {
                    return DispatchResult::none();
                }
                let Some(file) = self.state.workspace.active_file() else {
                    return DispatchResult::none();
                };
                match build_document(&file.content, file.language) {
                    Some(document) => DispatchResult {
                        effects: vec![Effect::RenderPreview(document)],
                        state_changed: false,
                    },
                    None => DispatchResult::none(),
                }
            }
            Action::PreviewRendered(document) => {
                self.state.preview.record_render(document);
                DispatchResult::changed(Vec::new())
            }
            Action::SetTerminalVisible(visible) => self.set_terminal_visible(visible),
            Action::ToggleTerminal => {
                let visible = !self.state.ui.terminal_visible;
                self.set_terminal_visible(visible)
            }
            Action::TerminalKey(key) => {
                if !self.state.ui.terminal_visible {
                    return DispatchResult::none();
                }
                DispatchResult {
                    effects: vec![Effect::TerminalKey(key)],
                    state_changed: false,
                }
            }
            Action::RunActiveFile => self.run_active_file(),
            Action::SetTheme(theme) => self.set_theme(theme),
            Action::ToggleTheme => {
                let theme = self.state.ui.theme.toggle();
                self.set_theme(theme)
            }
            Action::SetFocus(target) => self.set_focus(target),
            Action::CycleFocus => {
                let target = self.state.ui.next_focus();
                self.set_focus(target)
            }
            Action::DismissNotice => {
                let dismissed = self.state.ui.notice.take().is_some();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: dismissed,
                }
            }
            Action::OpenNewFileDialog
            | Action::NewFileDialogInput(_)
            | Action::NewFileDialogBackspace
            | Action::NewFileDialogConfirm
            | Action::NewFileDialogCancel => self.reduce_input_dialog_action(action),
        }
    }

    /// Returns whether the file was created, plus the dispatch result.
    fn create_file(&mut self, name: &str) -> (bool, DispatchResult) {
        match self.state.workspace.create_file(name) {
            Ok(file) => {
                tracing::info!(file = %file.name, language = file.language.language_id(), "file created");
                let mut effects = vec![Effect::SyncEditor];
                effects.push(self.preview_followup());
                (true, DispatchResult::changed(effects))
            }
            Err(err) => {
                tracing::info!(error = %err, "file not created");
                self.state.ui.notice = Some(Notice::error(err.to_string()));
                (false, DispatchResult::changed(Vec::new()))
            }
        }
    }

    fn active_is_previewable(&self) -> bool {
        self.state
            .workspace
            .active_file()
            .is_some_and(|file| file.language.is_previewable())
    }

    fn schedule_preview(&self) -> Effect {
        Effect::SchedulePreview {
            delay: self.state.settings.preview.debounce(),
        }
    }

    /// After the active file changed: re-arm the preview, or drop whatever is pending.
    fn preview_followup(&self) -> Effect {
        if self.state.ui.preview_enabled && self.active_is_previewable() {
            self.schedule_preview()
        } else {
            Effect::CancelPreview
        }
    }

    fn set_preview_enabled(&mut self, enabled: bool) -> DispatchResult {
        if self.state.ui.preview_enabled == enabled {
            return DispatchResult::none();
        }
        self.state.ui.preview_enabled = enabled;
        DispatchResult::changed(vec![self.preview_followup()])
    }

    fn terminal_options(&self) -> TerminalOptions {
        let terminal = &self.state.settings.terminal;
        let mut options = TerminalOptions::for_theme(self.state.ui.theme, terminal.prompt.clone());
        options.cursor_blink = terminal.cursor_blink;
        options.scrollback = terminal.scrollback;
        options
    }

    fn set_terminal_visible(&mut self, visible: bool) -> DispatchResult {
        if self.state.ui.terminal_visible == visible {
            return DispatchResult::none();
        }
        self.state.ui.terminal_visible = visible;
        if visible {
            return DispatchResult::changed(vec![Effect::AcquireTerminal(self.terminal_options())]);
        }
        if self.state.ui.focus == FocusTarget::Terminal {
            self.state.ui.focus = FocusTarget::Editor;
        }
        DispatchResult::changed(vec![Effect::ReleaseTerminal])
    }

    fn run_active_file(&mut self) -> DispatchResult {
        let Some(file) = self.state.workspace.active_file().cloned() else {
            self.state.ui.notice = Some(Notice::warning("No active file to run"));
            return DispatchResult::changed(Vec::new());
        };

        let mut effects = Vec::with_capacity(2);
        let mut state_changed = false;
        if !self.state.ui.terminal_visible {
            self.state.ui.terminal_visible = true;
            effects.push(Effect::AcquireTerminal(self.terminal_options()));
            state_changed = true;
        }
        effects.push(Effect::Execute(file));
        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn set_theme(&mut self, theme: ThemeName) -> DispatchResult {
        if self.state.ui.theme == theme {
            return DispatchResult::none();
        }
        self.state.ui.theme = theme;
        DispatchResult::changed(vec![Effect::SyncEditor])
    }

    fn set_focus(&mut self, target: FocusTarget) -> DispatchResult {
        if target == FocusTarget::Terminal && !self.state.ui.terminal_visible {
            return DispatchResult::none();
        }
        if self.state.ui.focus == target {
            return DispatchResult::none();
        }
        self.state.ui.focus = target;
        DispatchResult::changed(Vec::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::OpenNewFileDialog => {
                let dialog = &mut self.state.ui.new_file_dialog;
                dialog.reset();
                dialog.visible = true;
                dialog.title = "New File".to_string();
                super::DispatchResult::changed(Vec::new())
            }
            Action::NewFileDialogInput(ch) => {
                let dialog = &mut self.state.ui.new_file_dialog;
                if !dialog.visible {
                    return super::DispatchResult::none();
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(Vec::new())
            }
            Action::NewFileDialogBackspace => {
                let dialog = &mut self.state.ui.new_file_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::none();
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(Vec::new())
            }
            Action::NewFileDialogConfirm => {
                if !self.state.ui.new_file_dialog.visible {
                    return super::DispatchResult::none();
                }

                let value = self.state.ui.new_file_dialog.value.trim().to_string();
                if value.is_empty() {
                    let dialog = &mut self.state.ui.new_file_dialog;
                    let prev = dialog.error.replace("Name required".to_string());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: prev.as_deref() != dialog.error.as_deref(),
                    };
                }

                let (created, result) = self.create_file(&value);
                let dialog = &mut self.state.ui.new_file_dialog;
                if created {
                    dialog.reset();
                } else {
                    dialog.error = self.state.ui.notice.as_ref().map(|n| n.message.clone());
                }
                result
            }
            Action::NewFileDialogCancel => {
                let dialog = &mut self.state.ui.new_file_dialog;
                if !dialog.visible {
                    return super::DispatchResult::none();
                }
                dialog.reset();
                super::DispatchResult::changed(Vec::new())
            }
            _ => super::DispatchResult::none(),
        }
    }
}

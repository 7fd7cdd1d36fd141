use std::time::Instant;

use super::Workbench;
use crate::kernel::schedule::{ScheduledTask, When};
use crate::kernel::services::ports::{EditorSurface, PreviewFrame, ScriptEngine, TerminalHost};
use crate::kernel::{Action, Effect, PreviewDocument};

impl<E, P, H, S> Workbench<E, P, H, S>
where
    E: EditorSurface,
    P: PreviewFrame,
    H: TerminalHost,
    S: ScriptEngine,
{
    pub(super) fn apply_effect(&mut self, effect: Effect, now: Instant) -> bool {
        match effect {
            Effect::SyncEditor => {
                self.sync_editor();
                true
            }
            Effect::SchedulePreview { delay } => {
                self.preview_slot.replace(
                    &mut self.scheduler,
                    now,
                    When::After(delay),
                    ScheduledTask::RenderPreview,
                );
                false
            }
            Effect::CancelPreview => {
                self.preview_slot.cancel(&mut self.scheduler);
                false
            }
            Effect::RenderPreview(document) => self.render_preview(document, now),
            Effect::AcquireTerminal(options) => self.terminal.acquire(options),
            Effect::ReleaseTerminal => self.terminal.release(&mut self.scheduler),
            Effect::TerminalKey(key) => self.terminal.handle_key(&key),
            Effect::Execute(file) => {
                let Some(session) = self.terminal.session_mut() else {
                    tracing::warn!(file = %file.name, "no terminal session to run in");
                    return false;
                };
                let outcome = self.executor.run(&file, session);
                tracing::info!(file = %file.name, outcome = ?outcome, "file executed");
                true
            }
        }
    }

    /// A failed write keeps the previously shown document.
    fn render_preview(&mut self, document: PreviewDocument, now: Instant) -> bool {
        match self.preview_frame.write_document(&document) {
            Ok(()) => self.dispatch(Action::PreviewRendered(document), now),
            Err(err) => {
                tracing::warn!(
                    language = document.language.language_id(),
                    error = %err,
                    "preview render failed"
                );
                false
            }
        }
    }
}

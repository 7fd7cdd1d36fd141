use std::time::Instant;

use super::Workbench;
use crate::kernel::schedule::{ScheduledTask, TaskHandle};
use crate::kernel::services::ports::{EditorSurface, PreviewFrame, ScriptEngine, TerminalHost};
use crate::kernel::Action;

impl<E, P, H, S> Workbench<E, P, H, S>
where
    E: EditorSurface,
    P: PreviewFrame,
    H: TerminalHost,
    S: ScriptEngine,
{
    /// Fires due timers (the preview debounce). Called by the main loop.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for (handle, task) in self.scheduler.take_due(now) {
            changed |= self.run_task(handle, task, now);
        }
        changed
    }

    /// Runs next-frame callbacks; call once per frame, before painting.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let mut changed = false;
        for (handle, task) in self.scheduler.take_frame_callbacks() {
            changed |= self.run_task(handle, task, now);
        }
        changed
    }

    /// Earliest timer deadline. Pending frame callbacks are reported by `has_pending_frame`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.has_frame_callbacks()
    }

    fn run_task(&mut self, handle: TaskHandle, task: ScheduledTask, now: Instant) -> bool {
        match task {
            ScheduledTask::RenderPreview => {
                if !self.preview_slot.complete(handle) {
                    return false;
                }
                self.dispatch(Action::PreviewDue, now)
            }
            ScheduledTask::FitTerminal => self.terminal.run_fit(handle),
        }
    }
}

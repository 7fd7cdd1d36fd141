//! 工作台：持有 store、调度器和各个宿主表面，负责执行 effect
//!
//! 职责：
//! - 把 `Action` 交给 store，并按顺序执行返回的 `Effect`
//! - 驱动预览防抖定时器和终端的下一帧 fit
//! - 拆除时保证不留下任何挂起的回调

use std::time::Instant;

use crate::kernel::services::adapters::BoaScriptEngine;
use crate::kernel::services::ports::{EditorSurface, PreviewFrame, ScriptEngine, TerminalHost};
use crate::kernel::terminal::HostSize;
use crate::kernel::theme::all_editor_themes;
use crate::kernel::{
    Action, AppState, ExecutionDispatcher, Scheduler, Store, TaskSlot, TerminalSessionManager,
};

mod effects;
mod tick;

pub struct Workbench<E, P, H, S = BoaScriptEngine>
where
    E: EditorSurface,
    P: PreviewFrame,
    H: TerminalHost,
    S: ScriptEngine,
{
    store: Store,
    scheduler: Scheduler,
    preview_slot: TaskSlot,
    terminal: TerminalSessionManager<H>,
    executor: ExecutionDispatcher<S>,
    editor: E,
    preview_frame: P,
}

impl<E, P, H, S> Workbench<E, P, H, S>
where
    E: EditorSurface,
    P: PreviewFrame,
    H: TerminalHost,
    S: ScriptEngine,
{
    pub fn new(state: AppState, mut editor: E, preview_frame: P, host: H, engine: S) -> Self {
        for theme in all_editor_themes() {
            editor.register_theme(&theme);
        }
        let prompt = state.settings.terminal.prompt.clone();

        let mut workbench = Self {
            store: Store::new(state),
            scheduler: Scheduler::new(),
            preview_slot: TaskSlot::new(),
            terminal: TerminalSessionManager::new(host),
            executor: ExecutionDispatcher::new(engine, prompt),
            editor,
            preview_frame,
        };
        workbench.sync_editor();
        workbench
    }

    /// Runs `action` through the store and applies the resulting effects in order.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        let result = self.store.dispatch(action);
        let mut changed = result.state_changed;
        for effect in result.effects {
            changed |= self.apply_effect(effect, now);
        }
        changed
    }

    pub fn observe_terminal_host(&mut self, size: HostSize, now: Instant) -> bool {
        self.terminal
            .observe_host_size(size, &mut self.scheduler, now)
    }

    /// Releases the terminal and drops the pending preview.
    pub fn shutdown(&mut self) {
        self.terminal.release(&mut self.scheduler);
        self.preview_slot.cancel(&mut self.scheduler);
        tracing::debug!(pending = self.scheduler.pending(), "workbench shut down");
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn preview_frame(&self) -> &P {
        &self.preview_frame
    }

    pub fn preview_frame_mut(&mut self) -> &mut P {
        &mut self.preview_frame
    }

    pub fn terminal(&self) -> &TerminalSessionManager<H> {
        &self.terminal
    }

    /// Split borrow for painting: the editor needs `&mut` to scroll while the rest is read.
    pub fn view_parts(&mut self) -> (&AppState, &mut E, &P, &TerminalSessionManager<H>) {
        (
            self.store.state(),
            &mut self.editor,
            &self.preview_frame,
            &self.terminal,
        )
    }

    pub fn has_pending_preview(&self) -> bool {
        self.preview_slot.is_pending(&self.scheduler)
    }

    fn sync_editor(&mut self) {
        let state = self.store.state();
        match state.workspace.active_file() {
            Some(file) => self
                .editor
                .set_model(&file.content, file.language, state.ui.theme),
            None => self.editor.clear_model(),
        }
    }
}

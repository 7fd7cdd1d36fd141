//! Cancellable deferred work for the single-threaded UI loop.
//!
//! Two kinds of deferral are supported and kept apart:
//! - wall-clock timers (`When::After`), fired by [`Scheduler::take_due`];
//! - next-frame callbacks (`When::NextFrame`), fired by [`Scheduler::take_frame_callbacks`]
//!   right before the host paints.
//!
//! Tasks are plain data; the owner maps them back to operations when they fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    After(Duration),
    NextFrame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    RenderPreview,
    FitTerminal,
}

#[derive(Debug)]
struct Timer {
    handle: TaskHandle,
    due: Instant,
    task: ScheduledTask,
}

#[derive(Debug)]
pub struct Scheduler {
    next_id: u64,
    timers: Vec<Timer>,
    frame: Vec<(TaskHandle, ScheduledTask)>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            next_id: 1,
            timers: Vec::new(),
            frame: Vec::new(),
        }
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, when: When, task: ScheduledTask) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        match when {
            When::After(delay) => self.timers.push(Timer {
                handle,
                due: now + delay,
                task,
            }),
            When::NextFrame => self.frame.push((handle, task)),
        }

        tracing::trace!(?task, ?when, handle = handle.0, "task scheduled");
        handle
    }

    /// Returns `false` if the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.timers.len() + self.frame.len();
        self.timers.retain(|t| t.handle != handle);
        self.frame.retain(|(h, _)| *h != handle);
        before != self.timers.len() + self.frame.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle) || self.frame.iter().any(|(h, _)| *h == handle)
    }

    /// Removes and returns every timer whose deadline is at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskHandle, ScheduledTask)> {
        if self.timers.iter().all(|t| t.due > now) {
            return Vec::new();
        }

        let mut due = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push((t.due, t.handle, t.task));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, handle, _)| (*at, handle.0));
        due.into_iter().map(|(_, h, task)| (h, task)).collect()
    }

    pub fn take_frame_callbacks(&mut self) -> Vec<(TaskHandle, ScheduledTask)> {
        std::mem::take(&mut self.frame)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.due).min()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.frame.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.timers.len() + self.frame.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frame.len()
    }
}

/// Holds at most one outstanding handle for a logical operation.
///
/// Re-arming always cancels the previous handle first, so only the most recent request survives.
#[derive(Debug, Default)]
pub struct TaskSlot {
    handle: Option<TaskHandle>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(
        &mut self,
        scheduler: &mut Scheduler,
        now: Instant,
        when: When,
        task: ScheduledTask,
    ) -> TaskHandle {
        self.cancel(scheduler);
        let handle = scheduler.schedule(now, when, task);
        self.handle = Some(handle);
        handle
    }

    pub fn cancel(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.handle.take() {
            Some(handle) => scheduler.cancel(handle),
            None => false,
        }
    }

    /// Clears the slot if `handle` is the one it holds. Call when the task fires.
    pub fn complete(&mut self, handle: TaskHandle) -> bool {
        if self.handle == Some(handle) {
            self.handle = None;
            return true;
        }
        false
    }

    pub fn handle(&self) -> Option<TaskHandle> {
        self.handle
    }

    pub fn is_pending(&self, scheduler: &Scheduler) -> bool {
        self.handle.is_some_and(|h| scheduler.is_pending(h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/schedule.rs"]
mod tests;

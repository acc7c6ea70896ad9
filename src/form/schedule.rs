//! One-shot scheduled tasks
//!
//! Deferred callbacks of the form (the submit re-enable fallback) are kept
//! here as data. Each task can be cancelled by its handle until it fires.
//! Time is passed in explicitly so the tick loop and tests share one path.
//! A delay too large to add to `now` never comes due.

use std::time::{Duration, Instant};

/// Handle of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// Work the form performs when a task fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTask {
    /// Give the submit control back if no response arrived
    ReenableSubmit { token: u64 },
}

#[derive(Debug, Clone)]
struct Scheduled {
    handle: TaskHandle,
    due: Option<Instant>,
    task: FormTask,
}

/// Pending one-shot tasks ordered by due time
#[derive(Debug, Default)]
pub struct Scheduler {
    next_handle: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: FormTask) -> TaskHandle {
        self.next_handle += 1;
        let handle = TaskHandle(self.next_handle);
        self.pending.push(Scheduled {
            handle,
            due: now.checked_add(delay),
            task,
        });
        handle
    }

    /// Cancel a task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<FormTask> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due.is_some_and(|due| due <= now) {
                due.push(s.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| s.due);
        due.into_iter().map(|s| s.task).collect()
    }
}

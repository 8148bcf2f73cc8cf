//! Deferred work keyed by the host's render tick
//!
//! The host advances a monotonically increasing tick counter once per
//! rendered frame. A `DeferredTask` records the tick at which it becomes due;
//! the owner polls it with the current tick and runs its work when
//! `take_if_due` reports true.

/// Host render tick counter
pub type Tick = u64;

/// A single cancellable task slot
///
/// Scheduling again replaces the pending task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeferredTask {
    due: Option<Tick>,
}

impl DeferredTask {
    /// Create an idle slot
    #[must_use]
    pub const fn new() -> Self {
        Self { due: None }
    }

    /// Schedule the task `delay` ticks after `now`
    pub const fn schedule(&mut self, now: Tick, delay: Tick) {
        self.due = Some(now.saturating_add(delay));
    }

    /// Drop the pending task, if any
    pub const fn cancel(&mut self) {
        self.due = None;
    }

    /// Whether a task is waiting to run
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Tick at which the pending task becomes due
    #[must_use]
    pub const fn due(&self) -> Option<Tick> {
        self.due
    }

    /// Consume the task if it is due at `now`
    pub const fn take_if_due(&mut self, now: Tick) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;

/// Timers touched by a write to an [`Expiring`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rearm {
    /// Freshly armed timer that will clear the new value.
    pub armed: TimerId,
    /// Timer of the value that was replaced, if it was still pending.
    pub superseded: Option<TimerId>,
}

/// A value that clears itself once the timer armed by its last write fires.
///
/// Each write arms a new timer id. Only a firing of the current id clears the
/// value, so a superseded timer whose cancellation arrives late is harmless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expiring<T> {
    value: Option<T>,
    timer: Option<TimerId>,
    next_timer: u64,
}

impl<T> Default for Expiring<T> {
    fn default() -> Self {
        Self {
            value: None,
            timer: None,
            next_timer: 0,
        }
    }
}

impl<T> Expiring<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn set(&mut self, value: T) -> Rearm {
        self.next_timer += 1;
        let armed = TimerId(self.next_timer);
        self.value = Some(value);
        Rearm {
            armed,
            superseded: self.timer.replace(armed),
        }
    }

    /// Drop the value now; returns the pending timer that should be cancelled.
    pub fn clear(&mut self) -> Option<TimerId> {
        self.value = None;
        self.timer.take()
    }

    /// Called when `timer` fires. Returns `true` if the value was cleared.
    pub fn expire(&mut self, timer: TimerId) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.timer = None;
        self.value.take().is_some()
    }
}

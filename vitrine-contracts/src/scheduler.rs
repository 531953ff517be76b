//! Timers, abstracted from the host event loop.

use std::time::Duration;

/// Owned reference to a live timer.
///
/// Neither `Clone` nor `Copy`: whoever holds the handle is the only party
/// that can cancel the timer, and cancelling consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a host timer id.
    pub fn from_raw(id: u64) -> Self {
        TimerHandle(id)
    }

    /// The host timer id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Host timer facility.
///
/// When a timer fires the host feeds the registered message back into the
/// controller that scheduled it. Fires are serialized with every other event:
/// the controller never observes a fire in the middle of another transition.
pub trait Scheduler<M> {
    /// Deliver `message` every `period` until the handle is cleared.
    fn set_interval(&mut self, period: Duration, message: M) -> TimerHandle;

    /// Deliver `message` once after `delay`.
    fn set_timeout(&mut self, delay: Duration, message: M) -> TimerHandle;

    /// Cancel a timer. Clearing a one-shot timer that already fired is a
    /// no-op.
    fn clear(&mut self, handle: TimerHandle);
}

impl<M, S: Scheduler<M> + ?Sized> Scheduler<M> for Box<S> {
    fn set_interval(&mut self, period: Duration, message: M) -> TimerHandle {
        (**self).set_interval(period, message)
    }

    fn set_timeout(&mut self, delay: Duration, message: M) -> TimerHandle {
        (**self).set_timeout(delay, message)
    }

    fn clear(&mut self, handle: TimerHandle) {
        (**self).clear(handle)
    }
}

//! Virtual time scheduler for deterministic timer tests

use std::collections::BTreeMap;
use std::time::Duration;

use vitrine_contracts::prelude::{
    CarouselSurface, Clock, FormSurface, Scheduler, SubmissionSink,
    TimerHandle,
};

use crate::carousel::{CarouselController, CarouselMessage};
use crate::form::{FormController, FormMessage};

/// Smallest step a repeating timer moves virtual time by.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct VirtualTimer<M> {
    deadline: Duration,
    /// `Some` for intervals, which are re-armed after each fire.
    period: Option<Duration>,
    message: M,
}

/// Scheduler whose clock only moves when a test says so.
///
/// Time starts at zero. Timers due at the same instant fire in the order
/// they were created.
#[derive(Debug)]
pub struct ManualScheduler<M> {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, VirtualTimer<M>>,
}

impl<M> Default for ManualScheduler<M> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            timers: BTreeMap::new(),
        }
    }
}

impl<M: Clone> ManualScheduler<M> {
    /// Current virtual time since the scheduler was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers not yet fired or cleared. Intervals count once.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Virtual time of the next fire.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    /// Fire the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Returns the message to deliver.
    pub fn fire_next(&mut self, until: Duration) -> Option<M> {
        let (&id, _) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(id, timer)| (timer.deadline, **id))?;

        let timer = self.timers.get_mut(&id)?;
        self.now = self.now.max(timer.deadline);
        let message = timer.message.clone();

        match timer.period {
            Some(period) => timer.deadline += period,
            None => {
                self.timers.remove(&id);
            }
        }
        Some(message)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn schedule(
        &mut self,
        delay: Duration,
        period: Option<Duration>,
        message: M,
    ) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(
            id,
            VirtualTimer {
                deadline: self.now + delay,
                period,
                message,
            },
        );
        TimerHandle::from_raw(id)
    }
}

impl<M: Clone> Scheduler<M> for ManualScheduler<M> {
    fn set_interval(&mut self, period: Duration, message: M) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.schedule(period, Some(period), message)
    }

    fn set_timeout(&mut self, delay: Duration, message: M) -> TimerHandle {
        self.schedule(delay, None, message)
    }

    fn clear(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle.raw());
    }
}

/// A controller whose timers run on a [`ManualScheduler`].
pub trait TimerDriven {
    type Message: Clone;

    fn manual_scheduler(&mut self) -> &mut ManualScheduler<Self::Message>;

    fn deliver(&mut self, message: Self::Message);
}

impl<S> TimerDriven
    for CarouselController<S, ManualScheduler<CarouselMessage>>
where
    S: CarouselSurface,
{
    type Message = CarouselMessage;

    fn manual_scheduler(&mut self) -> &mut ManualScheduler<CarouselMessage> {
        self.scheduler_mut()
    }

    fn deliver(&mut self, message: CarouselMessage) {
        self.update(message);
    }
}

impl<S, K, C> TimerDriven
    for FormController<S, ManualScheduler<FormMessage>, K, C>
where
    S: FormSurface,
    K: SubmissionSink,
    C: Clock,
{
    type Message = FormMessage;

    fn manual_scheduler(&mut self) -> &mut ManualScheduler<FormMessage> {
        self.scheduler_mut()
    }

    fn deliver(&mut self, message: FormMessage) {
        self.update(message);
    }
}

/// Advance virtual time by `by`, delivering every timer that comes due.
/// Returns how many fires were delivered.
pub fn advance<D: TimerDriven>(driven: &mut D, by: Duration) -> usize {
    let until = driven.manual_scheduler().now() + by;
    let mut fired = 0;
    while let Some(message) = driven.manual_scheduler().fire_next(until) {
        driven.deliver(message);
        fired += 1;
    }
    driven.manual_scheduler().advance_to(until);
    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_rearm_and_timeouts_fire_once() {
        let mut scheduler = ManualScheduler::<&'static str>::default();
        scheduler.set_interval(Duration::from_millis(100), "tick");
        scheduler.set_timeout(Duration::from_millis(150), "once");

        let until = Duration::from_millis(300);
        let mut fired = Vec::new();
        while let Some(message) = scheduler.fire_next(until) {
            fired.push((message, scheduler.now().as_millis()));
        }

        assert_eq!(
            fired,
            vec![("tick", 100), ("once", 150), ("tick", 200), ("tick", 300)]
        );
        assert_eq!(scheduler.live_timers(), 1);
    }

    #[test]
    fn cleared_timers_never_fire() {
        let mut scheduler = ManualScheduler::<u8>::default();
        let handle = scheduler.set_interval(Duration::from_millis(10), 1);
        scheduler.clear(handle);
        assert_eq!(scheduler.fire_next(Duration::from_secs(1)), None);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn timers_are_scheduled_relative_to_virtual_now() {
        let mut scheduler = ManualScheduler::<u8>::default();
        scheduler.advance_to(Duration::from_secs(2));
        scheduler.set_timeout(Duration::from_millis(500), 7);
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(2_500)));
    }
}

//! Serializes messages into a controller shared with DOM callbacks.
//!
//! Moving focus or removing elements inside an update can fire DOM events
//! synchronously (`blur` being the usual one). Those land here while the
//! controller is still borrowed; they are queued and run right after the
//! update that caused them, so no callback ever observes a half-applied
//! transition.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use vitrine_contracts::prelude::{
    CarouselSurface, Clock, FormSurface, Scheduler, SubmissionSink,
};
use vitrine_core::{
    CarouselController, CarouselMessage, EventOutcome, FormController,
    FormMessage,
};

/// A controller with a single message entry point.
pub trait Update {
    /// Messages the controller accepts.
    type Message;

    /// Apply one message.
    fn update(&mut self, message: Self::Message) -> EventOutcome;
}

impl<S, T> Update for CarouselController<S, T>
where
    S: CarouselSurface,
    T: Scheduler<CarouselMessage>,
{
    type Message = CarouselMessage;

    fn update(&mut self, message: CarouselMessage) -> EventOutcome {
        CarouselController::update(self, message)
    }
}

impl<S, T, K, C> Update for FormController<S, T, K, C>
where
    S: FormSurface,
    T: Scheduler<FormMessage>,
    K: SubmissionSink,
    C: Clock,
{
    type Message = FormMessage;

    fn update(&mut self, message: FormMessage) -> EventOutcome {
        FormController::update(self, message)
    }
}

/// Owns a controller and the messages queued behind its current update.
pub struct Driver<C: Update> {
    controller: RefCell<C>,
    backlog: RefCell<VecDeque<C::Message>>,
}

impl<C: Update> std::fmt::Debug for Driver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("busy", &self.controller.try_borrow_mut().is_err())
            .field("backlog", &self.backlog.borrow().len())
            .finish()
    }
}

impl<C: Update> Driver<C> {
    /// Wrap `controller` for sharing with DOM callbacks.
    pub fn new(controller: C) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(controller),
            backlog: RefCell::new(VecDeque::new()),
        })
    }

    /// Deliver `message`. Returns `None` when the message was queued behind
    /// an update already in progress; the caller cannot act on its outcome.
    pub fn send(&self, message: C::Message) -> Option<EventOutcome> {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            self.backlog.borrow_mut().push_back(message);
            return None;
        };

        let outcome = controller.update(message);
        self.drain(&mut controller);
        Some(outcome)
    }

    /// Run `f` against the controller outside of any update. Messages raised
    /// while `f` runs are applied before this returns. `None` when called
    /// from inside an update.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        let mut controller = self.controller.try_borrow_mut().ok()?;
        let result = f(&mut controller);
        self.drain(&mut controller);
        Some(result)
    }

    /// Number of messages waiting for the current update to finish.
    pub fn backlog_len(&self) -> usize {
        self.backlog.borrow().len()
    }

    fn drain(&self, controller: &mut C) {
        loop {
            let next = self.backlog.borrow_mut().pop_front();
            match next {
                Some(queued) => {
                    controller.update(queued);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::rc::Weak;

    /// Records what it sees and, for some messages, sends more through the
    /// driver that owns it.
    #[derive(Default)]
    struct Relay {
        driver: Weak<Driver<Relay>>,
        follow_ups: HashMap<u32, Vec<u32>>,
        seen: Vec<u32>,
        nested_outcomes: Vec<Option<EventOutcome>>,
    }

    impl Update for Relay {
        type Message = u32;

        fn update(&mut self, message: u32) -> EventOutcome {
            self.seen.push(message);
            let follow_ups = self.follow_ups.remove(&message).unwrap_or_default();
            if let Some(driver) = self.driver.upgrade() {
                for next in follow_ups {
                    self.nested_outcomes.push(driver.send(next));
                }
            }
            EventOutcome::PreventDefault
        }
    }

    fn relay(follow_ups: &[(u32, &[u32])]) -> Rc<Driver<Relay>> {
        let driver = Driver::new(Relay {
            follow_ups: follow_ups
                .iter()
                .map(|(message, next)| (*message, next.to_vec()))
                .collect(),
            ..Relay::default()
        });
        let weak = Rc::downgrade(&driver);
        driver.with(|relay| relay.driver = weak);
        driver
    }

    #[test]
    fn direct_send_reports_the_outcome() {
        let driver = relay(&[]);
        assert_eq!(driver.send(5), Some(EventOutcome::PreventDefault));
        assert_eq!(driver.with(|relay| relay.seen.clone()), Some(vec![5]));
    }

    #[test]
    fn messages_raised_during_an_update_run_afterwards_in_order() {
        let driver = relay(&[(1, &[2, 3]), (2, &[4])]);

        assert_eq!(driver.send(1), Some(EventOutcome::PreventDefault));

        let (seen, nested) = driver
            .with(|relay| (relay.seen.clone(), relay.nested_outcomes.clone()))
            .expect("driver is idle");
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(nested, vec![None, None, None]);
        assert_eq!(driver.backlog_len(), 0);
    }

    #[test]
    fn with_applies_messages_sent_from_inside() {
        let driver = relay(&[]);

        let outcome = driver.with(|relay| {
            let driver = relay.driver.upgrade().expect("driver is alive");
            let outcome = driver.send(7);
            assert_eq!(relay.seen, Vec::<u32>::new());
            outcome
        });

        assert_eq!(outcome, Some(None));
        assert_eq!(driver.with(|relay| relay.seen.clone()), Some(vec![7]));
    }

    #[test]
    fn with_is_refused_during_an_update() {
        let driver = relay(&[]);
        let nested = driver.with(|_| driver.with(|_| ()));
        assert_eq!(nested, Some(None));
    }
}

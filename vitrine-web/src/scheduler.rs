//! `Scheduler` backed by `window.setInterval` / `window.setTimeout`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use vitrine_contracts::prelude::{Scheduler, TimerHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Late-bound route from a fired timer back to its controller.
///
/// The scheduler is built before the controller that owns it, so the route
/// is installed afterwards with [`Dispatcher::bind`].
pub struct Dispatcher<M>(Rc<RefCell<Option<Rc<dyn Fn(M)>>>>);

impl<M> Clone for Dispatcher<M> {
    fn clone(&self) -> Self {
        Dispatcher(Rc::clone(&self.0))
    }
}

impl<M> std::fmt::Debug for Dispatcher<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("bound", &self.0.borrow().is_some())
            .finish()
    }
}

impl<M> Default for Dispatcher<M> {
    fn default() -> Self {
        Dispatcher(Rc::new(RefCell::new(None)))
    }
}

impl<M> Dispatcher<M> {
    /// Install the route. Replaces any earlier one.
    pub fn bind(&self, route: impl Fn(M) + 'static) {
        *self.0.borrow_mut() = Some(Rc::new(route));
    }

    /// Hand `message` to the bound route, if there is one.
    pub fn dispatch(&self, message: M) {
        // Release the cell before running the route; it may schedule again.
        let route = self.0.borrow().clone();
        match route {
            Some(route) => route(message),
            None => tracing::debug!("timer fired before its controller was bound"),
        }
    }
}

/// Timers on the browser window. Each fire goes through a [`Dispatcher`].
pub struct DomScheduler<M> {
    window: Window,
    dispatcher: Dispatcher<M>,
    intervals: HashMap<i32, Closure<dyn FnMut()>>,
    /// Cleared interval callbacks. An interval may be cleared from inside
    /// its own callback, so they are dropped at the next `set_interval`
    /// instead.
    retired: Vec<Closure<dyn FnMut()>>,
}

impl<M> std::fmt::Debug for DomScheduler<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomScheduler")
            .field("intervals", &self.intervals.len())
            .field("retired", &self.retired.len())
            .finish()
    }
}

impl<M: Clone + 'static> DomScheduler<M> {
    /// Schedule on `window`, delivering fires to `dispatcher`.
    pub fn new(window: Window, dispatcher: Dispatcher<M>) -> Self {
        Self {
            window,
            dispatcher,
            intervals: HashMap::new(),
            retired: Vec::new(),
        }
    }
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

impl<M: Clone + 'static> Scheduler<M> for DomScheduler<M> {
    fn set_interval(&mut self, period: Duration, message: M) -> TimerHandle {
        self.retired.clear();

        let dispatcher = self.dispatcher.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            dispatcher.dispatch(message.clone());
        });

        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period),
            ) {
            Ok(id) => {
                self.intervals.insert(id, callback);
                TimerHandle::from_raw(id as u64)
            }
            Err(error) => {
                tracing::error!(?error, "setInterval failed");
                TimerHandle::from_raw(u64::MAX)
            }
        }
    }

    fn set_timeout(&mut self, delay: Duration, message: M) -> TimerHandle {
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::once_into_js(move || {
            dispatcher.dispatch(message);
        });

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            ) {
            Ok(id) => TimerHandle::from_raw(id as u64),
            Err(error) => {
                tracing::error!(?error, "setTimeout failed");
                TimerHandle::from_raw(u64::MAX)
            }
        }
    }

    fn clear(&mut self, handle: TimerHandle) {
        let Ok(id) = i32::try_from(handle.raw()) else {
            return;
        };
        match self.intervals.remove(&id) {
            Some(callback) => {
                self.window.clear_interval_with_handle(id);
                self.retired.push(callback);
            }
            None => self.window.clear_timeout_with_handle(id),
        }
    }
}

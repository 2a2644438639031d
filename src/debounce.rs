//! Trailing debounce over a pluggable timer.
//!
//! Each [`Debounce::trigger`] cancels the pending run and schedules a new
//! one, so only the last trigger of a burst fires, `delay_ms` after it.
//! Cancellation is by dropping the scheduler's handle, which is how
//! `gloo_timers::callback::Timeout` behaves.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[cfg(test)]
#[path = "debounce_manual.rs"]
pub mod manual;

use std::cell::RefCell;
use std::rc::Rc;

/// Deferred single-shot callbacks. Dropping the handle cancels the callback
/// if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct Debounce<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debounce<S> {
    pub fn new(scheduler: S, delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self { scheduler, delay_ms, callback: Rc::new(callback), pending: RefCell::new(None) }
    }

    /// (Re)schedule the callback, cancelling any pending run.
    pub fn trigger(&self) {
        // Drop the old handle before scheduling so its timer is cleared first.
        self.pending.borrow_mut().take();
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(move || callback()));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(feature = "hydrate")]
pub use browser::TimeoutScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;

    use super::Scheduler;

    /// `setTimeout`-backed scheduler; the returned `Timeout` clears on drop.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TimeoutScheduler;

    impl Scheduler for TimeoutScheduler {
        type Handle = Timeout;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
            Timeout::new(delay_ms, callback)
        }
    }
}

//! Listener bookkeeping for the page controller.
//!
//! `Bindings` records every listener it attaches so `dispose` can detach
//! exactly that set, and owns the scroll debounce so disposal also cancels a
//! pending scroll pass. Dropping it disposes, so a controller that fails
//! halfway through binding leaves nothing attached.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use std::rc::Rc;

use crate::debounce::{Debounce, Scheduler};
use crate::error::InitError;

/// Where listeners are attached. The browser implementation wraps
/// `addEventListener` / `removeEventListener`.
pub trait EventSink {
    type Target;
    type Handler;

    /// Attach `handler`; `false` when the target rejects the registration.
    fn attach(&self, target: &Self::Target, event: &str, handler: &Self::Handler) -> bool;
    fn detach(&self, target: &Self::Target, event: &str, handler: &Self::Handler);
}

struct Registered<K: EventSink> {
    target: K::Target,
    event: &'static str,
    handler: K::Handler,
}

pub struct Bindings<K: EventSink, S: Scheduler> {
    sink: K,
    debounce: Rc<Debounce<S>>,
    listeners: Vec<Registered<K>>,
}

impl<K: EventSink, S: Scheduler> Bindings<K, S> {
    pub fn new(sink: K, debounce: Debounce<S>) -> Self {
        Self { sink, debounce: Rc::new(debounce), listeners: Vec::new() }
    }

    /// The scroll debounce, for wiring into a scroll listener.
    #[must_use]
    pub fn debounce(&self) -> Rc<Debounce<S>> {
        Rc::clone(&self.debounce)
    }

    /// Attach and record a listener.
    ///
    /// # Errors
    ///
    /// [`InitError::Listener`] when the sink rejects the registration; the
    /// handler is not recorded.
    pub fn register(&mut self, target: K::Target, event: &'static str, handler: K::Handler) -> Result<(), InitError> {
        if !self.sink.attach(&target, event, &handler) {
            return Err(InitError::Listener { event: event.to_owned() });
        }
        self.listeners.push(Registered { target, event, handler });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Cancel the pending scroll pass and detach every recorded listener.
    pub fn dispose(&mut self) {
        self.debounce.cancel();
        for listener in self.listeners.drain(..) {
            self.sink.detach(&listener.target, listener.event, &listener.handler);
        }
    }
}

impl<K: EventSink, S: Scheduler> Drop for Bindings<K, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

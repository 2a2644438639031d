use std::cell::{Cell, RefCell};

use super::*;
use crate::debounce::manual::ManualScheduler;

// =============================================================
// Helpers
// =============================================================

type Handler = Rc<dyn Fn()>;

/// In-memory event registry keyed by element name.
#[derive(Clone, Default)]
struct FakeSink {
    attached: Rc<RefCell<Vec<(&'static str, String, Handler)>>>,
    reject_event: Option<&'static str>,
}

impl EventSink for FakeSink {
    type Target = &'static str;
    type Handler = Handler;

    fn attach(&self, target: &&'static str, event: &str, handler: &Handler) -> bool {
        if self.reject_event == Some(event) {
            return false;
        }
        self.attached.borrow_mut().push((*target, event.to_owned(), Rc::clone(handler)));
        true
    }

    fn detach(&self, target: &&'static str, event: &str, handler: &Handler) {
        self.attached
            .borrow_mut()
            .retain(|(t, e, h)| !(t == target && e == event && Rc::ptr_eq(h, handler)));
    }
}

impl FakeSink {
    fn attached_count(&self) -> usize {
        self.attached.borrow().len()
    }

    fn dispatch(&self, target: &str, event: &str) {
        let handlers: Vec<Handler> = self
            .attached
            .borrow()
            .iter()
            .filter(|(t, e, _)| *t == target && e == event)
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

fn counter() -> (Rc<Cell<u32>>, Handler) {
    let count = Rc::new(Cell::new(0));
    let count_cb = Rc::clone(&count);
    let handler: Handler = Rc::new(move || count_cb.set(count_cb.get() + 1));
    (count, handler)
}

fn bindings(sink: &FakeSink, scheduler: &ManualScheduler) -> (Bindings<FakeSink, ManualScheduler>, Rc<Cell<u32>>) {
    let scrolls = Rc::new(Cell::new(0));
    let scrolls_cb = Rc::clone(&scrolls);
    let debounce = Debounce::new(scheduler.clone(), 50, move || scrolls_cb.set(scrolls_cb.get() + 1));
    (Bindings::new(sink.clone(), debounce), scrolls)
}

fn bind_scroll(bindings: &mut Bindings<FakeSink, ManualScheduler>) {
    let debounce = bindings.debounce();
    bindings.register("window", "scroll", Rc::new(move || debounce.trigger())).unwrap();
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_attaches_and_records() {
    let sink = FakeSink::default();
    let (mut bindings, _) = bindings(&sink, &ManualScheduler::default());
    let (clicks, handler) = counter();

    bindings.register("theme-toggle", "click", handler).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(sink.attached_count(), 1);

    sink.dispatch("theme-toggle", "click");
    assert_eq!(clicks.get(), 1);
}

#[test]
fn rejected_registration_is_listener_error() {
    let sink = FakeSink { reject_event: Some("submit"), ..FakeSink::default() };
    let (mut bindings, _) = bindings(&sink, &ManualScheduler::default());
    let (_, handler) = counter();

    let err = bindings.register("contact-form", "submit", handler).unwrap_err();
    assert_eq!(err, InitError::Listener { event: "submit".into() });
    assert!(bindings.is_empty());
    assert_eq!(sink.attached_count(), 0);
}

#[test]
fn failed_bind_leaves_nothing_attached() {
    let sink = FakeSink { reject_event: Some("submit"), ..FakeSink::default() };
    let scheduler = ManualScheduler::default();

    let result = (|| -> Result<Bindings<FakeSink, ManualScheduler>, InitError> {
        let (mut bindings, _) = bindings(&sink, &scheduler);
        bind_scroll(&mut bindings);
        bindings.register("menu-btn", "click", counter().1)?;
        bindings.register("contact-form", "submit", counter().1)?;
        Ok(bindings)
    })();

    assert!(result.is_err());
    assert_eq!(sink.attached_count(), 0);
}

// =============================================================
// Dispose
// =============================================================

#[test]
fn dispose_detaches_every_listener() {
    let sink = FakeSink::default();
    let (mut bindings, _) = bindings(&sink, &ManualScheduler::default());
    let (clicks, handler) = counter();
    bindings.register("menu-btn", "click", Rc::clone(&handler)).unwrap();
    bindings.register("menu-btn", "keydown", Rc::clone(&handler)).unwrap();
    bindings.register("document", "click", handler).unwrap();
    assert_eq!(sink.attached_count(), 3);

    bindings.dispose();
    assert!(bindings.is_empty());
    assert_eq!(sink.attached_count(), 0);

    sink.dispatch("menu-btn", "click");
    assert_eq!(clicks.get(), 0);
}

#[test]
fn dispose_cancels_pending_scroll_pass() {
    let sink = FakeSink::default();
    let scheduler = ManualScheduler::default();
    let (mut bindings, scrolls) = bindings(&sink, &scheduler);
    bind_scroll(&mut bindings);

    sink.dispatch("window", "scroll");
    scheduler.advance(20);
    bindings.dispose();
    scheduler.advance(100);

    assert_eq!(scrolls.get(), 0);
}

#[test]
fn scroll_pass_runs_when_not_disposed() {
    let sink = FakeSink::default();
    let scheduler = ManualScheduler::default();
    let (mut bindings, scrolls) = bindings(&sink, &scheduler);
    bind_scroll(&mut bindings);

    sink.dispatch("window", "scroll");
    sink.dispatch("window", "scroll");
    scheduler.advance(50);

    assert_eq!(scrolls.get(), 1);
}

#[test]
fn dispose_twice_is_safe() {
    let sink = FakeSink::default();
    let (mut bindings, _) = bindings(&sink, &ManualScheduler::default());
    bindings.register("nav", "click", counter().1).unwrap();

    bindings.dispose();
    bindings.dispose();
    assert_eq!(sink.attached_count(), 0);
}

#[test]
fn drop_detaches_listeners() {
    let sink = FakeSink::default();
    {
        let (mut bindings, _) = bindings(&sink, &ManualScheduler::default());
        bindings.register("nav", "click", counter().1).unwrap();
        assert_eq!(sink.attached_count(), 1);
    }
    assert_eq!(sink.attached_count(), 0);
}

//! Virtual-clock [`Scheduler`]: callbacks run only from [`ManualScheduler::advance`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Scheduler;

struct Entry {
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    now_ms: Rc<Cell<u64>>,
    queue: Rc<RefCell<Vec<Entry>>>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Entry {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            cancelled: Rc::clone(&cancelled),
            callback,
        });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    /// Move the clock forward and run every live callback that came due.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
        let now = self.now_ms.get();
        let due: Vec<Entry> = {
            let mut queue = self.queue.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = queue.drain(..).partition(|e| e.due_ms <= now);
            *queue = rest;
            due
        };
        for entry in due {
            if !entry.cancelled.get() {
                (entry.callback)();
            }
        }
    }
}

use std::cell::Cell;

use super::manual::ManualScheduler;
use super::*;

// =============================================================
// Helpers
// =============================================================

fn counting(scheduler: &ManualScheduler, delay_ms: u32) -> (Debounce<ManualScheduler>, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let fired_cb = Rc::clone(&fired);
    let debounce = Debounce::new(scheduler.clone(), delay_ms, move || fired_cb.set(fired_cb.get() + 1));
    (debounce, fired)
}

// =============================================================
// Trailing debounce
// =============================================================

#[test]
fn single_trigger_fires_after_delay() {
    let scheduler = ManualScheduler::default();
    let (debounce, fired) = counting(&scheduler, 50);

    debounce.trigger();
    scheduler.advance(49);
    assert_eq!(fired.get(), 0);
    scheduler.advance(1);
    assert_eq!(fired.get(), 1);
}

#[test]
fn burst_fires_once_after_last_trigger() {
    let scheduler = ManualScheduler::default();
    let (debounce, fired) = counting(&scheduler, 50);

    for _ in 0..5 {
        debounce.trigger();
        scheduler.advance(30);
    }
    assert_eq!(fired.get(), 0);

    scheduler.advance(19);
    assert_eq!(fired.get(), 0);
    scheduler.advance(1);
    assert_eq!(fired.get(), 1);

    scheduler.advance(500);
    assert_eq!(fired.get(), 1);
}

#[test]
fn separate_pauses_fire_separately() {
    let scheduler = ManualScheduler::default();
    let (debounce, fired) = counting(&scheduler, 50);

    debounce.trigger();
    scheduler.advance(60);
    debounce.trigger();
    scheduler.advance(60);
    assert_eq!(fired.get(), 2);
}

#[test]
fn cancel_drops_pending_run() {
    let scheduler = ManualScheduler::default();
    let (debounce, fired) = counting(&scheduler, 50);

    debounce.trigger();
    debounce.cancel();
    scheduler.advance(100);
    assert_eq!(fired.get(), 0);
}

#[test]
fn dropping_debounce_cancels_pending_run() {
    let scheduler = ManualScheduler::default();
    let (debounce, fired) = counting(&scheduler, 50);

    debounce.trigger();
    drop(debounce);
    scheduler.advance(100);
    assert_eq!(fired.get(), 0);
}

#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(Liveness::new().is_alive());
    assert!(Liveness::default().is_alive());
}

#[test]
fn cancel_is_seen_by_clones() {
    let liveness = Liveness::new();
    let other = liveness.clone();
    other.cancel();
    assert!(!liveness.is_alive());
}

#[test]
fn timers_do_not_fire_off_browser() {
    let fired = Rc::new(Cell::new(0));
    let liveness = Liveness::new();

    let once = Rc::clone(&fired);
    after(0, &liveness, move || once.set(once.get() + 1));
    let repeat = Rc::clone(&fired);
    every(0, &liveness, move || {
        repeat.set(repeat.get() + 1);
        true
    });

    assert_eq!(fired.get(), 0);
}

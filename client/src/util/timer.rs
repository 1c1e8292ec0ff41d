//! Component-scoped timers.
//!
//! DESIGN
//! ======
//! A timer is a local task that sleeps and then touches component state. The
//! task cannot be aborted, so each one checks a shared `Liveness` flag before
//! running its callback. `Liveness::scoped` clears the flag in the owning
//! component's `on_cleanup`, which makes callbacks after unmount inert.
//!
//! Off the browser (`ssr` rendering, native tests) timers never start.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "owner still mounted" flag.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag cleared when the current reactive owner is cleaned up.
    #[must_use]
    pub fn scoped() -> Self {
        let liveness = Self::new();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Run `callback` once after `delay_ms`, unless `liveness` is cancelled first.
pub fn after<F>(delay_ms: u64, liveness: &Liveness, callback: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            if liveness.is_alive() {
                callback();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, liveness, callback);
    }
}

/// Call `tick` every `period_ms` until it returns `false` or `liveness` is
/// cancelled. Ticks are strictly sequential.
pub fn every<F>(period_ms: u64, liveness: &Liveness, mut tick: F)
where
    F: FnMut() -> bool + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(period_ms)).await;
                if !liveness.is_alive() || !tick() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period_ms, liveness, &mut tick);
    }
}

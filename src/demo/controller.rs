//! Reactive controller binding the machine to a cancellable timer
//!
//! One controller instance is created by the `App` component and handed to
//! everything that can start, drive, or render the walkthrough. The machine
//! sits in a single `RwSignal` so every reader stays in sync; the repeating
//! timer handle is parked in thread-local storage (it is not `Send`) and is
//! cancelled before a new one is created (restart), when the final step is
//! reached, and on stop. No dangling intervals survive any path.

use leptos::prelude::*;

use super::machine::{DemoMachine, Tick};

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Interval;

#[cfg(target_arch = "wasm32")]
type TimerHandle = Interval;

// Native builds never schedule anything; the placeholder keeps the
// controller compilable so `cargo test` exercises the transition logic.
#[cfg(not(target_arch = "wasm32"))]
type TimerHandle = ();

/// Shared handle to the demo walkthrough state and its advance timer
#[derive(Clone, Copy)]
pub struct DemoController {
    machine: RwSignal<DemoMachine>,
    timer: StoredValue<Option<TimerHandle>, LocalStorage>,
}

impl DemoController {
    /// A controller in the idle state with no timer scheduled
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(DemoMachine::new()),
            timer: StoredValue::new_local(None),
        }
    }

    /// The machine signal, for reactive reads in views
    pub fn machine(&self) -> RwSignal<DemoMachine> {
        self.machine
    }

    /// Whether a repeating timer is currently scheduled
    pub fn has_live_timer(&self) -> bool {
        self.timer.with_value(Option::is_some)
    }

    /// Start (or restart) the walkthrough
    ///
    /// Cancel-then-create: any existing timer is cancelled before the new
    /// one is scheduled, so two calls in quick succession still leave
    /// exactly one live timer and the machine on step 0.
    pub fn start(&self) {
        self.cancel_timer();
        self.machine.update(DemoMachine::start);
        self.schedule();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"demo: walkthrough started".into());
    }

    /// Manual advance; ends the demo (and the timer) from the last step
    pub fn next(&self) {
        let ended = self
            .machine
            .try_update(|machine| {
                machine.next();
                !machine.is_active()
            })
            .unwrap_or(false);
        if ended {
            self.cancel_timer();
        }
    }

    /// Jump straight to a step; the timer, if any, keeps running
    pub fn jump_to(&self, index: usize) {
        self.machine.update(|machine| machine.jump_to(index));
    }

    /// Deactivate the walkthrough and cancel the timer
    ///
    /// The step index is preserved; `start()` rewinds it.
    pub fn stop(&self) {
        self.machine.update(DemoMachine::stop);
        self.cancel_timer();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"demo: walkthrough stopped".into());
    }

    fn cancel_timer(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(live) = self.timer.try_update_value(Option::take).flatten() {
            live.cancel();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.timer.try_update_value(Option::take);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule(&self) {
        use super::machine::STEP_INTERVAL_MS;

        let machine = self.machine;
        let timer = self.timer;
        let handle = Interval::new(STEP_INTERVAL_MS, move || {
            let outcome = machine.try_update(DemoMachine::tick);
            if matches!(outcome, Some(Tick::Finished) | None) {
                // Reached the terminal step (or the signal is gone):
                // the interval has nothing left to do.
                if let Some(live) = timer.try_update_value(Option::take).flatten() {
                    live.cancel();
                }
            }
        });
        self.timer.set_value(Some(handle));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule(&self) {
        self.timer.set_value(Some(()));
    }

    /// Drive one automatic tick by hand
    ///
    /// Native test seam for the interval callback: applies the same
    /// transition and the same cancel-at-terminal rule as the scheduled
    /// timer does in the browser.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn force_tick(&self) {
        let outcome = self.machine.try_update(DemoMachine::tick);
        if matches!(outcome, Some(Tick::Finished) | None) {
            self.cancel_timer();
        }
    }
}

impl Default for DemoController {
    fn default() -> Self {
        Self::new()
    }
}

//! Walkthrough state machine
//!
//! A single owned value models the whole demo: an active flag and a step
//! index bounded by [`STEP_COUNT`]. Both render targets (the inline panel
//! and the modal overlay) read this one machine through the controller, so
//! there is exactly one source of truth for the walkthrough position.
//!
//! The machine is deliberately pure: no timers, no DOM. Scheduling lives in
//! [`crate::demo::controller`], which makes every transition here testable
//! on native targets.

use crate::models::STEP_COUNT;

/// Milliseconds between automatic step advances
pub const STEP_INTERVAL_MS: u32 = 2_000;

/// Outcome of an automatic tick, used by the controller to decide whether
/// the repeating timer should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Advanced to a non-terminal step; keep ticking
    Advanced,
    /// On the last step (whether just reached or already there); the timer
    /// has nothing left to do and must be cancelled
    Finished,
}

/// Demo walkthrough state: `Idle` when inactive, `Step[0..=5]` when active
///
/// Invariant: `step() < STEP_COUNT` at all times. Transitions happen only
/// inside the methods below; the struct hands out no mutable access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoMachine {
    active: bool,
    step: usize,
}

impl DemoMachine {
    /// A fresh machine in the idle state
    pub const fn new() -> Self {
        Self {
            active: false,
            step: 0,
        }
    }

    /// Whether step content is currently shown instead of the idle prompt
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Current step index, in `[0, STEP_COUNT)`
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Whether the walkthrough sits on its final step
    pub const fn is_last_step(&self) -> bool {
        self.step + 1 == STEP_COUNT
    }

    /// Activate the demo and rewind to the first step
    ///
    /// Restart is idempotent: calling this from any state lands on
    /// `Step[0]`. Timer replacement is the controller's job.
    pub fn start(&mut self) {
        self.active = true;
        self.step = 0;
    }

    /// Automatic advance driven by the repeating timer
    ///
    /// Advances one step if not yet at the end. Returns [`Tick::Finished`]
    /// once the machine sits on the last step so the caller cancels the
    /// timer; a tick that arrives while already terminal changes nothing.
    pub fn tick(&mut self) -> Tick {
        if !self.is_last_step() {
            self.step += 1;
        }
        if self.is_last_step() {
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }

    /// Manual advance: one step forward, or end the demo from the last step
    pub fn next(&mut self) {
        if self.is_last_step() {
            self.active = false;
        } else {
            self.step += 1;
        }
    }

    /// Jump directly to a step, forward or backward
    ///
    /// Out-of-range indices clamp to the last step; no error path, matching
    /// the fire-and-forget UI behavior.
    pub fn jump_to(&mut self, index: usize) {
        self.step = index.min(STEP_COUNT - 1);
    }

    /// Deactivate the demo, leaving the step index untouched
    ///
    /// A later [`start`](Self::start) rewinds explicitly, so nothing is
    /// reset here.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_machine_is_idle_at_step_zero() {
        let machine = DemoMachine::new();
        assert!(!machine.is_active());
        assert_eq!(machine.step(), 0);
    }

    #[test]
    fn test_start_activates_and_rewinds() {
        let mut machine = DemoMachine::new();
        machine.start();
        machine.jump_to(4);
        machine.start();
        assert!(machine.is_active());
        assert_eq!(machine.step(), 0);
    }

    #[test]
    fn test_next_strictly_increases_until_last_step() {
        let mut machine = DemoMachine::new();
        machine.start();
        for expected in 1..STEP_COUNT {
            assert!(machine.is_active());
            machine.next();
            assert_eq!(machine.step(), expected);
        }
        // One more next() from the last step ends the demo.
        assert!(machine.is_last_step());
        machine.next();
        assert!(!machine.is_active());
        assert_eq!(machine.step(), STEP_COUNT - 1);
    }

    #[test]
    fn test_tick_never_advances_past_last_step() {
        let mut machine = DemoMachine::new();
        machine.start();
        for expected in 1..STEP_COUNT {
            let outcome = machine.tick();
            assert_eq!(machine.step(), expected);
            if expected == STEP_COUNT - 1 {
                assert_eq!(outcome, Tick::Finished);
            } else {
                assert_eq!(outcome, Tick::Advanced);
            }
        }
        // Terminal tick is idempotent: no state change, still Finished.
        let before = machine;
        assert_eq!(machine.tick(), Tick::Finished);
        assert_eq!(machine, before);
    }

    #[test]
    fn test_fifth_tick_reports_finished() {
        let mut machine = DemoMachine::new();
        machine.start();
        let outcomes: Vec<Tick> = (0..5).map(|_| machine.tick()).collect();
        assert_eq!(
            outcomes,
            vec![
                Tick::Advanced,
                Tick::Advanced,
                Tick::Advanced,
                Tick::Advanced,
                Tick::Finished,
            ]
        );
        assert!(machine.is_active());
        assert_eq!(machine.step(), STEP_COUNT - 1);
    }

    #[test]
    fn test_jump_to_sets_exact_step_from_any_state() {
        let mut machine = DemoMachine::new();
        machine.start();
        for target in [5, 0, 3, 3, 1] {
            machine.jump_to(target);
            assert_eq!(machine.step(), target);
        }
    }

    #[test]
    fn test_jump_to_clamps_out_of_range() {
        let mut machine = DemoMachine::new();
        machine.start();
        machine.jump_to(99);
        assert_eq!(machine.step(), STEP_COUNT - 1);
        machine.jump_to(STEP_COUNT);
        assert_eq!(machine.step(), STEP_COUNT - 1);
    }

    #[test]
    fn test_stop_deactivates_and_preserves_step() {
        let mut machine = DemoMachine::new();
        machine.start();
        machine.jump_to(3);
        machine.stop();
        assert!(!machine.is_active());
        assert_eq!(machine.step(), 3);
    }

    #[test]
    fn test_jump_to_last_then_next_ends_demo() {
        let mut machine = DemoMachine::new();
        machine.start();
        machine.jump_to(STEP_COUNT - 1);
        machine.next();
        assert!(!machine.is_active());
    }

    #[test]
    fn test_interval_constant() {
        assert_eq!(STEP_INTERVAL_MS, 2_000);
    }
}

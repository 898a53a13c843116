//! Behavioral tests for the walkthrough state machine and controller

use leptos::prelude::GetUntracked;

use crate::demo::{DemoController, DemoMachine, STEP_INTERVAL_MS, Tick};
use crate::models::STEP_COUNT;

// ============================================================================
// MACHINE BEHAVIORS
// ============================================================================

#[test]
fn given_idle_machine_when_started_then_active_at_step_zero() {
    let mut machine = DemoMachine::new();
    machine.start();
    assert!(machine.is_active());
    assert_eq!(machine.step(), 0);
}

#[test]
fn given_started_machine_when_next_called_repeatedly_then_step_strictly_increases() {
    let mut machine = DemoMachine::new();
    machine.start();
    let mut previous = machine.step();
    for _ in 0..(STEP_COUNT - 1) {
        machine.next();
        assert!(machine.step() > previous, "step must strictly increase");
        assert!(machine.is_active(), "demo stays active before the last next");
        previous = machine.step();
    }
}

#[test]
fn given_machine_on_last_step_when_next_called_then_demo_ends() {
    let mut machine = DemoMachine::new();
    machine.start();
    for _ in 0..(STEP_COUNT - 1) {
        machine.next();
    }
    assert_eq!(machine.step(), STEP_COUNT - 1);
    machine.next();
    assert!(!machine.is_active(), "active turns false only from the last step");
}

#[test]
fn given_five_ticks_after_start_then_machine_rests_on_last_step() {
    // Scenario from the walkthrough contract: start, wait five automatic
    // ticks, land on the final step with the timer done.
    let mut machine = DemoMachine::new();
    machine.start();
    let mut last_outcome = Tick::Advanced;
    for _ in 0..5 {
        last_outcome = machine.tick();
    }
    assert!(machine.is_active());
    assert_eq!(machine.step(), 5);
    assert_eq!(last_outcome, Tick::Finished);
}

#[test]
fn given_machine_on_last_step_when_ticked_then_nothing_changes() {
    let mut machine = DemoMachine::new();
    machine.start();
    machine.jump_to(STEP_COUNT - 1);
    let before = machine;
    assert_eq!(machine.tick(), Tick::Finished);
    assert_eq!(machine, before, "terminal tick is idempotent");
}

#[test]
fn given_any_step_when_jumping_in_range_then_step_is_exact_and_idempotent() {
    let mut machine = DemoMachine::new();
    machine.start();
    for target in 0..STEP_COUNT {
        machine.jump_to(target);
        assert_eq!(machine.step(), target);
        machine.jump_to(target);
        assert_eq!(machine.step(), target, "repeated jump is idempotent");
    }
}

#[test]
fn given_out_of_range_jump_then_step_clamps_to_last() {
    let mut machine = DemoMachine::new();
    machine.start();
    machine.jump_to(usize::MAX);
    assert_eq!(machine.step(), STEP_COUNT - 1);
}

#[test]
fn given_active_machine_when_stopped_then_inactive_with_step_preserved() {
    let mut machine = DemoMachine::new();
    machine.start();
    machine.jump_to(4);
    machine.stop();
    assert!(!machine.is_active());
    assert_eq!(machine.step(), 4);
}

#[test]
fn given_start_then_jump_to_last_then_next_then_demo_is_over() {
    // Scenario: start(), jumpTo(5), next() ends the walkthrough.
    let mut machine = DemoMachine::new();
    machine.start();
    machine.jump_to(5);
    machine.next();
    assert!(!machine.is_active());
}

// ============================================================================
// CONTROLLER BEHAVIORS
// ============================================================================

#[test]
fn given_controller_when_started_twice_then_single_timer_at_step_zero() {
    // Scenario: two starts in quick succession restart cleanly.
    let controller = DemoController::new();
    controller.start();
    controller.jump_to(3);
    controller.start();
    let machine = controller.machine().get_untracked();
    assert!(machine.is_active());
    assert_eq!(machine.step(), 0);
    assert!(controller.has_live_timer());
}

#[test]
fn given_running_controller_when_stopped_then_timer_is_cancelled() {
    let controller = DemoController::new();
    controller.start();
    assert!(controller.has_live_timer());
    controller.stop();
    assert!(!controller.has_live_timer());
}

#[test]
fn given_controller_when_ticked_to_terminal_then_timer_is_cancelled() {
    let controller = DemoController::new();
    controller.start();
    for _ in 0..(STEP_COUNT - 1) {
        controller.force_tick();
    }
    assert!(!controller.has_live_timer(), "timer dies on the terminal step");
    assert!(controller.machine().get_untracked().is_active());
}

#[test]
fn given_controller_when_finishing_via_next_then_demo_and_timer_end() {
    let controller = DemoController::new();
    controller.start();
    controller.jump_to(STEP_COUNT - 1);
    controller.next();
    assert!(!controller.machine().get_untracked().is_active());
    assert!(!controller.has_live_timer());
}

#[test]
fn given_interval_constant_then_it_matches_two_seconds() {
    assert_eq!(STEP_INTERVAL_MS, 2_000);
}

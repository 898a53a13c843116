//! The scripted live-demo walkthrough
//!
//! This is the one piece of real logic in the crate: a six-step state
//! machine ([`machine::DemoMachine`]) plus the reactive controller
//! ([`controller::DemoController`]) that owns the auto-advance timer and
//! feeds both the inline panel and the modal overlay.

pub mod controller;
pub mod machine;

pub use controller::DemoController;
pub use machine::{DemoMachine, STEP_INTERVAL_MS, Tick};

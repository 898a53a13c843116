//! Behavioral tests for the pitch site
//!
//! BDD-style suites using given-when-then naming. These focus on observable
//! behavior: walkthrough transitions, catalog invariants, and chart
//! geometry.

mod content_behaviors;
mod demo_behaviors;
mod geometry_behaviors;

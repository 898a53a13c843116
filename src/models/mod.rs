//! Data models for the pitch site
//!
//! Everything under this module is static catalog data: page copy, chart
//! figures, the process-flow graph, and the walkthrough script. The only
//! mutable runtime state in the crate lives in [`crate::demo`].

pub mod charts;
pub mod colors;
pub mod content;
pub mod flow;
pub mod steps;

pub use colors::{RgbColor, Tone, tone_color};
pub use steps::{DemoStep, STEP_COUNT, demo_steps};

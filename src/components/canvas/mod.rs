//! Canvas rendering helpers
//!
//! The analytics charts and the process-flow diagram draw on HTML5 canvas.
//! Geometry (bar layout, donut angles, coordinate scaling) is kept in pure
//! functions so it tests on native targets; only the `draw_*` functions
//! touch the 2D context.

pub mod chart;
pub mod context;
pub mod diagram;

pub use chart::{BarRect, bar_layout, donut_angles};
pub use context::get_2d_context;
pub use diagram::scale_positions;

//! Bar and donut chart rendering
//!
//! Layout math is pure and validated; drawing applies the computed geometry
//! to the 2D context with the shared tone palette.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::error::{UiError, UiResult};
use crate::models::charts::{BarEntry, ChartSlice};
use crate::models::{Tone, tone_color};

/// Background fill behind both charts
const CHART_BACKGROUND: &str = "#1F2937";

/// Axis/label text color
const LABEL_COLOR: &str = "#9CA3AF";

/// Fraction of the donut radius removed for the hole
const DONUT_HOLE_RATIO: f64 = 0.55;

/// Computed screen rectangle for one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars inside a `width` x `height` plot area
///
/// Bars share the horizontal space evenly with `gap` pixels between them;
/// the tallest value spans the full plot height.
///
/// # Errors
///
/// Returns an error if the plot area is not positive and finite, if
/// `values` is empty, or if any value is negative or non-finite.
pub fn bar_layout(values: &[f64], width: f64, height: f64, gap: f64) -> UiResult<Vec<BarRect>> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(UiError::Geometry(format!(
            "plot area must be positive, got {width}x{height}"
        )));
    }
    if values.is_empty() {
        return Err(UiError::Geometry("no bar values".to_string()));
    }
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(UiError::Geometry("bar values must be non-negative".to_string()));
    }

    let count = values.len() as f64;
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    let bar_width = ((width - gap * (count - 1.0)) / count).max(1.0);

    Ok(values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = value / max * height;
            BarRect {
                x: (bar_width + gap) * i as f64,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect())
}

/// Compute (start, end) angles in radians for each donut slice
///
/// Slices are proportional to their values and sweep clockwise from the top
/// of the circle; the last slice always closes the full turn.
///
/// # Errors
///
/// Returns an error if `values` is empty, contains a negative or non-finite
/// entry, or sums to zero.
pub fn donut_angles(values: &[f64]) -> UiResult<Vec<(f64, f64)>> {
    if values.is_empty() {
        return Err(UiError::Geometry("no donut values".to_string()));
    }
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(UiError::Geometry(
            "donut values must be non-negative".to_string(),
        ));
    }
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(UiError::Geometry("donut values sum to zero".to_string()));
    }

    let top = -PI / 2.0;
    let mut cursor = top;
    Ok(values
        .iter()
        .map(|value| {
            let sweep = value / total * 2.0 * PI;
            let arc = (cursor, cursor + sweep);
            cursor += sweep;
            arc
        })
        .collect())
}

/// Draw the time-savings bar chart
///
/// # Errors
///
/// Returns an error if layout validation fails.
pub fn draw_bar_chart(
    ctx: &CanvasRenderingContext2d,
    entries: &[BarEntry],
    width: f64,
    height: f64,
) -> UiResult<()> {
    const PADDING: f64 = 24.0;
    const LABEL_BAND: f64 = 28.0;

    ctx.set_fill_style_str(CHART_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = entries.iter().map(|e| e.hours).collect();
    let plot_width = width - PADDING * 2.0;
    let plot_height = height - PADDING - LABEL_BAND;
    let rects = bar_layout(&values, plot_width, plot_height, 18.0)?;

    let fill = tone_color(Tone::Accent);
    ctx.set_fill_style_str(&fill.to_css_alpha(0.7));
    ctx.set_stroke_style_str(&fill.to_css());
    for rect in &rects {
        let x = PADDING + rect.x;
        let y = PADDING + rect.y;
        ctx.fill_rect(x, y, rect.width, rect.height);
        ctx.stroke_rect(x, y, rect.width, rect.height);
    }

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (entry, rect) in entries.iter().zip(&rects) {
        let center = PADDING + rect.x + rect.width / 2.0;
        ctx.fill_text(entry.label, center, height - 10.0)
            .map_err(|e| UiError::Draw(format!("bar label: {e:?}")))?;
        ctx.fill_text(
            &format!("{}h", entry.hours),
            center,
            (PADDING + rect.y - 6.0).max(12.0),
        )
        .map_err(|e| UiError::Draw(format!("bar value: {e:?}")))?;
    }

    Ok(())
}

/// Draw the accuracy-comparison donut chart
///
/// # Errors
///
/// Returns an error if angle validation or text rendering fails.
pub fn draw_donut_chart(
    ctx: &CanvasRenderingContext2d,
    slices: &[ChartSlice],
    width: f64,
    height: f64,
) -> UiResult<()> {
    ctx.set_fill_style_str(CHART_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = donut_angles(&values)?;

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - 16.0).max(1.0);
    let hole = radius * DONUT_HOLE_RATIO;

    for (slice, (start, end)) in slices.iter().zip(&angles) {
        ctx.begin_path();
        ctx.set_fill_style_str(&tone_color(slice.tone).to_css_alpha(0.8));
        ctx.arc(cx, cy, radius, *start, *end)
            .map_err(|e| UiError::Draw(format!("outer arc: {e:?}")))?;
        ctx.arc_with_anticlockwise(cx, cy, hole, *end, *start, true)
            .map_err(|e| UiError::Draw(format!("inner arc: {e:?}")))?;
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    ctx.fill_text("Accuracy %", cx, cy + 4.0)
        .map_err(|e| UiError::Draw(format!("donut label: {e:?}")))?;

    Ok(())
}

//! Process-flow diagram rendering
//!
//! Nodes carry world coordinates (the layout the pitch narrates); this
//! module scales them into the canvas viewport, then draws labeled boxes
//! connected by arrowed edges.

use web_sys::CanvasRenderingContext2d;

use crate::error::{UiError, UiResult};
use crate::models::flow::{FlowEdge, FlowNode, NodeKind};
use crate::models::{Tone, tone_color};

/// Diagram background fill
const DIAGRAM_BACKGROUND: &str = "#1F2937";

/// Node box size in canvas pixels
const NODE_WIDTH: f64 = 150.0;
const NODE_HEIGHT: f64 = 40.0;

/// Arrow head length and half-width in pixels
const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.0;

/// Map node world coordinates into a `width` x `height` canvas
///
/// Positions are scaled so the bounding box of all nodes fits inside the
/// viewport minus `padding` on every side. Degenerate ranges (all nodes on
/// one line) collapse to the centered axis.
///
/// # Errors
///
/// Returns an error if `nodes` is empty or the padded viewport has no area.
pub fn scale_positions(
    nodes: &[FlowNode],
    width: f64,
    height: f64,
    padding: f64,
) -> UiResult<Vec<(f64, f64)>> {
    if nodes.is_empty() {
        return Err(UiError::Geometry("no nodes to place".to_string()));
    }
    let inner_width = width - padding * 2.0;
    let inner_height = height - padding * 2.0;
    if inner_width <= 0.0 || inner_height <= 0.0 {
        return Err(UiError::Geometry(format!(
            "viewport {width}x{height} too small for padding {padding}"
        )));
    }

    let min_x = nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
    let max_x = nodes.iter().map(|n| n.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
    let max_y = nodes.iter().map(|n| n.y).fold(f64::NEG_INFINITY, f64::max);

    let span_x = max_x - min_x;
    let span_y = max_y - min_y;

    Ok(nodes
        .iter()
        .map(|node| {
            let x = if span_x > 0.0 {
                padding + (node.x - min_x) / span_x * inner_width
            } else {
                width / 2.0
            };
            let y = if span_y > 0.0 {
                padding + (node.y - min_y) / span_y * inner_height
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect())
}

/// Arrow head triangle for an edge ending at `(tip_x, tip_y)` coming from
/// direction `(dx, dy)`
///
/// # Errors
///
/// Returns an error if the direction vector has zero length.
pub fn arrow_head(
    tip_x: f64,
    tip_y: f64,
    dx: f64,
    dy: f64,
) -> UiResult<[(f64, f64); 3]> {
    let len = (dx * dx + dy * dy).sqrt();
    if !len.is_finite() || len <= 0.0 {
        return Err(UiError::Geometry("zero-length edge direction".to_string()));
    }
    let ux = dx / len;
    let uy = dy / len;
    let base_x = tip_x - ux * ARROW_LENGTH;
    let base_y = tip_y - uy * ARROW_LENGTH;
    Ok([
        (tip_x, tip_y),
        (base_x - uy * ARROW_HALF_WIDTH, base_y + ux * ARROW_HALF_WIDTH),
        (base_x + uy * ARROW_HALF_WIDTH, base_y - ux * ARROW_HALF_WIDTH),
    ])
}

fn node_tone(kind: NodeKind) -> Tone {
    match kind {
        NodeKind::Input => Tone::Info,
        NodeKind::Stage => Tone::Accent,
        NodeKind::Output => Tone::Success,
    }
}

/// Draw the whole flow diagram
///
/// # Errors
///
/// Returns an error if scaling fails, an edge references an unknown node,
/// or a canvas text operation fails.
pub fn draw_flow_diagram(
    ctx: &CanvasRenderingContext2d,
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    width: f64,
    height: f64,
) -> UiResult<()> {
    ctx.set_fill_style_str(DIAGRAM_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let positions = scale_positions(nodes, width, height, 90.0)?;
    let centered = |id: &str| -> UiResult<(f64, f64)> {
        let index = nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| UiError::Geometry(format!("edge references unknown node {id}")))?;
        positions
            .get(index)
            .copied()
            .ok_or_else(|| UiError::Geometry(format!("no position for node {id}")))
    };

    // Edges first so the node boxes cover the line ends.
    ctx.set_stroke_style_str("#4B5563");
    ctx.set_line_width(1.5);
    for edge in edges {
        let (sx, sy) = centered(edge.source)?;
        let (tx, ty) = centered(edge.target)?;
        ctx.begin_path();
        ctx.move_to(sx, sy);
        ctx.line_to(tx, ty);
        ctx.stroke();

        // Arrow head at the target box boundary, pointed along the edge.
        let head = arrow_head(tx - NODE_WIDTH / 2.0 - 2.0, ty, tx - sx, ty - sy)?;
        ctx.begin_path();
        ctx.set_fill_style_str("#6B7280");
        let (hx, hy) = head[0];
        ctx.move_to(hx, hy);
        for (px, py) in head.iter().skip(1) {
            ctx.line_to(*px, *py);
        }
        ctx.close_path();
        ctx.fill();
    }

    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (node, (x, y)) in nodes.iter().zip(&positions) {
        let tone = tone_color(node_tone(node.kind));
        let left = x - NODE_WIDTH / 2.0;
        let top = y - NODE_HEIGHT / 2.0;
        ctx.set_fill_style_str(&tone.to_css_alpha(0.15));
        ctx.fill_rect(left, top, NODE_WIDTH, NODE_HEIGHT);
        ctx.set_stroke_style_str(&tone.to_css());
        ctx.stroke_rect(left, top, NODE_WIDTH, NODE_HEIGHT);
        ctx.set_fill_style_str("#E5E7EB");
        ctx.fill_text(node.label, *x, y + 4.0)
            .map_err(|e| UiError::Draw(format!("node label: {e:?}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::models::flow::process_flow;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_scale_positions_fit_inside_padding() {
        let (nodes, _) = process_flow();
        let positions = scale_positions(&nodes, 900.0, 300.0, 40.0).expect("valid scaling");
        assert_eq!(positions.len(), nodes.len());
        for (x, y) in &positions {
            assert!(*x >= 40.0 - EPSILON && *x <= 860.0 + EPSILON);
            assert!(*y >= 40.0 - EPSILON && *y <= 260.0 + EPSILON);
        }
    }

    #[test]
    fn test_scale_positions_preserve_order() {
        let (nodes, _) = process_flow();
        let positions = scale_positions(&nodes, 900.0, 300.0, 40.0).expect("valid scaling");
        let first = positions.first().expect("first node");
        let last = positions.last().expect("last node");
        assert!(first.0 < last.0, "input stays left of output");
    }

    #[test]
    fn test_scale_positions_degenerate_axis_centers() {
        let (mut nodes, _) = process_flow();
        for node in &mut nodes {
            node.y = 0.0;
        }
        let positions = scale_positions(&nodes, 900.0, 300.0, 40.0).expect("valid scaling");
        for (_, y) in &positions {
            assert!((y - 150.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_scale_positions_reject_empty() {
        assert!(scale_positions(&[], 900.0, 300.0, 40.0).is_err());
    }

    #[test]
    fn test_scale_positions_reject_oversized_padding() {
        let (nodes, _) = process_flow();
        assert!(scale_positions(&nodes, 100.0, 100.0, 60.0).is_err());
    }

    #[test]
    fn test_arrow_head_points_along_direction() {
        let head = arrow_head(100.0, 50.0, 10.0, 0.0).expect("valid arrow");
        let (tip_x, tip_y) = head[0];
        assert!((tip_x - 100.0).abs() < EPSILON);
        assert!((tip_y - 50.0).abs() < EPSILON);
        // Wings sit behind the tip for a rightward edge.
        assert!(head[1].0 < tip_x);
        assert!(head[2].0 < tip_x);
        // Wings are mirrored across the edge axis.
        assert!((head[1].1 + head[2].1 - 2.0 * tip_y).abs() < EPSILON);
    }

    #[test]
    fn test_arrow_head_rejects_zero_direction() {
        assert!(arrow_head(0.0, 0.0, 0.0, 0.0).is_err());
    }
}

//! Behavioral tests for chart and diagram geometry

#![allow(clippy::expect_used)]

use crate::components::canvas::diagram::arrow_head;
use crate::components::canvas::{bar_layout, donut_angles, scale_positions};
use crate::models::charts::{accuracy_slices, time_savings};
use crate::models::flow::process_flow;

const EPSILON: f64 = 1e-9;

#[test]
fn given_site_bar_data_when_laid_out_then_every_bar_fits_the_plot() {
    let values: Vec<f64> = time_savings().iter().map(|b| b.hours).collect();
    let rects = bar_layout(&values, 400.0, 200.0, 18.0).expect("layout succeeds");
    for rect in &rects {
        assert!(rect.x >= -EPSILON);
        assert!(rect.x + rect.width <= 400.0 + EPSILON);
        assert!(rect.y >= -EPSILON);
        assert!(rect.y + rect.height <= 200.0 + EPSILON);
    }
}

#[test]
fn given_site_donut_data_when_angled_then_slices_tile_the_circle() {
    let values: Vec<f64> = accuracy_slices().iter().map(|s| s.value).collect();
    let angles = donut_angles(&values).expect("angles succeed");
    let total_sweep: f64 = angles.iter().map(|(start, end)| end - start).sum();
    assert!((total_sweep - std::f64::consts::TAU).abs() < 1e-6);
}

#[test]
fn given_flow_nodes_when_scaled_then_branch_nodes_split_vertically() {
    let (nodes, _) = process_flow();
    let positions = scale_positions(&nodes, 960.0, 340.0, 90.0).expect("scaling succeeds");
    // Quantum Resolver (index 2) sits above AutoBA Agent (index 3).
    let resolver = positions.get(2).expect("resolver position");
    let autoba = positions.get(3).expect("autoba position");
    assert!(resolver.1 < autoba.1);
    assert!((resolver.0 - autoba.0).abs() < EPSILON, "same column");
}

#[test]
fn given_a_horizontal_edge_when_arrowed_then_wings_straddle_the_axis() {
    let head = arrow_head(200.0, 100.0, 50.0, 0.0).expect("arrow succeeds");
    let (_, tip_y) = head[0];
    assert!(
        (head[1].1 > tip_y) != (head[2].1 > tip_y),
        "wings on opposite sides"
    );
}

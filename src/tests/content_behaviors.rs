//! Behavioral tests for the static content catalogs

use crate::models::charts::{accuracy_slices, time_savings, total_hours_saved};
use crate::models::content::{
    comparison_after, comparison_before, database_schema, database_technologies, hero_stats,
    overview_features, pain_points, superpowers, team_members, tech_stack, use_cases,
};
use crate::models::flow::{find_node, process_flow};
use crate::models::{STEP_COUNT, demo_steps};

// ============================================================================
// WALKTHROUGH SCRIPT
// ============================================================================

#[test]
fn given_walkthrough_script_when_loaded_then_it_has_six_steps() {
    assert_eq!(STEP_COUNT, 6);
    assert_eq!(demo_steps().len(), 6);
}

#[test]
fn given_walkthrough_script_then_titles_are_unique() {
    let steps = demo_steps();
    let titles: std::collections::HashSet<&str> = steps.iter().map(|s| s.title).collect();
    assert_eq!(titles.len(), steps.len());
}

#[test]
fn given_walkthrough_script_then_it_opens_with_upload_and_closes_with_output() {
    let steps = demo_steps();
    assert_eq!(steps.first().map(|s| s.title), Some("Upload Requirements"));
    assert_eq!(steps.last().map(|s| s.title), Some("Output Ready"));
}

// ============================================================================
// SECTION CATALOGS
// ============================================================================

#[test]
fn given_section_catalogs_then_cardinalities_match_the_page() {
    assert_eq!(hero_stats().len(), 3);
    assert_eq!(overview_features().len(), 3);
    assert_eq!(pain_points().len(), 4);
    assert_eq!(superpowers().len(), 3);
    assert_eq!(tech_stack().len(), 5);
    assert_eq!(database_schema().len(), 4);
    assert_eq!(database_technologies().len(), 3);
    assert_eq!(use_cases().len(), 5);
    assert_eq!(team_members().len(), 5);
}

#[test]
fn given_comparison_sides_then_verdicts_disagree() {
    let before = comparison_before();
    let after = comparison_after();
    assert_ne!(before.verdict, after.verdict);
    assert!(after.approved && !before.approved);
}

#[test]
fn given_team_members_then_initials_are_two_letters() {
    for member in team_members() {
        assert_eq!(member.initials().chars().count(), 2, "{}", member.name);
    }
}

// ============================================================================
// CHART DATA
// ============================================================================

#[test]
fn given_accuracy_data_then_values_are_percentages() {
    for slice in accuracy_slices() {
        assert!(slice.value > 0.0 && slice.value <= 100.0, "{}", slice.label);
    }
}

#[test]
fn given_time_savings_then_phases_sum_to_total() {
    let sum: f64 = time_savings().iter().map(|b| b.hours).sum();
    assert!((sum - total_hours_saved()).abs() < f64::EPSILON);
    assert!((total_hours_saved() - 48.0).abs() < f64::EPSILON);
}

// ============================================================================
// FLOW GRAPH
// ============================================================================

#[test]
fn given_flow_graph_then_it_is_internally_consistent() {
    let (nodes, edges) = process_flow();
    assert_eq!(nodes.len(), 6);
    assert_eq!(edges.len(), 6);
    for edge in &edges {
        assert!(find_node(&nodes, edge.source).is_some());
        assert!(find_node(&nodes, edge.target).is_some());
    }
}

#[test]
fn given_flow_graph_then_knowledge_mesh_merges_both_branches() {
    let (_, edges) = process_flow();
    let into_mesh = edges.iter().filter(|e| e.target == "5").count();
    assert_eq!(into_mesh, 2, "resolver and AutoBA both feed the mesh");
}

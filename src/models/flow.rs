//! Process-flow diagram data
//!
//! Fixed node positions in world coordinates, laid out left to right the way
//! the pipeline is narrated: inputs fan out through the resolver and the
//! virtual BA, then converge on the knowledge mesh before output generation.

use serde::Serialize;

/// Role of a node within the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Entry point of the pipeline
    Input,
    /// Intermediate processing stage
    Stage,
    /// Terminal output node
    Output,
}

/// A node in the process-flow diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub kind: NodeKind,
}

/// A directed edge between two flow nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub source: &'static str,
    pub target: &'static str,
}

/// The fixed process-flow graph: 6 nodes, 6 edges
pub fn process_flow() -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let nodes = vec![
        FlowNode {
            id: "1",
            label: "Input Sources",
            x: 0.0,
            y: 0.0,
            kind: NodeKind::Input,
        },
        FlowNode {
            id: "2",
            label: "Multi-Sensory Engine",
            x: 250.0,
            y: 0.0,
            kind: NodeKind::Stage,
        },
        FlowNode {
            id: "3",
            label: "Quantum Resolver",
            x: 500.0,
            y: -100.0,
            kind: NodeKind::Stage,
        },
        FlowNode {
            id: "4",
            label: "AutoBA Agent",
            x: 500.0,
            y: 100.0,
            kind: NodeKind::Stage,
        },
        FlowNode {
            id: "5",
            label: "Knowledge Mesh",
            x: 750.0,
            y: 0.0,
            kind: NodeKind::Stage,
        },
        FlowNode {
            id: "6",
            label: "Output Generation",
            x: 1000.0,
            y: 0.0,
            kind: NodeKind::Output,
        },
    ];
    let edges = vec![
        FlowEdge {
            source: "1",
            target: "2",
        },
        FlowEdge {
            source: "2",
            target: "3",
        },
        FlowEdge {
            source: "2",
            target: "4",
        },
        FlowEdge {
            source: "3",
            target: "5",
        },
        FlowEdge {
            source: "4",
            target: "5",
        },
        FlowEdge {
            source: "5",
            target: "6",
        },
    ];
    (nodes, edges)
}

/// Look up a node by id
pub fn find_node<'a>(nodes: &'a [FlowNode], id: &str) -> Option<&'a FlowNode> {
    nodes.iter().find(|node| node.id == id)
}

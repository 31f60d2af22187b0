//! Node positions on screen.

use serde::Serialize;

use crate::graph::UndirectedGraph;
use crate::types::NodeId;

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Stable node positions for one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    positions: Vec<(NodeId, Position)>,
}

impl Layout {
    /// Position of a node, if it was laid out.
    pub fn get(&self, node: NodeId) -> Option<Position> {
        self.positions
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, pos)| *pos)
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if no node was positioned.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in node order.
    pub fn iter(&self) -> impl Iterator<Item = &(NodeId, Position)> {
        self.positions.iter()
    }
}

/// Place nodes evenly on a circle of radius `scale`, in node order.
///
/// The first node sits at angle zero. A single node sits at the origin.
pub fn circular_layout(graph: &UndirectedGraph, scale: f64) -> Layout {
    let count = graph.node_count();
    let positions = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            if count == 1 {
                return (node, Position::new(0.0, 0.0));
            }
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            (node, Position::new(scale * angle.cos(), scale * angle.sin()))
        })
        .collect();
    Layout { positions }
}

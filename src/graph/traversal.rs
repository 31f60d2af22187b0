//! Plain hop-distance search, with no renderer attached.

use std::collections::{HashMap, VecDeque};

use crate::types::NodeId;

use super::UndirectedGraph;

/// Hop distance from `start` to every node reachable from it.
///
/// `start` itself maps to 0. An unknown start yields an empty map.
pub fn hop_distances(graph: &UndirectedGraph, start: NodeId) -> HashMap<NodeId, u32> {
    let mut depths: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    if !graph.contains(start) {
        return depths;
    }

    depths.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if depths.contains_key(&neighbor) {
                continue;
            }
            depths.insert(neighbor, depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    depths
}

impl UndirectedGraph {
    /// See [`hop_distances`].
    pub fn hop_distances(&self, start: NodeId) -> HashMap<NodeId, u32> {
        hop_distances(self, start)
    }
}

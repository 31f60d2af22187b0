//! Breadth-first traversal engine.

use std::collections::VecDeque;

use crate::graph::UndirectedGraph;
use crate::render::Renderer;
use crate::types::NodeId;

use super::{wait_while_paused, Algorithm, Phase, TraversalEngine, TraversalState};

/// Visits nodes in non-decreasing hop distance from the start.
///
/// Nodes are marked visited when they are enqueued, so no node can sit in
/// the queue twice. The goal check happens when a node is dequeued: once
/// the goal is popped its neighbours are never enqueued.
///
/// A start node missing from the graph gives an empty path.
pub struct BfsEngine<'g> {
    graph: &'g UndirectedGraph,
    start: NodeId,
    queue: VecDeque<NodeId>,
    state: TraversalState,
}

impl<'g> BfsEngine<'g> {
    /// Create an idle engine.
    pub fn new(graph: &'g UndirectedGraph, start: NodeId, goal: Option<NodeId>) -> Self {
        Self {
            graph,
            start,
            queue: VecDeque::new(),
            state: TraversalState::new(goal),
        }
    }

    /// Nodes discovered but not yet visited, front first.
    pub fn frontier(&self) -> impl Iterator<Item = &NodeId> {
        self.queue.iter()
    }
}

impl TraversalEngine for BfsEngine<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn start(&self) -> NodeId {
        self.start
    }

    fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Dequeue and visit one node, discovering its unvisited neighbours.
    fn step(&mut self, renderer: &mut dyn Renderer) -> Phase {
        match self.state.phase {
            Phase::GoalReached | Phase::Exhausted => return self.state.phase,
            Phase::Idle => {
                log::debug!("BFS start at {} (goal {:?})", self.start, self.state.goal);
                if !self.graph.contains(self.start) {
                    log::debug!("BFS start {} not in graph, nothing to visit", self.start);
                    self.state.phase = Phase::Exhausted;
                    return self.state.phase;
                }
                self.state.visited.insert(self.start);
                self.queue.push_back(self.start);
                self.state.phase = Phase::Running;
            }
            Phase::Running => {}
        }

        let Some(current) = self.queue.pop_front() else {
            self.state.phase = Phase::Exhausted;
            log::info!("BFS exhausted after {} nodes", self.state.path.len());
            return self.state.phase;
        };

        self.state.path.push(current);
        self.state.stats.visit_count += 1;
        renderer.mark_visited(current);
        log::debug!("BFS visit {} (queue {})", current, self.queue.len());

        if self.state.is_goal(current) {
            self.state.reach_goal();
            log::info!("BFS reached goal {}", current);
            return self.state.phase;
        }

        let graph = self.graph;
        for &neighbor in graph.neighbors(current) {
            if self.state.visited.contains(&neighbor) {
                continue;
            }
            self.state.stats.enqueue_count += 1;
            self.state.stats.extension_count += 1;
            self.state.stats.queue_size = self.queue.len();

            renderer.animate_move(current, neighbor);
            wait_while_paused(renderer);

            self.state.visited.insert(neighbor);
            self.queue.push_back(neighbor);
        }

        self.state.phase
    }
}

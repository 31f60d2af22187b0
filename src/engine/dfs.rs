//! Depth-first traversal engine with an explicit frame stack.

use crate::graph::UndirectedGraph;
use crate::render::Renderer;
use crate::types::NodeId;

use super::{wait_while_paused, Algorithm, Phase, TraversalEngine, TraversalState};

/// One level of the descent: a node and where its neighbour scan resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// Dives into each unvisited neighbour before moving on to its siblings.
///
/// The goal is checked on entry to a node. Once it is reached, every frame
/// still on the stack is unwound without scanning its remaining neighbours,
/// so no sibling of any ancestor of the goal is visited afterwards.
pub struct DfsEngine<'g> {
    graph: &'g UndirectedGraph,
    start: NodeId,
    stack: Vec<Frame>,
    state: TraversalState,
}

impl<'g> DfsEngine<'g> {
    /// Create an idle engine.
    pub fn new(graph: &'g UndirectedGraph, start: NodeId, goal: Option<NodeId>) -> Self {
        Self {
            graph,
            start,
            stack: Vec::new(),
            state: TraversalState::new(goal),
        }
    }

    /// Nodes on the current descent, root first.
    pub fn descent(&self) -> Vec<NodeId> {
        self.stack.iter().map(|f| f.node).collect()
    }

    fn enter(&mut self, node: NodeId, renderer: &mut dyn Renderer) -> Phase {
        self.state.visited.insert(node);
        self.state.path.push(node);
        self.state.stats.visit_count += 1;
        self.state.stats.enqueue_count = self.state.stats.visit_count;
        self.state.stats.queue_size = self.state.path.len();
        renderer.mark_visited(node);
        log::debug!("DFS visit {} (depth {})", node, self.stack.len());

        if self.state.is_goal(node) {
            self.state.reach_goal();
            log::info!(
                "DFS reached goal {}, unwinding {} frames",
                node,
                self.stack.len()
            );
            self.stack.clear();
            return self.state.phase;
        }

        self.stack.push(Frame { node, next: 0 });
        self.state.phase = Phase::Running;
        self.state.phase
    }
}

impl TraversalEngine for DfsEngine<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn start(&self) -> NodeId {
        self.start
    }

    fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Advance until exactly one more node is entered, or the run ends.
    fn step(&mut self, renderer: &mut dyn Renderer) -> Phase {
        match self.state.phase {
            Phase::GoalReached | Phase::Exhausted => return self.state.phase,
            Phase::Idle => {
                log::debug!("DFS start at {} (goal {:?})", self.start, self.state.goal);
                if !self.graph.contains(self.start) {
                    self.state.phase = Phase::Exhausted;
                    return self.state.phase;
                }
                return self.enter(self.start, renderer);
            }
            Phase::Running => {}
        }

        let graph = self.graph;
        while let Some(frame) = self.stack.last_mut() {
            if self.state.goal_reached {
                break;
            }

            let neighbors = graph.neighbors(frame.node);
            let found = neighbors[frame.next..]
                .iter()
                .position(|n| !self.state.visited.contains(n));

            match found {
                Some(offset) => {
                    let idx = frame.next + offset;
                    frame.next = idx + 1;
                    let (from, to) = (frame.node, neighbors[idx]);

                    renderer.animate_move(from, to);
                    wait_while_paused(renderer);
                    return self.enter(to, renderer);
                }
                None => {
                    log::debug!("DFS backtrack from {}", frame.node);
                    self.stack.pop();
                }
            }
        }

        self.state.phase = if self.state.goal_reached {
            Phase::GoalReached
        } else {
            log::info!("DFS exhausted after {} nodes", self.state.path.len());
            Phase::Exhausted
        };
        self.state.phase
    }
}

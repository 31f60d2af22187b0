//! Traversal engines: BFS and DFS over an UndirectedGraph.

pub mod bfs;
pub mod dfs;
pub mod state;

pub use bfs::BfsEngine;
pub use dfs::DfsEngine;
pub use state::{Algorithm, Phase, TraversalOutcome, TraversalState, TraversalStats};

use crate::graph::UndirectedGraph;
use crate::render::Renderer;
use crate::types::NodeId;

/// A traversal that advances one visit per step.
pub trait TraversalEngine {
    /// Which algorithm this engine runs.
    fn algorithm(&self) -> Algorithm;

    /// The start node.
    fn start(&self) -> NodeId;

    /// State accumulated so far.
    fn state(&self) -> &TraversalState;

    /// Visit one more node. Returns the phase after the step; calling
    /// `step` in a terminal phase does nothing.
    fn step(&mut self, renderer: &mut dyn Renderer) -> Phase;

    /// Step until the run is over.
    fn run(&mut self, renderer: &mut dyn Renderer) -> TraversalOutcome {
        while !self.step(renderer).is_terminal() {}
        self.state().outcome(self.algorithm(), self.start())
    }
}

impl Algorithm {
    /// An idle engine for this algorithm.
    pub fn engine<'g>(
        self,
        graph: &'g UndirectedGraph,
        start: NodeId,
        goal: Option<NodeId>,
    ) -> Box<dyn TraversalEngine + 'g> {
        match self {
            Self::Bfs => Box::new(BfsEngine::new(graph, start, goal)),
            Self::Dfs => Box::new(DfsEngine::new(graph, start, goal)),
        }
    }

    /// Run this algorithm to completion.
    pub fn run(
        self,
        graph: &UndirectedGraph,
        start: NodeId,
        goal: Option<NodeId>,
        renderer: &mut dyn Renderer,
    ) -> TraversalOutcome {
        self.engine(graph, start, goal).run(renderer)
    }
}

/// Yield to the renderer until it is no longer paused.
///
/// Returns the number of idle ticks spent waiting.
pub fn wait_while_paused(renderer: &mut dyn Renderer) -> u64 {
    let mut ticks = 0u64;
    while renderer.is_paused() {
        renderer.idle();
        ticks += 1;
    }
    if ticks > 0 {
        log::debug!("Resumed after {} idle ticks", ticks);
    }
    ticks
}

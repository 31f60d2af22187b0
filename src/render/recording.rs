//! Headless renderers: one that records every call, one that ignores them.

use crate::graph::UndirectedGraph;
use crate::types::{NodeId, RenderEvent, DEFAULT_LAYOUT_SCALE};

use super::{circular_layout, Layout, Renderer};

/// A renderer that records every call as a [`RenderEvent`].
///
/// It can be scripted to report itself paused for a number of idle ticks
/// right after a given animated move, which stands in for a user pressing
/// the pause key.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
    moves: usize,
    pause_after_move: Option<(usize, u32)>,
    remaining_ticks: u32,
}

impl RecordingRenderer {
    /// Create a recorder that never pauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause for `ticks` idle ticks after the `move_index`-th move (0-based).
    pub fn with_pause_after_move(mut self, move_index: usize, ticks: u32) -> Self {
        self.pause_after_move = Some((move_index, ticks));
        self
    }

    /// All recorded events in call order.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Consume the recorder and return its events.
    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }

    /// Nodes highlighted as visited, in call order.
    pub fn visited(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Visited { node } => Some(*node),
                _ => None,
            })
            .collect()
    }

    /// Animated moves, in call order.
    pub fn moves(&self) -> Vec<(NodeId, NodeId)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Move { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Number of idle ticks spent paused.
    pub fn paused_ticks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::PausedTick))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn layout(&mut self, graph: &UndirectedGraph) -> Layout {
        self.events.push(RenderEvent::Layout {
            nodes: graph.node_count(),
        });
        circular_layout(graph, DEFAULT_LAYOUT_SCALE)
    }

    fn mark_visited(&mut self, node: NodeId) {
        self.events.push(RenderEvent::Visited { node });
    }

    fn mark_unvisited(&mut self, node: NodeId) {
        self.events.push(RenderEvent::Unvisited { node });
    }

    fn animate_move(&mut self, from: NodeId, to: NodeId) {
        self.events.push(RenderEvent::Move { from, to });
        if let Some((index, ticks)) = self.pause_after_move {
            if index == self.moves {
                self.remaining_ticks = ticks;
            }
        }
        self.moves += 1;
    }

    fn is_paused(&self) -> bool {
        self.remaining_ticks > 0
    }

    fn idle(&mut self) {
        self.events.push(RenderEvent::PausedTick);
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }
}

/// A renderer that draws nothing and never pauses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn layout(&mut self, graph: &UndirectedGraph) -> Layout {
        circular_layout(graph, DEFAULT_LAYOUT_SCALE)
    }

    fn mark_visited(&mut self, _node: NodeId) {}

    fn mark_unvisited(&mut self, _node: NodeId) {}

    fn animate_move(&mut self, _from: NodeId, _to: NodeId) {}

    fn is_paused(&self) -> bool {
        false
    }

    fn idle(&mut self) {}
}

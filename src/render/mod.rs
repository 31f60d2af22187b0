//! Presentation collaborators: the renderer and prompter seams.
//!
//! The traversal engines only talk to a [`Renderer`]; the session controller
//! additionally talks to a [`Prompter`]. Neither collaborator may touch
//! traversal state.

pub mod layout;
pub mod pause;
pub mod prompt;
pub mod readline;
pub mod recording;
pub mod terminal;

pub use layout::{circular_layout, Layout, Position};
pub use pause::PauseToken;
pub use prompt::{MessageKind, ScriptedPrompter, ShownMessage, StdinPrompter};
pub use readline::ReadlinePrompter;
pub use recording::{NullRenderer, RecordingRenderer};
pub use terminal::TerminalRenderer;

use crate::graph::UndirectedGraph;
use crate::types::{NodeId, NodeInput};

/// Draws the graph and animates a traversal over it.
pub trait Renderer {
    /// Lay out the graph once per session and draw it unvisited.
    fn layout(&mut self, graph: &UndirectedGraph) -> Layout;

    /// Highlight a node as visited. Idempotent.
    fn mark_visited(&mut self, node: NodeId);

    /// Reset a node to the unvisited look. Idempotent.
    fn mark_unvisited(&mut self, node: NodeId);

    /// Animate the marker moving from one node to another.
    fn animate_move(&mut self, from: NodeId, to: NodeId);

    /// Whether the user has paused the animation.
    fn is_paused(&self) -> bool;

    /// One event-processing tick, called repeatedly while paused.
    fn idle(&mut self);
}

/// Asks the user for nodes and shows them messages.
pub trait Prompter {
    /// Ask for a node id.
    fn ask_node(&mut self, prompt: &str) -> NodeInput;

    /// Show an informational message.
    fn show_message(&mut self, title: &str, text: &str);

    /// Show a warning.
    fn show_warning(&mut self, title: &str, text: &str);
}

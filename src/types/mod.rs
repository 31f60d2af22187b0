//! All data types for the graph-walk library.

pub mod edge;
pub mod error;
pub mod event;

pub use edge::Edge;
pub use error::{WalkError, WalkResult};
pub use event::{NodeInput, RenderEvent};

/// Node identifier.
pub type NodeId = u64;

/// Edges of the demonstration graph, in declaration order.
///
/// `(9, 7)` and `(7, 9)` are the same undirected edge; the second is dropped.
pub const SAMPLE_EDGES: [(NodeId, NodeId); 9] = [
    (1, 2),
    (1, 3),
    (2, 4),
    (2, 5),
    (3, 6),
    (2, 9),
    (9, 7),
    (7, 9),
    (2, 3),
];

/// Scale applied to the unit layout to get screen coordinates.
pub const DEFAULT_LAYOUT_SCALE: f64 = 200.0;

/// Default pause between animated moves, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 400;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}

//! Pdag nodes.

use petgraph::graph::EdgeIndex;
use serde_json::Value;

/// A pdag node: an ordered list of outgoing parser edges plus terminal
/// flags/tags. The edge list is append-only during build and frozen after
/// [`crate::optimizer::optimize`].
#[derive(Debug, Default, Clone)]
pub struct PdagNode {
    /// Outgoing edges, in insertion order. The normalizer tries them in
    /// this order and stops at the first one that leads to a terminal.
    pub edges: Vec<EdgeIndex>,
    pub is_terminal: bool,
    pub tags: Option<Value>,
}

impl PdagNode {
    pub fn new() -> Self {
        Self::default()
    }
}

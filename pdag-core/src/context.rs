//! The process-wide handle described in spec.md section 3: the main pdag
//! root, the user-defined-type table, the debug flag, and the node count.
//!
//! The graph itself is a [`petgraph::stable_graph::StableDiGraph`]. This is
//! the arena representation spec.md section 9 recommends for a future DAG:
//! edges reference children by index rather than by owning pointer, and
//! dropping the `Context` frees the whole arena in one step instead of a
//! hand-written recursive destructor.

use petgraph::stable_graph::StableDiGraph;
use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::edge::ParserEdge;
use crate::node::PdagNode;

pub type PdagGraph = StableDiGraph<PdagNode, ParserEdge>;

#[derive(Debug, Clone)]
pub struct UserType {
    pub name: String,
    pub root: NodeIndex,
}

pub struct Context {
    pub(crate) graph: PdagGraph,
    main_root: NodeIndex,
    user_types: Vec<UserType>,
    debug: bool,
}

impl Context {
    #[instrument(skip_all)]
    pub fn new() -> Self {
        let mut graph = PdagGraph::default();
        let main_root = graph.add_node(PdagNode::new());
        Context {
            graph,
            main_root,
            user_types: Vec::new(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn main_root(&self) -> NodeIndex {
        self.main_root
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Declares a new named user-defined-type component, rooted at a fresh
    /// empty node. Returns its root so the rulebase parser can grow it via
    /// [`crate::builder::add_parser`] just like the main root.
    pub fn declare_user_type(&mut self, name: impl Into<String>) -> NodeIndex {
        let root = self.graph.add_node(PdagNode::new());
        self.user_types.push(UserType {
            name: name.into(),
            root,
        });
        root
    }

    pub fn user_type_root(&self, name: &str) -> Option<NodeIndex> {
        self.user_types
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.root)
    }

    pub fn user_types(&self) -> &[UserType] {
        &self.user_types
    }

    /// Allocates a fresh, empty pdag node owned by this context (spec.md
    /// section 4.C `new_node`).
    pub fn new_node(&mut self) -> NodeIndex {
        self.graph.add_node(PdagNode::new())
    }

    pub fn node(&self, idx: NodeIndex) -> &PdagNode {
        &self.graph[idx]
    }

    pub fn set_terminal(&mut self, idx: NodeIndex, terminal: bool) {
        self.graph[idx].is_terminal = terminal;
    }

    pub fn set_tags(&mut self, idx: NodeIndex, tags: Option<serde_json::Value>) {
        self.graph[idx].tags = tags;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_has_one_empty_root() {
        let ctx = Context::new();
        assert_eq!(ctx.node_count(), 1);
        assert_eq!(ctx.edge_count(), 0);
        assert!(!ctx.node(ctx.main_root()).is_terminal);
    }

    #[test]
    fn user_types_are_looked_up_by_name() {
        let mut ctx = Context::new();
        let root = ctx.declare_user_type("ipaddr");
        assert_eq!(ctx.user_type_root("ipaddr"), Some(root));
        assert_eq!(ctx.user_type_root("missing"), None);
    }
}

//! `addParser`: the one growth primitive for a pdag (spec.md section 4.D).

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::instrument;

use crate::context::Context;
use crate::edge::ParserEdge;

/// Installs `edge` as an outgoing transition of `*root`, merging it with an
/// existing equivalent edge if one is already present, and advances `*root`
/// to the resulting child.
///
/// Two edges are equivalent when they share `{prsid, name}` and, for
/// literal edges, the same literal byte. On a merge the provided `edge` is
/// simply dropped (Rust frees its `parser_data` for us); no separate
/// "free the container" step is needed the way the C original requires.
#[instrument(skip(ctx, edge), fields(prsid = edge.prsid.0, custom_type = ?edge.custom_type))]
pub fn add_parser(ctx: &mut Context, root: &mut NodeIndex, edge: ParserEdge) -> eyre::Result<()> {
    let key = edge.merge_key();
    let existing = ctx
        .graph
        .edges(*root)
        .find(|e| e.weight().merge_key() == key)
        .map(|e| (e.id(), e.target()));

    match existing {
        Some((_edge_idx, child)) => {
            // `edge` (and its parser_data) is dropped here; the builder owns
            // the outcome, per spec.md section 4.D.
            *root = child;
        }
        None => {
            let child = ctx.new_node();
            let edge_idx = ctx.graph.add_edge(*root, child, edge);
            ctx.graph[*root].edges.push(edge_idx);
            *root = child;
        }
    }

    Ok(())
}

/// Convenience used by the rulebase loader: walks a whole chain of edges
/// starting at `root`, returning the final node.
pub fn add_parser_chain(
    ctx: &mut Context,
    mut root: NodeIndex,
    edges: impl IntoIterator<Item = ParserEdge>,
) -> eyre::Result<NodeIndex> {
    for edge in edges {
        add_parser(ctx, &mut root, edge)?;
    }
    Ok(root)
}

pub fn new_node(ctx: &mut Context) -> NodeIndex {
    ctx.new_node()
}

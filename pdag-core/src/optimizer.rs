//! Literal-path compaction (spec.md section 4.E).
//!
//! Builders split literal samples one character per edge so that two
//! samples sharing a prefix share a path. This pass fuses runs of
//! single-character literal edges back into multi-character runs, once,
//! after the whole rulebase has been installed.

use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::instrument;

use crate::context::Context;
use crate::edge::{FieldTarget, ParserEdge};
use crate::parser_data::ParserData;

/// Runs the compaction pass over every component: each user-defined-type
/// root, then the main root (spec.md section 4.E).
#[instrument(skip_all)]
pub fn optimize(ctx: &mut Context) {
    let user_roots: Vec<NodeIndex> = ctx.user_types().iter().map(|t| t.root).collect();
    for root in user_roots {
        compact(ctx, root);
    }
    compact(ctx, ctx.main_root());
}

struct Fusion {
    intermediate: NodeIndex,
    grandchild_edge: EdgeIndex,
    grandchild: NodeIndex,
    combined: ParserData,
}

/// Checks whether `edge_id` can be fused with its child's sole outgoing
/// edge. Both edges must be literal, discardable (`name == "-"`), and the
/// intermediate node must not be terminal (spec.md section 4.E).
fn plan_fusion(ctx: &Context, edge_id: EdgeIndex) -> Option<Fusion> {
    let edge = &ctx.graph[edge_id];
    if !edge.is_literal() || edge.name != FieldTarget::Discard {
        return None;
    }

    let (_, intermediate) = ctx.graph.edge_endpoints(edge_id)?;
    let intermediate_node = ctx.node(intermediate);
    if intermediate_node.is_terminal || intermediate_node.edges.len() != 1 {
        return None;
    }

    let grandchild_edge_id = intermediate_node.edges[0];
    let grandchild_edge = &ctx.graph[grandchild_edge_id];
    if !grandchild_edge.is_literal() || grandchild_edge.name != FieldTarget::Discard {
        return None;
    }

    let combined = edge.data.combine(&grandchild_edge.data)?;
    let (_, grandchild) = ctx.graph.edge_endpoints(grandchild_edge_id)?;

    Some(Fusion {
        intermediate,
        grandchild_edge: grandchild_edge_id,
        grandchild,
        combined,
    })
}

fn compact(ctx: &mut Context, node: NodeIndex) {
    let mut edge_ids = ctx.node(node).edges.clone();

    for slot in 0..edge_ids.len() {
        let mut current = edge_ids[slot];
        while let Some(fusion) = plan_fusion(ctx, current) {
            let prsid = ctx.graph[current].prsid;
            let new_edge = ParserEdge {
                prsid,
                name: FieldTarget::Discard,
                prio: 0,
                custom_type: None,
                data: fusion.combined,
            };

            ctx.graph.remove_edge(current);
            ctx.graph.remove_edge(fusion.grandchild_edge);
            ctx.graph.remove_node(fusion.intermediate);

            let new_edge_id = ctx.graph.add_edge(node, fusion.grandchild, new_edge);
            if let Some(pos) = ctx.graph[node].edges.iter().position(|e| *e == current) {
                ctx.graph[node].edges[pos] = new_edge_id;
            }
            current = new_edge_id;
        }
        edge_ids[slot] = current;
    }

    for edge_id in edge_ids {
        if let Some((_, child)) = ctx.graph.edge_endpoints(edge_id) {
            compact(ctx, child);
        }
    }
}

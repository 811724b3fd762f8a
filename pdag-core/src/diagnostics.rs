//! Pure read-only walkers over a built pdag: a textual dump, a DOT export,
//! and a statistics gatherer (spec.md section 4.H). None of these mutate
//! the graph.

use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::graph::NodeIndex;

use crate::context::Context;
use crate::registry;

#[derive(Debug, Default)]
pub struct Stats {
    pub node_count: usize,
    pub terminal_count: usize,
    pub edge_count: usize,
    pub edges_per_parser: HashMap<&'static str, usize>,
    pub longest_path: usize,
    pub edges_per_node_histogram: HashMap<usize, usize>,
}

/// Indented textual dump of a component, starting at `root`.
pub fn dump(ctx: &Context, root: NodeIndex) -> String {
    let mut out = String::new();
    dump_rec(ctx, root, 0, &mut out);
    out
}

fn dump_rec(ctx: &Context, node: NodeIndex, depth: usize, out: &mut String) {
    let node_data = ctx.node(node);
    let marker = if node_data.is_terminal { " [terminal]" } else { "" };
    let _ = writeln!(out, "{}n{}{}", "  ".repeat(depth), node.index(), marker);
    for &edge_id in &node_data.edges {
        let edge = &ctx.graph[edge_id];
        let label = edge_label(edge);
        let _ = writeln!(out, "{}-{}->", "  ".repeat(depth + 1), label);
        let (_, child) = ctx.graph.edge_endpoints(edge_id).unwrap();
        dump_rec(ctx, child, depth + 2, out);
    }
}

/// DOT-format export of a component: nodes labeled `n<index>`, terminal
/// nodes bold, edges labeled `parser:literal-payload`.
pub fn to_dot(ctx: &Context, root: NodeIndex) -> String {
    let mut out = String::new();
    out.push_str("digraph pdag {\n");
    let mut visited = std::collections::HashSet::new();
    to_dot_rec(ctx, root, &mut out, &mut visited);
    out.push_str("}\n");
    out
}

fn to_dot_rec(
    ctx: &Context,
    node: NodeIndex,
    out: &mut String,
    visited: &mut std::collections::HashSet<NodeIndex>,
) {
    if !visited.insert(node) {
        return;
    }
    let node_data = ctx.node(node);
    if node_data.is_terminal {
        let _ = writeln!(out, "  n{} [style=bold];", node.index());
    } else {
        let _ = writeln!(out, "  n{};", node.index());
    }
    for &edge_id in &node_data.edges {
        let edge = &ctx.graph[edge_id];
        let (_, child) = ctx.graph.edge_endpoints(edge_id).unwrap();
        let _ = writeln!(
            out,
            "  n{} -> n{} [label=\"{}\"];",
            node.index(),
            child.index(),
            edge_label(edge)
        );
        to_dot_rec(ctx, child, out, visited);
    }
}

fn edge_label(edge: &crate::edge::ParserEdge) -> String {
    let parser_name = if edge.prsid == registry::CUSTOM_TYPE {
        edge.custom_type.as_deref().unwrap_or("custom")
    } else {
        registry::entry(edge.prsid).name
    };
    match edge.data.as_literal() {
        Some(bytes) => format!("{}:{}", parser_name, String::from_utf8_lossy(bytes)),
        None => parser_name.to_string(),
    }
}

/// Gathers node/edge/terminal counts, per-parser-id edge counts, the
/// longest root-to-terminal path, and an edges-per-node histogram.
pub fn stats(ctx: &Context, root: NodeIndex) -> Stats {
    let mut out = Stats::default();
    let mut visited = std::collections::HashSet::new();
    stats_rec(ctx, root, 0, &mut out, &mut visited);
    out
}

fn stats_rec(
    ctx: &Context,
    node: NodeIndex,
    depth: usize,
    out: &mut Stats,
    visited: &mut std::collections::HashSet<NodeIndex>,
) {
    if !visited.insert(node) {
        return;
    }
    let node_data = ctx.node(node);
    out.node_count += 1;
    if node_data.is_terminal {
        out.terminal_count += 1;
        out.longest_path = out.longest_path.max(depth);
    }
    *out.edges_per_node_histogram.entry(node_data.edges.len()).or_insert(0) += 1;

    for &edge_id in &node_data.edges {
        out.edge_count += 1;
        let edge = &ctx.graph[edge_id];
        let parser_name = if edge.prsid == registry::CUSTOM_TYPE {
            "CUSTOM_TYPE"
        } else {
            registry::entry(edge.prsid).name
        };
        *out.edges_per_parser.entry(parser_name).or_insert(0) += 1;

        let (_, child) = ctx.graph.edge_endpoints(edge_id).unwrap();
        stats_rec(ctx, child, depth + 1, out, visited);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::add_parser;
    use crate::edge::new_literal_edge;

    #[test]
    fn stats_count_nodes_and_edges() {
        let mut ctx = Context::new();

        let mut root_a = ctx.main_root();
        add_parser(&mut ctx, &mut root_a, new_literal_edge(b'a')).unwrap();
        ctx.set_terminal(root_a, true);

        let mut root_b = ctx.main_root();
        add_parser(&mut ctx, &mut root_b, new_literal_edge(b'b')).unwrap();
        ctx.set_terminal(root_b, true);

        let s = stats(&ctx, ctx.main_root());
        assert_eq!(s.node_count, 3);
        assert_eq!(s.edge_count, 2);
        assert_eq!(s.terminal_count, 2);
        assert_eq!(s.longest_path, 1);
    }

    #[test]
    fn dump_and_dot_do_not_panic_on_empty_root() {
        let ctx = Context::new();
        let _ = dump(&ctx, ctx.main_root());
        let dot = to_dot(&ctx, ctx.main_root());
        assert!(dot.starts_with("digraph"));
    }
}

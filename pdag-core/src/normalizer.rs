//! The recursive backtracking matcher (spec.md section 4.F) and the
//! result-assembly fold rules (spec.md section 4.G).

use petgraph::graph::NodeIndex;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

use crate::annotator::Annotator;
use crate::context::Context;
use crate::edge::{FieldTarget, ParserEdge};
use crate::registry::{self, CUSTOM_TYPE};

/// Emits an edge-walk trace line, promoted to `debug!` when the context's
/// debug flag (spec.md section 3) is set so per-edge backtracking is
/// visible without raising the global `tracing` filter to `trace`.
macro_rules! walk_trace {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.debug() {
            debug!($($arg)*);
        } else {
            trace!($($arg)*);
        }
    };
}

/// The outcome of a top-level [`normalize`] call. Both variants carry a
/// fully populated result tree; spec.md section 7 treats "no rule matched"
/// as a status, not an exception.
#[derive(Debug)]
pub enum NormalizeOutcome {
    Matched { result: Map<String, Value> },
    NoMatch { result: Map<String, Value> },
}

impl NormalizeOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, NormalizeOutcome::Matched { .. })
    }

    pub fn result(&self) -> &Map<String, Value> {
        match self {
            NormalizeOutcome::Matched { result } | NormalizeOutcome::NoMatch { result } => result,
        }
    }

    pub fn into_result(self) -> Map<String, Value> {
        match self {
            NormalizeOutcome::Matched { result } | NormalizeOutcome::NoMatch { result } => result,
        }
    }
}

/// Entry point: recognizes `input` against the context's main pdag,
/// folding extracted fields through the annotator on success.
#[instrument(skip(ctx, annotator), fields(len = input.len()))]
pub fn normalize(ctx: &Context, input: &str, annotator: &dyn Annotator) -> NormalizeOutcome {
    let bytes = input.as_bytes();
    let mut parsed_to = 0usize;

    match normalize_rec(ctx, ctx.main_root(), bytes, 0, false, &mut parsed_to) {
        Some((_end_offset, mut result, end_node)) => {
            if let Some(tags) = ctx.node(end_node).tags.clone() {
                result.insert("event.tags".to_string(), tags.clone());
                annotator.annotate(&tags, &mut result);
            }
            trace!(fields = result.len(), "normalize matched");
            NormalizeOutcome::Matched { result }
        }
        None => {
            let mut result = Map::new();
            result.insert("originalmsg".to_string(), Value::String(input.to_string()));
            let watermark = parsed_to.min(bytes.len());
            let unparsed = String::from_utf8_lossy(&bytes[watermark..]).into_owned();
            result.insert("unparsed-data".to_string(), Value::String(unparsed));
            trace!(watermark, "normalize exhausted all alternatives");
            NormalizeOutcome::NoMatch { result }
        }
    }
}

/// Walks `node` at input offset `offs`. `Some` means this subtree matches
/// up to some position; the returned map holds every field extracted from
/// `node` down to the winning terminal, at this nesting level (custom-type
/// recursion starts a fresh map of its own, see [`call_parser`]).
fn normalize_rec(
    ctx: &Context,
    node: NodeIndex,
    bytes: &[u8],
    offs: usize,
    partial: bool,
    parsed_to: &mut usize,
) -> Option<(usize, Map<String, Value>, NodeIndex)> {
    *parsed_to = (*parsed_to).max(offs);
    walk_trace!(ctx, node = node.index(), offs, "visiting node");

    for &edge_id in &ctx.node(node).edges {
        let edge = &ctx.graph[edge_id];
        let Some((consumed, value)) = call_parser(ctx, edge, bytes, offs, parsed_to) else {
            walk_trace!(ctx, node = node.index(), offs, edge = edge_id.index(), "edge failed");
            continue;
        };

        let next_offs = offs + consumed;
        *parsed_to = (*parsed_to).max(next_offs);

        let (_, child) = ctx
            .graph
            .edge_endpoints(edge_id)
            .expect("edge must have a target node");

        if let Some((final_offset, mut child_result, end_node)) =
            normalize_rec(ctx, child, bytes, next_offs, partial, parsed_to)
        {
            fold(&mut child_result, &edge.name, value);
            return Some((final_offset, child_result, end_node));
        }
        walk_trace!(
            ctx,
            node = node.index(),
            edge = edge_id.index(),
            next_offs,
            "edge consumed input but subtree did not terminate; backtracking"
        );
        // recursion failed past this edge; `value` is dropped here and we
        // try the next edge in insertion order.
    }

    if ctx.node(node).is_terminal && (offs == bytes.len() || partial) {
        return Some((offs, Map::new(), node));
    }

    None
}

/// Invokes the parser behind `edge`: a built-in from the registry, or a
/// recursive partial match into a user-defined type's pdag.
fn call_parser(
    ctx: &Context,
    edge: &ParserEdge,
    bytes: &[u8],
    offs: usize,
    parsed_to: &mut usize,
) -> Option<(usize, Option<Value>)> {
    if edge.prsid == CUSTOM_TYPE {
        let type_name = edge
            .custom_type
            .as_deref()
            .expect("CUSTOM_TYPE edge always carries a type name");
        let sub_root = ctx.user_type_root(type_name)?;

        let (final_offset, sub_result, _end_node) =
            normalize_rec(ctx, sub_root, bytes, offs, true, parsed_to)?;

        let consumed = final_offset - offs;
        let value = edge
            .name
            .wants_value()
            .then(|| Value::Object(sub_result));
        Some((consumed, value))
    } else {
        let entry = registry::entry(edge.prsid);
        let success = (entry.parse)(bytes, offs, &edge.data)?;
        let value = if edge.name.wants_value() {
            success.value
        } else {
            None
        };
        Some((success.consumed, value))
    }
}

/// The three fold rules of spec.md section 4.G.
fn fold(result: &mut Map<String, Value>, name: &FieldTarget, value: Option<Value>) {
    match name {
        FieldTarget::Discard => {
            // value, if any, is simply dropped.
        }
        FieldTarget::Merge => match value {
            Some(Value::Object(obj)) => {
                for (key, v) in obj {
                    result.insert(key, v);
                }
            }
            Some(other) => {
                result.insert(".".to_string(), other);
            }
            None => {}
        },
        FieldTarget::Named(key) => {
            if let Some(v) = value {
                result.insert(key.clone(), v);
            }
        }
    }
}

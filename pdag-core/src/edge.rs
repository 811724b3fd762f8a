//! Parser edges: the outgoing transitions from a pdag node.

use crate::parser_data::ParserData;
use crate::registry::{self, ParserId, CUSTOM_TYPE};

/// Where an edge's extracted value is recorded. Generalizes the spec's
/// reserved `-` / `.` strings into an enum so the fold rules in
/// [`crate::normalizer`] are exhaustive matches rather than string compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTarget {
    /// `-`: discard the value.
    Discard,
    /// `.`: merge the value's keys into the enclosing result.
    Merge,
    /// Any other name: attach the value under this key.
    Named(String),
}

impl FieldTarget {
    pub fn wants_value(&self) -> bool {
        !matches!(self, FieldTarget::Discard)
    }
}

impl From<&str> for FieldTarget {
    fn from(name: &str) -> Self {
        match name {
            "-" => FieldTarget::Discard,
            "." => FieldTarget::Merge,
            other => FieldTarget::Named(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParserEdge {
    pub prsid: ParserId,
    pub name: FieldTarget,
    /// Reserved for a future priority-based disambiguation rule; current
    /// matching is insertion-order only (spec.md section 4.F).
    pub prio: i32,
    /// Set only when `prsid == CUSTOM_TYPE`: the name of the user-defined
    /// type this edge recurses into.
    pub custom_type: Option<String>,
    pub data: ParserData,
}

impl ParserEdge {
    /// The key used by the builder's equivalence check (spec.md section 4.D):
    /// same `prsid` and `name`, plus the literal byte for literal edges.
    pub fn merge_key(&self) -> (ParserId, &FieldTarget, Option<&[u8]>) {
        let literal = self.data.as_literal();
        (self.prsid, &self.name, literal)
    }

    pub fn is_literal(&self) -> bool {
        self.prsid == registry::id_of("literal").expect("literal parser always registered")
    }
}

pub fn new_edge(
    name: &str,
    prsid: ParserId,
    custom_type: Option<String>,
    extra_data: Option<&str>,
    config: Option<&serde_json::Value>,
) -> eyre::Result<ParserEdge> {
    let data = if prsid == CUSTOM_TYPE {
        ParserData::None
    } else {
        let entry = registry::entry(prsid);
        match entry.construct {
            Some(construct) => construct(extra_data, config)?,
            None => ParserData::None,
        }
    };

    Ok(ParserEdge {
        prsid,
        name: FieldTarget::from(name),
        prio: 0,
        custom_type,
        data,
    })
}

pub fn new_literal_edge(c: u8) -> ParserEdge {
    let literal_id = registry::id_of("literal").expect("literal parser always registered");
    ParserEdge {
        prsid: literal_id,
        name: FieldTarget::Discard,
        prio: 0,
        custom_type: None,
        data: ParserData::Literal(vec![c]),
    }
}

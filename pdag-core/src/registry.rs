//! The built-in field parser dispatch table.
//!
//! The table is a fixed, ordered array: a parser's [`ParserId`] *is* its
//! array position, so this order is part of the on-disk rulebase ABI
//! (appending is safe, reordering or removing is not).

use crate::parser_data::ParserData;
use serde_json::Value;

/// Position of a built-in parser in [`REGISTRY`], or the [`CUSTOM_TYPE`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserId(pub u16);

/// Sentinel id for edges that recurse into a user-defined type's pdag
/// rather than calling a leaf parser.
pub const CUSTOM_TYPE: ParserId = ParserId(u16::MAX);

/// What a successful parse produced.
pub struct ParseSuccess {
    pub consumed: usize,
    pub value: Option<Value>,
}

pub type ConstructFn = fn(extra: Option<&str>, config: Option<&Value>) -> eyre::Result<ParserData>;
pub type ParseFn = fn(bytes: &[u8], offs: usize, data: &ParserData) -> Option<ParseSuccess>;

pub struct ParserEntry {
    pub name: &'static str,
    pub construct: Option<ConstructFn>,
    pub parse: ParseFn,
}

pub static REGISTRY: &[ParserEntry] = &[
    crate::parsers::literal::ENTRY,
    crate::parsers::word::ENTRY,
    crate::parsers::alpha_digits::ALPHA_ENTRY,
    crate::parsers::alpha_digits::DIGITS_ENTRY,
    crate::parsers::ipv4::ENTRY,
    crate::parsers::rest::ENTRY,
    crate::parsers::char_to::ENTRY,
    crate::parsers::json::ENTRY,
];

/// Name-to-id lookup. Table has tens of entries; a linear scan is fine.
pub fn id_of(name: &str) -> Option<ParserId> {
    REGISTRY
        .iter()
        .position(|entry| entry.name == name)
        .map(|pos| ParserId(pos as u16))
}

pub fn entry(id: ParserId) -> &'static ParserEntry {
    &REGISTRY[id.0 as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_array_position() {
        for (i, e) in REGISTRY.iter().enumerate() {
            assert_eq!(id_of(e.name), Some(ParserId(i as u16)));
        }
    }

    #[test]
    fn unknown_name_is_invalid() {
        assert_eq!(id_of("no-such-parser"), None);
    }

    #[test]
    fn custom_type_is_not_in_table() {
        assert!(CUSTOM_TYPE.0 as usize >= REGISTRY.len());
    }
}

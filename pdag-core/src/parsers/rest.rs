use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};
use serde_json::Value;

/// Consumes everything to the end of the input. Only useful as the final
/// edge before a terminal node, for catch-all samples.
fn parse(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    let slice = bytes.get(offs..)?;
    let text = std::str::from_utf8(slice).ok()?;
    Some(ParseSuccess {
        consumed: slice.len(),
        value: Some(Value::String(text.to_string())),
    })
}

pub const ENTRY: ParserEntry = ParserEntry {
    name: "rest",
    construct: None,
    parse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_everything_remaining() {
        let success = parse(b"tail of the line", 5, &ParserData::None).unwrap();
        assert_eq!(success.consumed, "of the line".len());
    }

    #[test]
    fn matches_empty_remainder() {
        let success = parse(b"abc", 3, &ParserData::None).unwrap();
        assert_eq!(success.consumed, 0);
    }
}

use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};

fn construct(extra: Option<&str>, _config: Option<&serde_json::Value>) -> eyre::Result<ParserData> {
    let text = extra.unwrap_or_default();
    Ok(ParserData::Literal(text.as_bytes().to_vec()))
}

fn parse(bytes: &[u8], offs: usize, data: &ParserData) -> Option<ParseSuccess> {
    let literal = data.as_literal()?;
    let end = offs.checked_add(literal.len())?;
    if bytes.get(offs..end)? == literal {
        Some(ParseSuccess {
            consumed: literal.len(),
            value: None,
        })
    } else {
        None
    }
}

pub const ENTRY: ParserEntry = ParserEntry {
    name: "literal",
    construct: Some(construct),
    parse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_prefix() {
        let data = ParserData::Literal(b"abc".to_vec());
        let success = parse(b"abcdef", 0, &data).unwrap();
        assert_eq!(success.consumed, 3);
    }

    #[test]
    fn fails_on_mismatch() {
        let data = ParserData::Literal(b"abc".to_vec());
        assert!(parse(b"abdef", 0, &data).is_none());
    }

    #[test]
    fn fails_past_end_of_input() {
        let data = ParserData::Literal(b"abcd".to_vec());
        assert!(parse(b"ab", 0, &data).is_none());
    }
}

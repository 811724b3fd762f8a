use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};
use serde_json::Value;

fn parse(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    let slice = bytes.get(offs..)?;
    let len = slice.iter().take_while(|b| !b.is_ascii_whitespace()).count();
    if len == 0 {
        return None;
    }
    let text = std::str::from_utf8(&slice[..len]).ok()?;
    Some(ParseSuccess {
        consumed: len,
        value: Some(Value::String(text.to_string())),
    })
}

pub const ENTRY: ParserEntry = ParserEntry {
    name: "word",
    construct: None,
    parse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_run_of_non_whitespace() {
        let success = parse(b"server01 more", 0, &ParserData::None).unwrap();
        assert_eq!(success.consumed, 8);
        assert_eq!(success.value, Some(Value::String("server01".into())));
    }

    #[test]
    fn rejects_empty_word() {
        assert!(parse(b" leading space", 0, &ParserData::None).is_none());
    }
}

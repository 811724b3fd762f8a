use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};
use serde_json::Value;

fn parse_octet(slice: &[u8]) -> Option<(u8, usize)> {
    let len = slice.iter().take_while(|b| b.is_ascii_digit()).count().min(3);
    if len == 0 {
        return None;
    }
    let text = std::str::from_utf8(&slice[..len]).ok()?;
    let value: u32 = text.parse().ok()?;
    if value > 255 {
        return None;
    }
    Some((value as u8, len))
}

fn parse(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    let mut cursor = offs;
    for octet_index in 0..4 {
        let (_, octet_len) = parse_octet(bytes.get(cursor..)?)?;
        cursor += octet_len;
        if octet_index < 3 {
            if bytes.get(cursor) != Some(&b'.') {
                return None;
            }
            cursor += 1;
        }
    }
    let text = std::str::from_utf8(&bytes[offs..cursor]).ok()?;
    Some(ParseSuccess {
        consumed: cursor - offs,
        value: Some(Value::String(text.to_string())),
    })
}

pub const ENTRY: ParserEntry = ParserEntry {
    name: "ipv4",
    construct: None,
    parse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_dotted_quad() {
        let success = parse(b"10.0.0.1 rest", 0, &ParserData::None).unwrap();
        assert_eq!(success.consumed, 8);
        assert_eq!(success.value, Some(Value::String("10.0.0.1".into())));
    }

    #[test]
    fn rejects_out_of_range_octet() {
        assert!(parse(b"999.0.0.1", 0, &ParserData::None).is_none());
    }

    #[test]
    fn rejects_missing_octet() {
        assert!(parse(b"10.0.1", 0, &ParserData::None).is_none());
    }
}

use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};
use serde_json::Value;

fn run_parse(bytes: &[u8], offs: usize, pred: fn(&u8) -> bool) -> Option<ParseSuccess> {
    let slice = bytes.get(offs..)?;
    let len = slice.iter().take_while(|b| pred(b)).count();
    if len == 0 {
        return None;
    }
    let text = std::str::from_utf8(&slice[..len]).ok()?;
    Some(ParseSuccess {
        consumed: len,
        value: Some(Value::String(text.to_string())),
    })
}

fn parse_alpha(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    run_parse(bytes, offs, u8::is_ascii_alphabetic)
}

fn parse_digits(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    run_parse(bytes, offs, u8::is_ascii_digit)
}

pub const ALPHA_ENTRY: ParserEntry = ParserEntry {
    name: "alpha",
    construct: None,
    parse: parse_alpha,
};

pub const DIGITS_ENTRY: ParserEntry = ParserEntry {
    name: "digits",
    construct: None,
    parse: parse_digits,
};

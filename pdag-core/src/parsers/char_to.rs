use eyre::{eyre, Result};

use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};
use serde_json::Value;

fn construct(extra: Option<&str>, _config: Option<&serde_json::Value>) -> Result<ParserData> {
    let terminator = extra
        .and_then(|s| s.bytes().next())
        .ok_or_else(|| eyre!("char-to parser requires a one-character terminator"))?;
    Ok(ParserData::CharTo(terminator))
}

/// Consumes up to (not including) the configured terminator byte. Fails if
/// the terminator does not appear before the end of input, so a trailing
/// literal after `%field:char_to:x%` still has something to match against.
fn parse(bytes: &[u8], offs: usize, data: &ParserData) -> Option<ParseSuccess> {
    let terminator = match data {
        ParserData::CharTo(c) => *c,
        _ => return None,
    };
    let slice = bytes.get(offs..)?;
    let len = slice.iter().position(|b| *b == terminator)?;
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
    name: "char_to",
    construct: Some(construct),
    parse,
};

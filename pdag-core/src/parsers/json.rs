use serde::de::Deserialize;
use serde_json::Value;

use crate::parser_data::ParserData;
use crate::registry::{ParseSuccess, ParserEntry};

fn parse(bytes: &[u8], offs: usize, _data: &ParserData) -> Option<ParseSuccess> {
    let slice = bytes.get(offs..)?;
    let mut de = serde_json::Deserializer::from_slice(slice);
    let value = Value::deserialize(&mut de).ok()?;
    Some(ParseSuccess {
        consumed: de.byte_offset(),
        value: Some(value),
    })
}

pub const ENTRY: ParserEntry = ParserEntry {
    name: "json",
    construct: None,
    parse,
};

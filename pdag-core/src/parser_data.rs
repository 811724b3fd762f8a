//! Opaque per-edge configuration, understood only by the owning parser's
//! `construct`/`parse` pair. Rust's ownership model frees this with its
//! edge automatically, so there is no explicit `destruct` hook (see
//! `DESIGN.md`).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserData {
    None,
    Literal(Vec<u8>),
    CharTo(u8),
}

impl ParserData {
    /// Fuses two adjacent literal payloads during optimization (`combineData`
    /// in the spec). Only literal data is fuseable; anything else returns
    /// `None` and the optimizer leaves the edges alone.
    pub fn combine(&self, other: &ParserData) -> Option<ParserData> {
        match (self, other) {
            (ParserData::Literal(a), ParserData::Literal(b)) => {
                let mut combined = a.clone();
                combined.extend_from_slice(b);
                Some(ParserData::Literal(combined))
            }
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&[u8]> {
        match self {
            ParserData::Literal(bytes) => Some(bytes),
            _ => None,
        }
    }
}

//! Core of a log-normalization engine: a parse directed-acyclic-graph
//! (pdag) that, given a raw log line and a library of rule samples,
//! recognizes the line, extracts named fields, and emits a structured
//! record.
//!
//! This crate covers the in-memory pdag representation and its
//! construction primitives, the recursive normalizer that drives
//! backtracking matching, the built-in parser dispatch table, the
//! literal-path compaction optimizer, and the result-assembly rules. It
//! does not read rulebase files or perform stream I/O; those are external
//! collaborators (see `pdagc` for a minimal one).

pub mod annotator;
pub mod builder;
pub mod context;
pub mod diagnostics;
pub mod edge;
pub mod node;
pub mod normalizer;
pub mod optimizer;
pub mod parser_data;
pub mod parsers;
pub mod registry;

pub use annotator::{Annotator, NoopAnnotator};
pub use builder::add_parser;
pub use context::Context;
pub use edge::{new_edge, new_literal_edge, FieldTarget, ParserEdge};
pub use normalizer::{normalize, NormalizeOutcome};
pub use optimizer::optimize;
pub use registry::{id_of, ParserId, CUSTOM_TYPE};

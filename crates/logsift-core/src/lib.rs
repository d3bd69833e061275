//! Formatting core for logsift
//!
//! This crate turns raw log text plus a filter configuration into a
//! structured per-line result. It has no I/O: parse failures are data
//! (`ParseOutcome::Unparsed`), never errors, and `format` always returns a
//! well-formed result for any input.

mod filter;
mod format;
mod highlight;
mod parser;
mod render;
mod splitter;

pub use filter::{matches_filter, parse_keywords};
pub use format::{MAX_LINES, format};
pub use parser::{AccessLogParser, JsonLinesParser, LineParser, PlainParser, parser_for};

// Re-export types used in our public API
pub use logsift_types::{
    AccessLogFields, FilterConfig, FormatResult, JsonFields, LineRecord, LogFormat, Markup,
    MarkupSpan, ParseOutcome, RecordKind, SpanKind, StatusClass, StatusFilter,
};

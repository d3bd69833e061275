use logsift_types::{FilterConfig, FormatResult, LineRecord, RecordKind};

use crate::filter::matches_filter;
use crate::parser::parser_for;
use crate::render::render_line;
use crate::splitter::split_lines;

/// Hard cap on processed lines per formatting pass
pub const MAX_LINES: usize = 10_000;

/// Run one formatting pass: split, parse, filter, and render the raw text
/// under the given configuration.
///
/// This is the core's single entry point. It is pure: identical inputs
/// yield identical results, and any input string (including empty)
/// produces a well-formed result.
pub fn format(raw: &str, config: &FilterConfig) -> FormatResult {
    let split = split_lines(raw, MAX_LINES);
    let parser = parser_for(config.format);

    let mut records = Vec::with_capacity(split.lines.len() + usize::from(split.truncated));
    if split.truncated {
        records.push(LineRecord::notice(format!(
            "Input exceeded {MAX_LINES} lines; showing the first {MAX_LINES} ({} hidden).",
            split.hidden
        )));
    }

    let mut matched_lines = 0;
    for (index, line) in split.lines.iter().enumerate() {
        let outcome = parser.parse(line);
        let matched = matches_filter(&outcome, line, config);
        if matched {
            matched_lines += 1;
        } else if config.only_matched {
            continue;
        }

        let markup = render_line(&outcome, line, &config.include_keywords);
        records.push(LineRecord {
            index,
            raw_text: (*line).to_string(),
            status_code: outcome.status_code().map(str::to_string),
            outcome,
            matched,
            markup,
            kind: RecordKind::Line,
        });
    }

    let total_lines = split.lines.len();
    tracing::debug!(total_lines, matched_lines, truncated = split.truncated, "formatting pass");

    FormatResult {
        total_lines,
        matched_lines,
        truncated: split.truncated,
        records,
    }
}

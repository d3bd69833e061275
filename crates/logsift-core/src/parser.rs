use regex::Regex;
use serde_json::Value;

use logsift_types::{AccessLogFields, JsonFields, LogFormat, ParseOutcome};

/// Per-line parser for one log format, selected once per formatting pass
pub trait LineParser {
    /// Extract a structured record from one line, or signal `Unparsed`
    fn parse(&self, line: &str) -> ParseOutcome;
}

/// Get the parser for the selected format
pub fn parser_for(format: LogFormat) -> Box<dyn LineParser> {
    match format {
        LogFormat::AccessLog => Box::new(AccessLogParser::new()),
        LogFormat::JsonLines => Box::new(JsonLinesParser),
        LogFormat::Plain => Box::new(PlainParser),
    }
}

// Nginx and Apache combined logs are close enough to share one pattern:
// client token, two ignored tokens, bracketed timestamp, quoted
// "METHOD URL PROTOCOL" triplet, three-digit status, size token. The
// non-greedy URL capture lets the trailing protocol token disambiguate
// URLs containing whitespace.
const ACCESS_LOG_PATTERN: &str =
    r#"^(\S+)\s+\S+\s+\S+\s+\[([^\]]+)]\s+"(\S+)\s+([^"]+?)\s+(\S+)"\s+(\d{3})\s+(\S+)"#;

/// Parser for Nginx/Apache-style access logs
pub struct AccessLogParser {
    pattern: Regex,
}

impl AccessLogParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(ACCESS_LOG_PATTERN).expect("access log pattern is valid"),
        }
    }
}

impl Default for AccessLogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for AccessLogParser {
    fn parse(&self, line: &str) -> ParseOutcome {
        let Some(caps) = self.pattern.captures(line) else {
            return ParseOutcome::Unparsed;
        };

        // Anything past the matched prefix (referrer, user agent, ...) is
        // kept verbatim as opaque trailing text
        let matched_end = caps.get(0).map_or(line.len(), |m| m.end());

        ParseOutcome::AccessLog(AccessLogFields {
            client_ip: caps[1].to_string(),
            timestamp: caps[2].to_string(),
            method: caps[3].to_string(),
            url: caps[4].to_string(),
            protocol: caps[5].to_string(),
            status: caps[6].to_string(),
            size: caps[7].to_string(),
            trailing: line[matched_end..].to_string(),
        })
    }
}

/// Parser for JSON-lines input; each line is one self-contained document
pub struct JsonLinesParser;

impl LineParser for JsonLinesParser {
    fn parse(&self, line: &str) -> ParseOutcome {
        let Ok(value) = serde_json::from_str::<Value>(line) else {
            return ParseOutcome::Unparsed;
        };

        // Non-object documents still count as parsed JSON; they just carry
        // no fields
        let mut fields = JsonFields::default();
        if let Some(obj) = value.as_object() {
            fields.time = string_field(obj, &["time", "timestamp", "@timestamp", "date"]);
            fields.level = string_field(obj, &["level", "severity"]);
            fields.message = string_field(obj, &["msg", "message"]);
            fields.method = string_field(obj, &["method"]);
            fields.url = string_field(obj, &["url", "path"]);
            fields.status = string_field(obj, &["status", "code"]);
        }

        ParseOutcome::Json(fields)
    }
}

/// Parser for freeform text; never extracts structure
pub struct PlainParser;

impl LineParser for PlainParser {
    fn parse(&self, _line: &str) -> ParseOutcome {
        ParseOutcome::Unparsed
    }
}

/// Take the first usable value among the candidate keys. Empty strings are
/// treated as absent; numeric values are stringified.
fn string_field(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match obj.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LINE: &str =
        r#"127.0.0.1 - - [10/Nov/2025:12:34:56 +0900] "GET / HTTP/1.1" 200 1234 "-" "curl/7.79.1""#;

    #[test]
    fn test_access_log_parses_sample_line() {
        let parser = AccessLogParser::new();
        let ParseOutcome::AccessLog(fields) = parser.parse(SAMPLE_LINE) else {
            panic!("expected access log outcome");
        };
        assert_eq!(fields.client_ip, "127.0.0.1");
        assert_eq!(fields.timestamp, "10/Nov/2025:12:34:56 +0900");
        assert_eq!(fields.method, "GET");
        assert_eq!(fields.url, "/");
        assert_eq!(fields.protocol, "HTTP/1.1");
        assert_eq!(fields.status, "200");
        assert_eq!(fields.size, "1234");
        assert_eq!(fields.trailing, r#" "-" "curl/7.79.1""#);
    }

    #[test]
    fn test_access_log_url_with_internal_whitespace() {
        let parser = AccessLogParser::new();
        let line = r#"10.0.0.1 - - [10/Nov/2025:12:00:00 +0000] "GET /a b/c HTTP/1.1" 404 0"#;
        let ParseOutcome::AccessLog(fields) = parser.parse(line) else {
            panic!("expected access log outcome");
        };
        // The protocol token anchors the end of the URL capture
        assert_eq!(fields.url, "/a b/c");
        assert_eq!(fields.protocol, "HTTP/1.1");
        assert_eq!(fields.status, "404");
    }

    #[test]
    fn test_access_log_rejects_freeform_text() {
        let parser = AccessLogParser::new();
        assert_eq!(parser.parse("not an access log"), ParseOutcome::Unparsed);
    }

    #[test]
    fn test_json_extracts_fields_with_priorities() {
        let parser = JsonLinesParser;
        let line = r#"{"time":"2025-11-10T03:36:00Z","level":"error","msg":"DB timeout","path":"/api/order","status":504}"#;
        let ParseOutcome::Json(fields) = parser.parse(line) else {
            panic!("expected json outcome");
        };
        assert_eq!(fields.time.as_deref(), Some("2025-11-10T03:36:00Z"));
        assert_eq!(fields.level.as_deref(), Some("error"));
        assert_eq!(fields.message.as_deref(), Some("DB timeout"));
        // url falls back to "path", numeric status is stringified
        assert_eq!(fields.url.as_deref(), Some("/api/order"));
        assert_eq!(fields.status.as_deref(), Some("504"));
        assert_eq!(fields.method, None);
    }

    #[test]
    fn test_json_timestamp_priority_order() {
        let parser = JsonLinesParser;
        let line = r#"{"@timestamp":"later","time":"first"}"#;
        let ParseOutcome::Json(fields) = parser.parse(line) else {
            panic!("expected json outcome");
        };
        assert_eq!(fields.time.as_deref(), Some("first"));
    }

    #[test]
    fn test_json_empty_string_field_is_absent() {
        let parser = JsonLinesParser;
        let ParseOutcome::Json(fields) = parser.parse(r#"{"level":"","severity":"warn"}"#) else {
            panic!("expected json outcome");
        };
        assert_eq!(fields.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_json_non_object_document_has_no_fields() {
        let parser = JsonLinesParser;
        let ParseOutcome::Json(fields) = parser.parse("[1, 2, 3]") else {
            panic!("expected json outcome");
        };
        assert_eq!(fields, JsonFields::default());
    }

    #[test]
    fn test_json_invalid_document_is_unparsed() {
        let parser = JsonLinesParser;
        assert_eq!(parser.parse("{broken"), ParseOutcome::Unparsed);
        assert_eq!(parser.parse(r#"{"a":1} extra"#), ParseOutcome::Unparsed);
    }

    #[test]
    fn test_plain_is_always_unparsed() {
        let parser = PlainParser;
        assert_eq!(parser.parse(SAMPLE_LINE), ParseOutcome::Unparsed);
        assert_eq!(parser.parse(r#"{"valid":"json"}"#), ParseOutcome::Unparsed);
    }
}

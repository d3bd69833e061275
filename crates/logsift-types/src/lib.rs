//! Shared types for logsift
//!
//! This crate contains the data model used across the logsift crates:
//! input formats, filter configuration, per-line parse outcomes, and the
//! markup spans the core hands to the rendering layer.

use ratatui::style::Color;

// ============================================================================
// Format & Filter Selection
// ============================================================================

/// Log shape the input is parsed against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Nginx/Apache-style access log (both share one pattern)
    #[default]
    AccessLog,
    /// One JSON document per line
    JsonLines,
    /// Freeform text, no structure extracted
    Plain,
}

impl LogFormat {
    /// Get display label for this format
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccessLog => "access-log",
            Self::JsonLines => "json-lines",
            Self::Plain => "plain",
        }
    }

    /// Cycle to the next format
    pub fn next(&self) -> Self {
        match self {
            Self::AccessLog => Self::JsonLines,
            Self::JsonLines => Self::Plain,
            Self::Plain => Self::AccessLog,
        }
    }

    /// Cycle to the previous format
    pub fn prev(&self) -> Self {
        match self {
            Self::AccessLog => Self::Plain,
            Self::JsonLines => Self::AccessLog,
            Self::Plain => Self::JsonLines,
        }
    }
}

/// Status-class filter selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Class2xx,
    Class3xx,
    Class4xx,
    Class5xx,
}

impl StatusFilter {
    /// Get display label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Class2xx => "2xx",
            Self::Class3xx => "3xx",
            Self::Class4xx => "4xx",
            Self::Class5xx => "5xx",
        }
    }

    /// Cycle to the next filter
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Class2xx,
            Self::Class2xx => Self::Class3xx,
            Self::Class3xx => Self::Class4xx,
            Self::Class4xx => Self::Class5xx,
            Self::Class5xx => Self::All,
        }
    }

    /// Cycle to the previous filter
    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Class5xx,
            Self::Class2xx => Self::All,
            Self::Class3xx => Self::Class2xx,
            Self::Class4xx => Self::Class3xx,
            Self::Class5xx => Self::Class4xx,
        }
    }
}

/// HTTP status code class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Success2xx,
    Redirect3xx,
    ClientError4xx,
    ServerError5xx,
}

impl StatusClass {
    /// Classify a status code string; codes outside [200, 600) and
    /// non-numeric codes have no class
    pub fn classify(code: &str) -> Option<Self> {
        let n: u16 = code.trim().parse().ok()?;
        match n {
            200..=299 => Some(Self::Success2xx),
            300..=399 => Some(Self::Redirect3xx),
            400..=499 => Some(Self::ClientError4xx),
            500..=599 => Some(Self::ServerError5xx),
            _ => None,
        }
    }

    /// Get display color for this class
    pub fn color(&self) -> Color {
        match self {
            Self::Success2xx => Color::Green,
            Self::Redirect3xx => Color::Cyan,
            Self::ClientError4xx => Color::Yellow,
            Self::ServerError5xx => Color::Red,
        }
    }
}

/// Filter configuration for one formatting pass, immutable during the pass
#[derive(Clone, Debug, Default)]
pub struct FilterConfig {
    pub format: LogFormat,
    pub status_filter: StatusFilter,
    /// Lower-cased tokens, AND semantics
    pub include_keywords: Vec<String>,
    /// Lower-cased tokens, OR semantics
    pub exclude_keywords: Vec<String>,
    /// Drop non-matching lines instead of dimming them
    pub only_matched: bool,
}

// ============================================================================
// Parse Outcomes
// ============================================================================

/// Result of parsing one line against the selected format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    AccessLog(AccessLogFields),
    Json(JsonFields),
    /// The line did not match the format; it is still processed as
    /// freeform text downstream, never rejected
    Unparsed,
}

impl ParseOutcome {
    /// Status code extracted by the parser, if any
    pub fn status_code(&self) -> Option<&str> {
        match self {
            Self::AccessLog(fields) => Some(&fields.status),
            Self::Json(fields) => fields.status.as_deref(),
            Self::Unparsed => None,
        }
    }
}

/// Fields captured from an access-log line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessLogFields {
    pub client_ip: String,
    pub timestamp: String,
    pub method: String,
    pub url: String,
    pub protocol: String,
    pub status: String,
    pub size: String,
    /// Suffix past the matched prefix (referrer/user-agent etc.),
    /// opaque text for matching and highlighting
    pub trailing: String,
}

/// Fields extracted from a JSON log line; absent fields are omitted from
/// rendering, not treated as empty strings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonFields {
    pub time: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Rendered Markup
// ============================================================================

/// Structural tag for a markup span, mapped to a style by the UI theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    ClientIp,
    Timestamp,
    Method,
    Url,
    Protocol,
    Status(Option<StatusClass>),
    Size,
    Level,
    Message,
    /// Untagged text (separators, trailing content, unparsed lines)
    Text,
    /// System messages such as the truncation notice
    System,
}

/// One contiguous run of presentation text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupSpan {
    pub kind: SpanKind,
    pub text: String,
    pub highlighted: bool,
}

impl MarkupSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Ordered spans making up one rendered line
pub type Markup = Vec<MarkupSpan>;

// ============================================================================
// Line Records & Results
// ============================================================================

/// Whether a record carries an input line or a synthetic system message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Line,
    Notice,
}

/// Per-line outcome produced by one formatting pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord {
    /// Position in the (possibly truncated) sequence of non-blank lines
    pub index: usize,
    /// Original line content, unmodified
    pub raw_text: String,
    pub outcome: ParseOutcome,
    /// Extracted status code, used for classification only
    pub status_code: Option<String>,
    /// Whether the line satisfies the active filter configuration
    pub matched: bool,
    pub markup: Markup,
    pub kind: RecordKind,
}

impl LineRecord {
    /// Build the synthetic notice record prepended when input is truncated
    pub fn notice(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            index: 0,
            raw_text: text.clone(),
            outcome: ParseOutcome::Unparsed,
            status_code: None,
            matched: true,
            markup: vec![MarkupSpan::new(SpanKind::System, text)],
            kind: RecordKind::Notice,
        }
    }
}

/// Aggregated result of one formatting pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatResult {
    /// Non-blank lines seen in the (possibly truncated) input
    pub total_lines: usize,
    /// Lines that passed the filter configuration
    pub matched_lines: usize,
    /// Input exceeded the line cap and was cut to the first N lines
    pub truncated: bool,
    pub records: Vec<LineRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(StatusClass::classify("200"), Some(StatusClass::Success2xx));
        assert_eq!(StatusClass::classify("301"), Some(StatusClass::Redirect3xx));
        assert_eq!(
            StatusClass::classify("404"),
            Some(StatusClass::ClientError4xx)
        );
        assert_eq!(
            StatusClass::classify("504"),
            Some(StatusClass::ServerError5xx)
        );
        assert_eq!(StatusClass::classify("199"), None);
        assert_eq!(StatusClass::classify("600"), None);
        assert_eq!(StatusClass::classify("abc"), None);
        assert_eq!(StatusClass::classify(""), None);
    }

    #[test]
    fn test_format_cycling_round_trips() {
        let mut format = LogFormat::AccessLog;
        for _ in 0..3 {
            format = format.next();
        }
        assert_eq!(format, LogFormat::AccessLog);
        assert_eq!(LogFormat::JsonLines.prev(), LogFormat::AccessLog);
    }

    #[test]
    fn test_status_filter_cycling_round_trips() {
        let mut filter = StatusFilter::All;
        for _ in 0..5 {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
        assert_eq!(StatusFilter::All.prev(), StatusFilter::Class5xx);
    }

    #[test]
    fn test_notice_record() {
        let record = LineRecord::notice("lines hidden");
        assert_eq!(record.kind, RecordKind::Notice);
        assert!(record.matched);
        assert_eq!(record.markup.len(), 1);
        assert_eq!(record.markup[0].kind, SpanKind::System);
    }
}

use logsift_types::{FilterConfig, ParseOutcome, StatusClass, StatusFilter};

/// Tokenize a raw keyword input into the filter token shape: split on
/// whitespace, drop empties, lower-case.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Decide whether a line satisfies the active filter configuration.
///
/// All rules must pass: status class, then include keywords (AND), then
/// exclude keywords (OR).
pub fn matches_filter(outcome: &ParseOutcome, raw_line: &str, config: &FilterConfig) -> bool {
    if !matches_status(outcome, config.status_filter) {
        return false;
    }

    if config.include_keywords.is_empty() && config.exclude_keywords.is_empty() {
        return true;
    }

    let lower = raw_line.to_lowercase();
    if !config.include_keywords.iter().all(|kw| lower.contains(kw)) {
        return false;
    }
    if config.exclude_keywords.iter().any(|kw| lower.contains(kw)) {
        return false;
    }

    true
}

fn matches_status(outcome: &ParseOutcome, filter: StatusFilter) -> bool {
    if filter == StatusFilter::All {
        return true;
    }

    match outcome {
        ParseOutcome::AccessLog(fields) => status_in_class(&fields.status, filter),
        // A JSON line without a status field passes any class filter;
        // an unparsed line passes none. Asymmetric, but it is the
        // tool's long-observed behavior.
        ParseOutcome::Json(fields) => fields
            .status
            .as_deref()
            .is_none_or(|code| status_in_class(code, filter)),
        ParseOutcome::Unparsed => false,
    }
}

fn status_in_class(code: &str, filter: StatusFilter) -> bool {
    let class = StatusClass::classify(code);
    match filter {
        StatusFilter::All => true,
        StatusFilter::Class2xx => class == Some(StatusClass::Success2xx),
        StatusFilter::Class3xx => class == Some(StatusClass::Redirect3xx),
        StatusFilter::Class4xx => class == Some(StatusClass::ClientError4xx),
        StatusFilter::Class5xx => class == Some(StatusClass::ServerError5xx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logsift_types::{AccessLogFields, JsonFields};

    fn access_log_outcome(status: &str) -> ParseOutcome {
        ParseOutcome::AccessLog(AccessLogFields {
            client_ip: "127.0.0.1".to_string(),
            timestamp: "10/Nov/2025:12:34:56 +0900".to_string(),
            method: "GET".to_string(),
            url: "/".to_string(),
            protocol: "HTTP/1.1".to_string(),
            status: status.to_string(),
            size: "1234".to_string(),
            trailing: String::new(),
        })
    }

    #[test]
    fn test_parse_keywords_trims_and_lowercases() {
        assert_eq!(parse_keywords("  GET   Admin "), vec!["get", "admin"]);
        assert!(parse_keywords("   ").is_empty());
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn test_status_class_filter() {
        let config = FilterConfig {
            status_filter: StatusFilter::Class2xx,
            ..FilterConfig::default()
        };
        assert!(matches_filter(&access_log_outcome("204"), "", &config));
        assert!(!matches_filter(&access_log_outcome("404"), "", &config));
        assert!(!matches_filter(&access_log_outcome("999"), "", &config));
    }

    #[test]
    fn test_unparsed_fails_any_class_filter() {
        let config = FilterConfig {
            status_filter: StatusFilter::Class4xx,
            ..FilterConfig::default()
        };
        assert!(!matches_filter(&ParseOutcome::Unparsed, "some text", &config));

        let all = FilterConfig::default();
        assert!(matches_filter(&ParseOutcome::Unparsed, "some text", &all));
    }

    #[test]
    fn test_json_without_status_passes_class_filter() {
        let config = FilterConfig {
            status_filter: StatusFilter::Class5xx,
            ..FilterConfig::default()
        };
        let no_status = ParseOutcome::Json(JsonFields::default());
        assert!(matches_filter(&no_status, "{}", &config));

        let with_status = ParseOutcome::Json(JsonFields {
            status: Some("404".to_string()),
            ..JsonFields::default()
        });
        assert!(!matches_filter(&with_status, "{}", &config));
    }

    #[test]
    fn test_include_keywords_are_anded() {
        let config = FilterConfig {
            include_keywords: parse_keywords("get admin"),
            ..FilterConfig::default()
        };
        assert!(!matches_filter(
            &ParseOutcome::Unparsed,
            "GET / HTTP/1.1",
            &config
        ));
        assert!(matches_filter(
            &ParseOutcome::Unparsed,
            "GET /admin HTTP/1.1",
            &config
        ));
    }

    #[test]
    fn test_exclude_keywords_are_ored() {
        let config = FilterConfig {
            exclude_keywords: parse_keywords("curl probe"),
            ..FilterConfig::default()
        };
        assert!(!matches_filter(
            &ParseOutcome::Unparsed,
            "GET / 200 curl/7.79.1",
            &config
        ));
        assert!(matches_filter(&ParseOutcome::Unparsed, "GET / 200", &config));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let config = FilterConfig {
            include_keywords: parse_keywords("get"),
            exclude_keywords: parse_keywords("curl"),
            ..FilterConfig::default()
        };
        assert!(!matches_filter(
            &ParseOutcome::Unparsed,
            "GET / curl/7.79.1",
            &config
        ));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let config = FilterConfig {
            include_keywords: parse_keywords("TIMEOUT"),
            ..FilterConfig::default()
        };
        assert!(matches_filter(&ParseOutcome::Unparsed, "DB Timeout", &config));
    }
}

use logsift_types::{
    AccessLogFields, JsonFields, Markup, MarkupSpan, ParseOutcome, SpanKind, StatusClass,
};

use crate::highlight::highlight_first;

/// Build the presentation markup for one line.
///
/// Structural tagging and highlight placement both happen here, in the
/// core; the UI maps the finished spans to styles without re-inspecting
/// the text.
pub(crate) fn render_line(outcome: &ParseOutcome, raw: &str, keywords: &[String]) -> Markup {
    match outcome {
        ParseOutcome::AccessLog(fields) => render_access_log(fields, keywords),
        ParseOutcome::Json(fields) => render_json(fields, raw, keywords),
        ParseOutcome::Unparsed => render_plain(raw, keywords),
    }
}

fn render_access_log(fields: &AccessLogFields, keywords: &[String]) -> Markup {
    let status_kind = SpanKind::Status(StatusClass::classify(&fields.status));

    let mut markup = vec![
        MarkupSpan::new(SpanKind::ClientIp, &fields.client_ip),
        MarkupSpan::new(SpanKind::Text, " - - "),
        MarkupSpan::new(SpanKind::Timestamp, format!("[{}]", fields.timestamp)),
        MarkupSpan::new(SpanKind::Text, " \""),
        MarkupSpan::new(SpanKind::Method, &fields.method),
        MarkupSpan::new(SpanKind::Text, " "),
    ];
    push_field(&mut markup, SpanKind::Url, &fields.url, keywords);
    markup.push(MarkupSpan::new(SpanKind::Text, " "));
    markup.push(MarkupSpan::new(SpanKind::Protocol, &fields.protocol));
    markup.push(MarkupSpan::new(SpanKind::Text, "\" "));
    markup.push(MarkupSpan::new(status_kind, &fields.status));
    markup.push(MarkupSpan::new(SpanKind::Text, " "));
    markup.push(MarkupSpan::new(SpanKind::Size, &fields.size));

    // Trailing content keeps its own leading whitespace
    if !fields.trailing.trim().is_empty() {
        push_field(&mut markup, SpanKind::Text, &fields.trailing, keywords);
    }

    markup
}

fn render_json(fields: &JsonFields, raw: &str, keywords: &[String]) -> Markup {
    let mut markup = Markup::new();

    if let Some(time) = &fields.time {
        markup.push(MarkupSpan::new(SpanKind::Timestamp, format!("[{time}]")));
    }
    if let Some(level) = &fields.level {
        push_separator(&mut markup);
        markup.push(MarkupSpan::new(SpanKind::Level, level));
    }
    if let Some(method) = &fields.method {
        push_separator(&mut markup);
        markup.push(MarkupSpan::new(SpanKind::Method, method));
    }
    if let Some(url) = &fields.url {
        push_separator(&mut markup);
        push_field(&mut markup, SpanKind::Url, url, keywords);
    }
    if let Some(status) = &fields.status {
        push_separator(&mut markup);
        markup.push(MarkupSpan::new(
            SpanKind::Status(StatusClass::classify(status)),
            status,
        ));
    }
    if let Some(message) = &fields.message {
        push_separator(&mut markup);
        push_field(&mut markup, SpanKind::Message, message, keywords);
    }

    // A record with none of the known fields falls back to the raw line
    if markup.is_empty() {
        return render_plain(raw, keywords);
    }
    markup
}

fn render_plain(raw: &str, keywords: &[String]) -> Markup {
    let mut markup = Markup::new();
    push_field(&mut markup, SpanKind::Text, raw, keywords);
    markup
}

/// Push a highlightable field, splitting it around the highlighted span
fn push_field(markup: &mut Markup, kind: SpanKind, text: &str, keywords: &[String]) {
    for (text, highlighted) in highlight_first(text, keywords) {
        markup.push(MarkupSpan {
            kind,
            text,
            highlighted,
        });
    }
}

fn push_separator(markup: &mut Markup) {
    if !markup.is_empty() {
        markup.push(MarkupSpan::new(SpanKind::Text, " "));
    }
}

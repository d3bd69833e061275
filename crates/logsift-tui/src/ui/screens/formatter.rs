use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::{
    app::{AppState, Focus},
    ui::{Layout, Theme, components::StatusBar},
};

/// The single formatter screen: header, filter bar, output pane, status bar
pub struct FormatterScreen;

impl FormatterScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let theme = Theme::new(state.dark_mode);
        let area = frame.area();

        // Background fill so the dark/light toggle covers the whole frame
        frame.render_widget(Block::default().style(theme.base()), area);

        let (header_area, filter_area, output_area, status_area) = Layout::main(area);

        Self::render_header(frame, header_area, state, theme);
        Self::render_filter_bar(frame, filter_area, state, theme);
        Self::render_output(frame, output_area, state, theme);
        Self::render_status_bar(frame, status_area, state, theme);
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
        let source = state.source_name.as_deref().unwrap_or("(no input)");

        let title = Line::from(vec![
            Span::styled("logsift", theme.title()),
            Span::styled(" │ ", theme.text_dim()),
            Span::styled(source, theme.text()),
            Span::styled(" │ ", theme.text_dim()),
            Span::styled(state.format.label(), theme.text_highlight()),
        ]);

        let header = Paragraph::new(title).style(theme.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );

        frame.render_widget(header, area);
    }

    fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
        let field = |label: &'static str, value: String, focused: bool| {
            let value_style = if focused {
                theme.border_focused()
            } else {
                theme.text()
            };
            let cursor = if focused { "▏" } else { "" };
            vec![
                Span::styled(label, theme.text_dim()),
                Span::styled(format!("[{value}{cursor}]"), value_style),
            ]
        };

        let mut spans = vec![
            Span::styled("status:", theme.text_dim()),
            Span::styled(state.status_filter.label(), theme.text()),
            Span::styled("  ", theme.text_dim()),
        ];
        spans.extend(field(
            "include:",
            state.include_input.clone(),
            state.focus == Focus::Include,
        ));
        spans.push(Span::styled("  ", theme.text_dim()));
        spans.extend(field(
            "exclude:",
            state.exclude_input.clone(),
            state.focus == Focus::Exclude,
        ));
        spans.push(Span::styled("  ", theme.text_dim()));
        spans.push(Span::styled("matched-only:", theme.text_dim()));
        spans.push(Span::styled(
            if state.only_matched { "on" } else { "off" },
            theme.text(),
        ));

        let bar = Paragraph::new(Line::from(spans)).style(theme.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if state.focus == Focus::Output {
                    theme.border()
                } else {
                    theme.border_focused()
                })
                .title(Span::styled(" filters ", theme.text_dim())),
        );

        frame.render_widget(bar, area);
    }

    fn render_output(frame: &mut Frame, area: Rect, state: &mut AppState, theme: Theme) {
        let inner_height = area.height.saturating_sub(2) as usize;
        state.viewport_height = inner_height;

        let records = &state.result.records;
        let start = state
            .scroll
            .min(records.len().saturating_sub(inner_height.max(1)));

        let lines: Vec<Line> = if records.is_empty() {
            vec![Line::from(Span::styled(
                "no log lines. press 's' to load the sample, '?' for help",
                theme.text_dim(),
            ))]
        } else {
            records
                .iter()
                .skip(start)
                .take(inner_height)
                .map(|record| {
                    let dimmed = !record.matched;
                    Line::from(
                        record
                            .markup
                            .iter()
                            .map(|span| {
                                Span::styled(
                                    span.text.as_str(),
                                    theme.span_style(span.kind, span.highlighted, dimmed),
                                )
                            })
                            .collect::<Vec<_>>(),
                    )
                })
                .collect()
        };

        let output = Paragraph::new(lines).style(theme.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if state.focus == Focus::Output {
                    theme.border_focused()
                } else {
                    theme.border()
                })
                .title(Span::styled(" output ", theme.text_dim())),
        );

        frame.render_widget(output, area);

        if records.len() > inner_height {
            let mut scrollbar_state =
                ScrollbarState::new(records.len().saturating_sub(inner_height)).position(start);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
        let counts = format!(
            "{} lines / {} matched",
            state.result.total_lines, state.result.matched_lines
        );

        let status = StatusBar::new(theme)
            .hints(vec![
                ("f", "format"),
                ("x", "status"),
                ("i", "include"),
                ("e", "exclude"),
                ("m", "matched-only"),
                ("s", "sample"),
                ("?", "help"),
                ("q", "quit"),
            ])
            .right(counts);

        frame.render_widget(status, area);
    }
}

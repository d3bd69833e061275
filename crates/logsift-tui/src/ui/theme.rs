use logsift_types::{SpanKind, StatusClass};
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application; carries the dark/light selection
/// because dark mode is a runtime toggle
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    fn fg(&self) -> Color {
        if self.dark { Color::White } else { Color::Black }
    }

    fn fg_dim(&self) -> Color {
        if self.dark { Color::DarkGray } else { Color::Gray }
    }

    fn bg(&self) -> Color {
        if self.dark { Color::Black } else { Color::White }
    }

    fn primary(&self) -> Color {
        if self.dark { Color::Cyan } else { Color::Blue }
    }

    /// Whole-frame background fill
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    // Text styles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim())
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // Border styles
    pub fn border(&self) -> Style {
        Style::default().fg(self.fg_dim())
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary())
    }

    // Status bar
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.bg()).bg(self.fg_dim())
    }

    pub fn status_bar_key(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(self.fg_dim())
            .add_modifier(Modifier::BOLD)
    }

    /// Style for one markup span. Highlight wins over dimming; dimming
    /// wins over the structural tag.
    pub fn span_style(&self, kind: SpanKind, highlighted: bool, dimmed: bool) -> Style {
        if highlighted {
            return self.text_highlight();
        }
        if dimmed {
            return self.text_dim();
        }

        match kind {
            SpanKind::ClientIp => Style::default().fg(self.primary()),
            SpanKind::Timestamp => self.text_dim(),
            SpanKind::Method => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            SpanKind::Url => self.text(),
            SpanKind::Protocol => self.text_dim(),
            SpanKind::Status(class) => match class {
                Some(class) => Style::default()
                    .fg(self.status_class_color(class))
                    .add_modifier(Modifier::BOLD),
                None => self.text(),
            },
            SpanKind::Size => Style::default().fg(Color::Magenta),
            SpanKind::Level => Style::default().fg(Color::Yellow),
            SpanKind::Message => self.text(),
            SpanKind::Text => self.text(),
            SpanKind::System => Style::default()
                .fg(self.primary())
                .add_modifier(Modifier::ITALIC),
        }
    }

    fn status_class_color(&self, class: StatusClass) -> Color {
        // The shared palette works on both backgrounds
        class.color()
    }
}

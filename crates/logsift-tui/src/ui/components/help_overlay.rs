use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::Theme;

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, theme: Theme) {
        let area = frame.area();

        let popup_width = 46.min(area.width.saturating_sub(4));
        let popup_height = 22.min(area.height.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let section = |name: &'static str| {
            Line::from(Span::styled(name, Style::default().fg(Color::Yellow)))
        };

        let help_text = vec![
            Line::from(Span::styled(
                "Keybindings",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section("Filters"),
            Self::key_line("f / F", "Cycle format", theme),
            Self::key_line("x / X", "Cycle status class", theme),
            Self::key_line("i", "Edit include keywords", theme),
            Self::key_line("e", "Edit exclude keywords", theme),
            Self::key_line("m", "Toggle matched-only", theme),
            Self::key_line("Enter/Esc", "Leave keyword field", theme),
            Line::from(""),
            section("Navigation"),
            Self::key_line("j/↓  k/↑", "Scroll", theme),
            Self::key_line("Ctrl+f/b", "Page down / up", theme),
            Self::key_line("g / G", "Top / bottom", theme),
            Line::from(""),
            section("Actions"),
            Self::key_line("s", "Load sample log", theme),
            Self::key_line("c", "Clear everything", theme),
            Self::key_line("d", "Toggle dark mode", theme),
            Self::key_line("?", "Toggle this help", theme),
            Self::key_line("q", "Quit", theme),
        ];

        let help_widget = Paragraph::new(help_text).style(theme.base()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .title(Span::styled(" Help ", theme.title())),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line(key: &'static str, desc: &'static str, theme: Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:>9}"), Style::default().fg(Color::Green)),
            Span::styled(format!("  {desc}"), theme.text()),
        ])
    }
}

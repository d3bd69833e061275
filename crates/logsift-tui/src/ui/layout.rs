use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout helper for the formatter screen
pub struct Layout;

impl Layout {
    /// Split the screen into header, filter bar, output, and status bar
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Filter bar
                Constraint::Min(1),    // Output
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }
}

use logsift_core::parse_keywords;
use logsift_types::{FilterConfig, FormatResult, LogFormat, StatusFilter};

use crate::app::Action;
use crate::sample;

/// Which part of the screen receives character input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Output,
    Include,
    Exclude,
}

/// Central application state
pub struct AppState {
    /// Raw log text currently loaded; immutable during a formatting pass
    pub input: String,
    /// Display name of the loaded source, if any
    pub source_name: Option<String>,

    // Filter controls
    pub format: LogFormat,
    pub status_filter: StatusFilter,
    pub include_input: String,
    pub exclude_input: String,
    pub only_matched: bool,

    /// Result of the most recent formatting pass
    pub result: FormatResult,

    // UI state
    pub focus: Focus,
    pub scroll: usize,
    /// Output rows visible last frame; the renderer keeps this current
    pub viewport_height: usize,
    pub dark_mode: bool,
    pub help_visible: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            source_name: None,
            format: LogFormat::default(),
            status_filter: StatusFilter::default(),
            include_input: String::new(),
            exclude_input: String::new(),
            only_matched: false,
            result: FormatResult::default(),
            focus: Focus::default(),
            scroll: 0,
            viewport_height: 0,
            dark_mode: false,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Replace the input buffer and re-run the formatting pass
    pub fn set_input(&mut self, text: String, source_name: Option<String>) {
        self.input = text;
        self.source_name = source_name;
        self.scroll = 0;
        self.reformat();
    }

    /// Snapshot the current filter controls
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            format: self.format,
            status_filter: self.status_filter,
            include_keywords: parse_keywords(&self.include_input),
            exclude_keywords: parse_keywords(&self.exclude_input),
            only_matched: self.only_matched,
        }
    }

    /// Run a fresh formatting pass over the current input. Each pass
    /// supersedes the previous result wholesale.
    pub fn reformat(&mut self) {
        self.result = logsift_core::format(&self.input, &self.filter_config());
        self.clamp_scroll();
    }

    /// Reset all inputs and counts to their defaults
    pub fn clear(&mut self) {
        self.input.clear();
        self.source_name = None;
        self.include_input.clear();
        self.exclude_input.clear();
        self.status_filter = StatusFilter::All;
        self.only_matched = false;
        self.scroll = 0;
        self.result = FormatResult::default();
    }

    /// Load the fixed multi-format sample
    pub fn load_sample(&mut self) {
        self.format = LogFormat::AccessLog;
        self.set_input(sample::SAMPLE_LOG.to_string(), Some("sample".to_string()));
    }

    /// Apply one action to the state
    pub fn handle(&mut self, action: &Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::ToggleDarkMode => self.dark_mode = !self.dark_mode,

            Action::CycleFormat => {
                self.format = self.format.next();
                self.reformat();
            }
            Action::CycleFormatBack => {
                self.format = self.format.prev();
                self.reformat();
            }
            Action::CycleStatusFilter => {
                self.status_filter = self.status_filter.next();
                self.reformat();
            }
            Action::CycleStatusFilterBack => {
                self.status_filter = self.status_filter.prev();
                self.reformat();
            }
            Action::ToggleOnlyMatched => {
                self.only_matched = !self.only_matched;
                self.reformat();
            }

            Action::FocusInclude => self.focus = Focus::Include,
            Action::FocusExclude => self.focus = Focus::Exclude,
            Action::FocusOutput => self.focus = Focus::Output,
            Action::InputChar(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(*c);
                    self.reformat();
                }
            }
            Action::InputBackspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                    self.reformat();
                }
            }
            Action::InputClear => {
                if let Some(input) = self.focused_input() {
                    input.clear();
                    self.reformat();
                }
            }

            Action::LoadSample => self.load_sample(),
            Action::ClearAll => self.clear(),

            Action::ScrollUp(n) => self.scroll = self.scroll.saturating_sub(*n),
            Action::ScrollDown(n) => {
                self.scroll = self.scroll.saturating_add(*n);
                self.clamp_scroll();
            }
            Action::ScrollToTop => self.scroll = 0,
            Action::ScrollToBottom => self.scroll = self.max_scroll(),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(self.page_size()),
            Action::PageDown => {
                self.scroll = self.scroll.saturating_add(self.page_size());
                self.clamp_scroll();
            }

            Action::Tick => {}
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Include => Some(&mut self.include_input),
            Focus::Exclude => Some(&mut self.exclude_input),
            Focus::Output => None,
        }
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn max_scroll(&self) -> usize {
        self.result
            .records
            .len()
            .saturating_sub(self.viewport_height.max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_load_formats_immediately() {
        let mut state = AppState::new();
        state.load_sample();

        assert_eq!(state.format, LogFormat::AccessLog);
        assert_eq!(state.result.total_lines, 5);
        assert!(state.result.matched_lines > 0);
    }

    #[test]
    fn test_clear_resets_inputs_and_counts() {
        let mut state = AppState::new();
        state.load_sample();
        state.include_input = "admin".to_string();
        state.only_matched = true;
        state.status_filter = StatusFilter::Class4xx;

        state.clear();

        assert!(state.input.is_empty());
        assert!(state.include_input.is_empty());
        assert_eq!(state.status_filter, StatusFilter::All);
        assert!(!state.only_matched);
        assert_eq!(state.result, FormatResult::default());
    }

    #[test]
    fn test_input_chars_route_to_focused_field() {
        let mut state = AppState::new();
        state.handle(&Action::FocusInclude);
        state.handle(&Action::InputChar('g'));
        state.handle(&Action::InputChar('e'));
        state.handle(&Action::InputChar('t'));
        assert_eq!(state.include_input, "get");

        state.handle(&Action::FocusExclude);
        state.handle(&Action::InputChar('x'));
        assert_eq!(state.exclude_input, "x");
        assert_eq!(state.include_input, "get");

        state.handle(&Action::FocusOutput);
        state.handle(&Action::InputChar('z'));
        assert_eq!(state.include_input, "get");
        assert_eq!(state.exclude_input, "x");
    }

    #[test]
    fn test_keyword_edit_refilters() {
        let mut state = AppState::new();
        state.load_sample();
        let before = state.result.matched_lines;

        state.handle(&Action::FocusInclude);
        for c in "admin".chars() {
            state.handle(&Action::InputChar(c));
        }
        assert!(state.result.matched_lines < before);

        state.handle(&Action::InputClear);
        assert_eq!(state.result.matched_lines, before);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::new();
        state.load_sample();
        state.viewport_height = 2;

        state.handle(&Action::ScrollDown(100));
        assert_eq!(state.scroll, state.result.records.len() - 2);

        state.handle(&Action::ScrollToTop);
        assert_eq!(state.scroll, 0);
        state.handle(&Action::ScrollUp(5));
        assert_eq!(state.scroll, 0);
    }
}

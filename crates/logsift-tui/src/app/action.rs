/// All possible actions in the application (command pattern)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    ToggleDarkMode,

    // Filter controls
    CycleFormat,
    CycleFormatBack,
    CycleStatusFilter,
    CycleStatusFilterBack,
    ToggleOnlyMatched,

    // Keyword input editing
    FocusInclude,
    FocusExclude,
    FocusOutput,
    InputChar(char),
    InputBackspace,
    InputClear,

    // Input buffer
    LoadSample,
    ClearAll,

    // Output navigation
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // Tick (for periodic redraws)
    Tick,
}

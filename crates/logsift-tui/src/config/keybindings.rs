use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Action;

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    /// Output pane has focus (scrolling)
    Output,
    /// An include/exclude keyword field has focus
    KeywordInput,
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::new(KeyCode::Char('d')), Action::ToggleDarkMode);
        global.insert(KeyBinding::new(KeyCode::Char('f')), Action::CycleFormat);
        global.insert(KeyBinding::shift(KeyCode::Char('F')), Action::CycleFormatBack);
        global.insert(KeyBinding::new(KeyCode::Char('x')), Action::CycleStatusFilter);
        global.insert(
            KeyBinding::shift(KeyCode::Char('X')),
            Action::CycleStatusFilterBack,
        );
        global.insert(KeyBinding::new(KeyCode::Char('m')), Action::ToggleOnlyMatched);
        global.insert(KeyBinding::new(KeyCode::Char('i')), Action::FocusInclude);
        global.insert(KeyBinding::new(KeyCode::Char('e')), Action::FocusExclude);
        global.insert(KeyBinding::new(KeyCode::Char('s')), Action::LoadSample);
        global.insert(KeyBinding::new(KeyCode::Char('c')), Action::ClearAll);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::FocusOutput);
        bindings.insert(KeyContext::Global, global);

        // Output pane bindings - less-like navigation
        let mut output = HashMap::new();
        output.insert(KeyBinding::new(KeyCode::Char('j')), Action::ScrollDown(1));
        output.insert(KeyBinding::new(KeyCode::Down), Action::ScrollDown(1));
        output.insert(KeyBinding::new(KeyCode::Char('k')), Action::ScrollUp(1));
        output.insert(KeyBinding::new(KeyCode::Up), Action::ScrollUp(1));
        output.insert(KeyBinding::ctrl(KeyCode::Char('f')), Action::PageDown);
        output.insert(KeyBinding::ctrl(KeyCode::Char('b')), Action::PageUp);
        output.insert(KeyBinding::new(KeyCode::PageDown), Action::PageDown);
        output.insert(KeyBinding::new(KeyCode::PageUp), Action::PageUp);
        output.insert(KeyBinding::new(KeyCode::Char('g')), Action::ScrollToTop);
        output.insert(KeyBinding::shift(KeyCode::Char('G')), Action::ScrollToBottom);
        output.insert(KeyBinding::new(KeyCode::Home), Action::ScrollToTop);
        output.insert(KeyBinding::new(KeyCode::End), Action::ScrollToBottom);
        bindings.insert(KeyContext::Output, output);

        // Keyword input bindings (include/exclude field active)
        let mut input = HashMap::new();
        input.insert(KeyBinding::new(KeyCode::Enter), Action::FocusOutput);
        input.insert(KeyBinding::new(KeyCode::Esc), Action::FocusOutput);
        input.insert(KeyBinding::new(KeyCode::Backspace), Action::InputBackspace);
        input.insert(KeyBinding::ctrl(KeyCode::Char('u')), Action::InputClear);
        input.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyContext::KeywordInput, input);

        Self { bindings }
    }

    /// Look up action for key event in given context, falling back to
    /// global bindings
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        if let Some(context_bindings) = self.bindings.get(&context) {
            if let Some(action) = context_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .cloned()
    }

    /// Handle key event while a keyword field has focus. Regular
    /// characters become input; global bindings do NOT apply.
    pub fn get_keyword_input_action(&self, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        if let Some(input_bindings) = self.bindings.get(&KeyContext::KeywordInput) {
            if let Some(action) = input_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        if let KeyCode::Char(c) = key.code {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                return Some(Action::InputChar(c));
            }
        }

        None
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

//! Terminal UI for logsift
//!
//! This crate owns everything outside the formatting core: application
//! state and actions, keybindings, the event loop plumbing, theming, the
//! formatter screen, sample data, and the persisted display preference.

pub mod app;
pub mod config;
pub mod sample;
pub mod tui;
pub mod ui;

pub use app::{Action, AppState, Focus};
pub use config::{KeyBinding, KeyBindings, KeyContext, PrefStore};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{HelpOverlay, StatusBar};
pub use ui::screens::FormatterScreen;
pub use ui::{Layout, Theme};

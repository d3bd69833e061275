use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use logsift_tui::{
    Action, AppState, Event, EventHandler, Focus, FormatterScreen, HelpOverlay, KeyBindings,
    KeyContext, PrefStore, Theme, Tui,
};
use logsift_types::{LogFormat, StatusFilter};

/// logsift - a terminal UI for formatting, filtering, and highlighting
/// log lines
#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log file to load (starts with an empty buffer if omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log shape to parse lines against
    #[arg(long, value_enum, default_value_t = FormatArg::AccessLog)]
    format: FormatArg,

    /// Status class to filter on
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    status: StatusArg,

    /// Whitespace-separated keywords a line must contain (all of them)
    #[arg(long)]
    include: Option<String>,

    /// Whitespace-separated keywords that exclude a line (any of them)
    #[arg(long)]
    exclude: Option<String>,

    /// Drop non-matching lines instead of dimming them
    #[arg(long)]
    only_matched: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    AccessLog,
    JsonLines,
    Plain,
}

impl From<FormatArg> for LogFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::AccessLog => Self::AccessLog,
            FormatArg::JsonLines => Self::JsonLines,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusArg {
    All,
    #[value(name = "2xx")]
    Class2xx,
    #[value(name = "3xx")]
    Class3xx,
    #[value(name = "4xx")]
    Class4xx,
    #[value(name = "5xx")]
    Class5xx,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => Self::All,
            StatusArg::Class2xx => Self::Class2xx,
            StatusArg::Class3xx => Self::Class3xx,
            StatusArg::Class4xx => Self::Class4xx,
            StatusArg::Class5xx => Self::Class5xx,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debugging; the TUI owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = run_app(args).await;
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    result
}

async fn run_app(args: Args) -> Result<()> {
    let prefs = PrefStore::open();

    let mut state = AppState::new();
    state.dark_mode = prefs.dark_mode();
    state.format = args.format.into();
    state.status_filter = args.status.into();
    state.include_input = args.include.unwrap_or_default();
    state.exclude_input = args.exclude.unwrap_or_default();
    state.only_matched = args.only_matched;

    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        state.set_input(text, name);
    } else {
        state.reformat();
    }

    let mut tui = Tui::new()?;
    let mut events = EventHandler::new(Duration::from_millis(100));
    let keybindings = KeyBindings::new();

    while !state.should_quit {
        tui.draw(|frame| {
            FormatterScreen::render(frame, &mut state);
            if state.help_visible {
                HelpOverlay::render(frame, Theme::new(state.dark_mode));
            }
        })?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            Event::Key(key) => {
                let action = match state.focus {
                    // A focused keyword field captures characters; only
                    // its own bindings apply
                    Focus::Include | Focus::Exclude => {
                        keybindings.get_keyword_input_action(&key)
                    }
                    Focus::Output => keybindings.get_action(KeyContext::Output, &key),
                };

                if let Some(action) = action {
                    let was_dark = state.dark_mode;
                    state.handle(&action);
                    if action == Action::ToggleDarkMode && state.dark_mode != was_dark {
                        prefs.set_dark_mode(state.dark_mode);
                    }
                }
            }
            Event::Tick | Event::Resize(_, _) => {}
            Event::Error(e) => tracing::warn!("event error: {e}"),
        }
    }

    events.shutdown();
    tui.restore()?;
    Ok(())
}

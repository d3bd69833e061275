use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "logsift";
const PREFS_FILE: &str = "prefs.toml";

/// On-disk preference document. The dark-mode value is the string "1" or
/// "0" under its namespaced key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(rename = "dark-mode", skip_serializing_if = "Option::is_none")]
    dark_mode: Option<String>,
}

/// Store for the single persisted display preference.
///
/// Storage being unavailable is never an error: a missing or unreadable
/// file yields defaults, and failed writes are ignored.
pub struct PrefStore {
    path: Option<PathBuf>,
    prefs: RwLock<Prefs>,
}

impl PrefStore {
    /// Open the store at the default user config location
    pub fn open() -> Self {
        Self::at(dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILE)))
    }

    /// Open the store backed by a specific file, or no file at all
    pub fn at(path: Option<PathBuf>) -> Self {
        let prefs = path
            .as_deref()
            .and_then(|path| {
                let contents = std::fs::read_to_string(path).ok()?;
                toml::from_str(&contents).ok()
            })
            .unwrap_or_default();

        Self {
            path,
            prefs: RwLock::new(prefs),
        }
    }

    /// Whether dark mode was persisted as on
    pub fn dark_mode(&self) -> bool {
        self.prefs.read().dark_mode.as_deref() == Some("1")
    }

    /// Persist the dark-mode flag, best effort
    pub fn set_dark_mode(&self, on: bool) {
        self.prefs.write().dark_mode = Some(if on { "1" } else { "0" }.to_string());
        self.save();
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let Ok(contents) = toml::to_string(&*self.prefs.read()) else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(path, contents) {
            tracing::debug!("could not persist preferences to {path:?}: {e}");
        }
    }
}

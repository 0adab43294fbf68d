//! User configuration.
//!
//! The tables themselves are compiled in; the user file only tweaks the
//! handful of values that differ between machines.  It is loaded from
//! `$XDG_CONFIG_HOME/tilerc/config.json` or the path passed with
//! `--config <path>`.
//!
//! # Example
//!
//! ```json
//! {
//!   "modifier": "mod4",
//!   "terminal": "kitty",
//!   "using_spacer": true,
//!   "wallpaper": { "path": "~/Pictures/wall.jpg", "mode": "fill" },
//!   "autostart": "~/.config/tilerc/autostart.sh",
//!   "keyboards": {
//!     "configured": ["us intl", "br"],
//!     "display_map": { "us intl": "us", "br": "br" }
//!   }
//! }
//! ```

use crate::bar::WallpaperMode;
use crate::bindings::Modifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all fields
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Modifier every binding is built on.
    pub modifier: Modifier,
    /// Command line launched by `mod+Return`.
    pub terminal: String,
    /// Use stretchable spacers in the bar; dots otherwise.
    pub using_spacer: bool,
    /// Wallpaper for every screen.  `null` leaves the background alone.
    pub wallpaper: Option<WallpaperConfig>,
    /// Script run once when the window manager first starts.  Defaults to
    /// `autostart.sh` in the config directory.
    pub autostart: String,
    /// Keyboard layouts cycled by `mod+space`.
    pub keyboards: KeyboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modifier: Modifier::Mod4,
            terminal: "kitty".into(),
            using_spacer: true,
            wallpaper: Some(WallpaperConfig::default()),
            autostart: config_dir().join("autostart.sh").display().to_string(),
            keyboards: KeyboardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperConfig {
    /// Image path; a leading `~/` is expanded to `$HOME`.
    pub path: String,
    pub mode: WallpaperMode,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            path: "~/Imagens/jorge-jacinto-azeroth-journey-ironforge.jpg".into(),
            mode: WallpaperMode::Fill,
        }
    }
}

/// Keyboard layouts and the short labels the bar shows for them.
///
/// Omitting `keyboards` entirely selects the compiled-in layouts and labels.
/// Inside the section, a missing `configured` falls back to the compiled-in
/// layouts, while a missing `display_map` means no labels: the compiled-in
/// labels only describe the compiled-in layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    #[serde(default = "default_keyboards")]
    pub configured: Vec<String>,
    #[serde(default)]
    pub display_map: BTreeMap<String, String>,
}

fn default_keyboards() -> Vec<String> {
    vec!["us intl".into(), "br".into()]
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            configured: default_keyboards(),
            display_map: BTreeMap::from([
                ("us intl".into(), "us".into()),
                ("br".into(), "br".into()),
            ]),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no binding table can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.trim().is_empty() {
            return Err(ConfigError("terminal must not be empty".into()));
        }
        if self.keyboards.configured.is_empty() {
            return Err(ConfigError("at least one keyboard layout is required".into()));
        }
        if let Some(unknown) = self
            .keyboards
            .display_map
            .keys()
            .find(|k| !self.keyboards.configured.contains(*k))
        {
            return Err(ConfigError(format!(
                "display_map entry {:?} is not a configured keyboard",
                unknown
            )));
        }
        Ok(())
    }
}

/// Error from loading, parsing or validating a configuration.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Expand a leading `~/` to `$HOME`.  Other paths are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/tilerc`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("tilerc")
}

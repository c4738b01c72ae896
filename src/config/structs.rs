//! Configuration struct definitions.

use serde::Deserialize;

/// Gate and display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level, as a name or an integer.
    pub level: String,
    /// Suppress level-gated output.
    pub quiet: bool,
    /// Suppress raw console passthrough.
    pub clean: bool,
    /// Wrap console lines in ANSI colors.
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            quiet: false,
            clean: false,
            color: false,
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Open the file when the logger is built.
    pub enabled: bool,
    /// File name; relative names resolve next to the executable.
    pub path: String,
    /// `sync` or `queued`.
    pub mode: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "tintlog.log".to_string(),
            mode: "sync".to_string(),
        }
    }
}

/// A caller-defined level declared in config.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    /// Numeric severity.
    pub id: i32,
    /// Template; defaults to `"[<name>] %s"`.
    pub format: Option<String>,
    /// Palette name.
    pub color: Option<String>,
}

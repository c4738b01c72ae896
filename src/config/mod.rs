//! TOML configuration: schema, loading, and the default location.
//!
//! ```toml
//! [general]
//! level = "info"
//! color = true
//!
//! [file]
//! enabled = true
//! path = "~/logs/app.log"
//! mode = "queued"
//!
//! [levels.trace]
//! id = 5
//! format = "[trace] %s {{suffix}}"
//! color = "blue"
//!
//! [formats]
//! warn = "[!] %s"
//!
//! [colors]
//! info = "green"
//! ```
//!
//! Keys of `[formats]` and `[colors]` are level names (built-in or declared
//! under `[levels]`) or integers.

mod structs;

pub use structs::{FileConfig, GeneralConfig, LevelConfig};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config; every section has defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    /// Custom levels keyed by display name.
    pub levels: BTreeMap<String, LevelConfig>,
    /// Per-level template overrides.
    pub formats: BTreeMap<String, String>,
    /// Per-level palette overrides.
    pub colors: BTreeMap<String, String>,
}

impl Config {
    /// Loads `<config dir>/tintlog/tintlog.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or it is not valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses config text.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "tintlog")
            .map(|dirs| dirs.config_dir().join("tintlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}

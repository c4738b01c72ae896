//! Severity levels that gate which messages reach the sinks.

mod registry;

pub use registry::{LevelOptions, LevelRegistry};

use std::fmt;
use std::str::FromStr;

/// Numeric severity. Callers may define their own ids between or beyond the
/// built-ins; ordering is purely by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i32);

impl Level {
    /// Development-time diagnostics.
    pub const DEBUG: Self = Self(10);
    /// Non-fatal anomalies.
    pub const WARN: Self = Self(20);
    /// Normal operational milestones.
    pub const INFO: Self = Self(30);
    /// Failures that prevent an operation from completing.
    pub const ERROR: Self = Self(40);
    /// Results the user explicitly asked to see.
    pub const IMPORTANT: Self = Self(50);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Name of a built-in level, `None` for anything a caller registered.
    #[must_use]
    pub const fn builtin_name(self) -> Option<&'static str> {
        match self.0 {
            10 => Some("debug"),
            20 => Some("warn"),
            30 => Some("info"),
            40 => Some("error"),
            50 => Some("important"),
            _ => None,
        }
    }

    /// Built-ins in ascending order.
    #[must_use]
    pub const fn builtins() -> [Self; 5] {
        [
            Self::DEBUG,
            Self::WARN,
            Self::INFO,
            Self::ERROR,
            Self::IMPORTANT,
        ]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::WARN
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Built-ins print their name; custom ids print as decimal because the
/// display name of a custom level lives in a registry, not in the value.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "debug" => Ok(Self::DEBUG),
            "warn" | "warning" => Ok(Self::WARN),
            "info" => Ok(Self::INFO),
            "error" | "err" => Ok(Self::ERROR),
            "important" => Ok(Self::IMPORTANT),
            other => other
                .parse::<i32>()
                .map(Self)
                .map_err(|_| ParseLevelError(s.to_string())),
        }
    }
}

//! Stepwise startup configuration. Everything a setter can do, chained, with
//! the log file opened by `build` when a path was given.

use super::Logger;
use crate::fmt::{Decorator, Paint};
use crate::level::{Level, LevelOptions};
use crate::output::FileMode;
use std::io::Write;

/// Setters applied in order; the log file is opened last so every other
/// option is in place before the first line can be written.
#[must_use]
pub struct LoggerBuilder {
    pub(super) logger: Logger,
    open_file: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Same defaults as [`Logger::default`].
    pub fn new() -> Self {
        Self {
            logger: Logger::default(),
            open_file: false,
        }
    }

    /// Threshold below which lines are dropped. Defaults to `WARN`.
    pub const fn level(mut self, level: Level) -> Self {
        self.logger.set_level(level);
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.logger.set_quiet(quiet);
        self
    }

    pub const fn clean(mut self, clean: bool) -> Self {
        self.logger.set_clean(clean);
        self
    }

    /// Colors are off by default so redirected output stays plain.
    pub const fn color(mut self, color: bool) -> Self {
        self.logger.set_color(color);
        self
    }

    /// Tests and embedders capture console output instead of stdout.
    pub fn output(mut self, writer: impl Write + Send + 'static) -> Self {
        self.logger.set_output(writer);
        self
    }

    /// Log file to open on `build`; relative names resolve next to the executable.
    pub fn file(mut self, name: &str) -> Self {
        self.logger.set_file(name);
        self.open_file = true;
        self
    }

    /// Hot paths can hand lines to a worker instead of syncing per line.
    pub const fn file_mode(mut self, mode: FileMode) -> Self {
        self.logger.set_file_mode(mode);
        self
    }

    /// Per-logger template that wins over the registry's.
    pub fn format(mut self, level: Level, template: &str) -> Self {
        self.logger.set_format(level, template);
        self
    }

    /// Per-logger painter that wins over the registry's.
    pub fn color_fn(mut self, level: Level, paint: impl Paint + 'static) -> Self {
        self.logger.set_color_fn(level, paint);
        self
    }

    /// Request ids or a frozen clock in place of the timestamp.
    pub fn suffix(mut self, suffix: impl Decorator + 'static) -> Self {
        self.logger.set_suffix(suffix);
        self
    }

    pub fn prefix(mut self, prefix: impl Decorator + 'static) -> Self {
        self.logger.set_prefix(prefix);
        self
    }

    /// Adds a level between or beyond the built-ins.
    pub fn register_level(
        mut self,
        level: Level,
        name: impl Into<String>,
        options: LevelOptions,
    ) -> Self {
        self.logger.register_level(level, name, options);
        self
    }

    /// Open failures are reported on the console and leave the logger console-only.
    #[must_use]
    pub fn build(mut self) -> Logger {
        if self.open_file {
            self.logger.init();
        }
        self.logger
    }
}

//! Logger construction from a parsed [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::fmt::Ansi;
use crate::level::{Level, LevelOptions, LevelRegistry};
use crate::output::FileMode;

impl Logger {
    /// Builds a logger from the default config file (defaults when absent).
    ///
    /// # Errors
    /// Config loading errors, plus everything [`Logger::from_config`] rejects.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        Self::from_config(&Config::load()?)
    }

    /// Custom levels are registered first so `[formats]`, `[colors]` and
    /// `general.level` can refer to them by name. Opens the file when
    /// `file.enabled` is set.
    ///
    /// # Errors
    /// An unknown level name, color name or file mode.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let mut builder = LoggerBuilder::new()
            .quiet(config.general.quiet)
            .clean(config.general.clean)
            .color(config.general.color);

        for (name, level) in &config.levels {
            let mut options = LevelOptions::new();
            if let Some(format) = &level.format {
                options = options.format(format.as_str());
            }
            if let Some(color) = &level.color {
                options = options.color(parse_color(color)?);
            }
            builder = builder.register_level(Level(level.id), name.as_str(), options);
        }

        let threshold = parse_level(builder.logger.registry(), &config.general.level)?;
        builder = builder.level(threshold);

        for (key, template) in &config.formats {
            let level = parse_level(builder.logger.registry(), key)?;
            builder = builder.format(level, template);
        }
        for (key, color) in &config.colors {
            let level = parse_level(builder.logger.registry(), key)?;
            builder = builder.color_fn(level, parse_color(color)?);
        }

        if config.file.enabled {
            let mode: FileMode = config
                .file
                .mode
                .parse()
                .map_err(|_| crate::Error::InvalidFileMode(config.file.mode.clone()))?;
            builder = builder.file_mode(mode).file(&config.file.path);
        }

        Ok(builder.build())
    }
}

fn parse_level(registry: &LevelRegistry, name: &str) -> Result<Level, crate::Error> {
    if let Some(level) = registry.find(name.trim()) {
        return Ok(level);
    }
    Ok(name.parse::<Level>()?)
}

fn parse_color(name: &str) -> Result<Ansi, crate::Error> {
    Ansi::from_name(name).ok_or_else(|| crate::Error::UnknownColor(name.to_string()))
}

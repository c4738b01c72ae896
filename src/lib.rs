//! `tintlog` - leveled, colorized logging with per-level templates.
//!
//! A log call passes a quiet/threshold gate, is rendered through its level's
//! template (`%s` for the message, `{{suffix}}` / `{{prefix}}` for decorator
//! output), optionally wrapped in ANSI color for the console, and appended as
//! plain text to the log file when one is attached.
//!
//! # Example
//!
//! ```
//! use tintlog::{Level, LevelOptions, Logger, Ansi};
//!
//! let mut logger = Logger::builder()
//!     .level(Level::DEBUG)
//!     .color(true)
//!     .build();
//!
//! logger.register_level(Level(100), "trace", LevelOptions::new().color(Ansi::BLUE));
//!
//! logger.info("service started");
//! logger.warn("cache miss ratio above 50%");
//! logger.log(Level(100), "custom level");
//! tintlog::infof!(logger, "{} workers ready", 4);
//! logger.console("progress: 10/10\n");
//! logger.close(false);
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use fmt::{Ansi, Decorator, FormatTemplate, Identity, Paint};
pub use level::{Level, LevelOptions, LevelRegistry};
pub use logger::{Logger, LoggerBuilder, State};
pub use output::{FileMode, FileSink, SinkError};

//! Sinks a rendered line can land in: the console writer and the optional log file.

mod console;
mod file;

pub use console::Console;
pub use file::{DRAIN_TIMEOUT, FileMode, FileSink, QUEUE_CAPACITY, resolve_path};

use std::fmt;

/// Why a sink refused or lost a line. Never surfaces from an emission call;
/// the logger turns it into a console warning.
#[derive(Debug)]
pub enum SinkError {
    /// The sink was closed before this call.
    Closed,
    /// The background writer did not drain within [`DRAIN_TIMEOUT`].
    DrainTimeout,
    /// Underlying file I/O failed.
    Io(std::io::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "log file is closed"),
            Self::DrainTimeout => write!(
                f,
                "log writer did not drain within {}ms",
                DRAIN_TIMEOUT.as_millis()
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Closed | Self::DrainTimeout => None,
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

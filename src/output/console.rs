//! Console sink. Lines are written whole under one lock so concurrent callers
//! never interleave inside a line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Shared console writer; one `write_all` plus flush per line.
pub struct Console {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Any `Write` can stand in for stdout: a buffer in tests, stderr, a socket.
    #[must_use]
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Writes `s` as-is and flushes.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn write_str(&self, s: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(s.as_bytes())?;
        writer.flush()
    }

    /// Formats straight into the writer without an intermediate `String`.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_fmt(args)?;
        writer.flush()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

//! The façade: configuration, the quiet/threshold gate, rendering and fan-out
//! to the console writer and the optional log file.
//!
//! Setters take `&mut self`, so configuration has to finish before the logger is
//! shared across threads. Emission, `console` and `close` only need `&self`.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::{Decorator, FormatTemplate, Paint, format_line};
use crate::level::{Level, LevelOptions, LevelRegistry};
use crate::output::{Console, FileMode, FileSink, SinkError, resolve_path};
use chrono::Local;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Timestamp layout of the default suffix decorator.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M.%S";

/// Coarse file lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Console only; no file attached yet.
    Uninitialized,
    /// A file sink is attached and accepting lines.
    Initialized,
    /// `close` ran. Terminal.
    Closed,
}

/// Leveled logger writing colored lines to a console and plain lines to an optional file.
pub struct Logger {
    registry: LevelRegistry,
    level: Level,
    quiet: bool,
    clean: bool,
    color: bool,
    console: Console,
    file_name: Option<PathBuf>,
    file_mode: FileMode,
    file: Option<FileSink>,
    formats: HashMap<Level, FormatTemplate>,
    colors: HashMap<Level, Arc<dyn Paint>>,
    suffix: Arc<dyn Decorator>,
    prefix: Arc<dyn Decorator>,
    closed: AtomicBool,
    closed_reported: AtomicBool,
    write_failure_reported: AtomicBool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

impl Logger {
    /// Console-only logger on stdout with the built-in levels, colors off.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            registry: LevelRegistry::new(),
            level,
            quiet: false,
            clean: false,
            color: false,
            console: Console::stdout(),
            file_name: None,
            file_mode: FileMode::default(),
            file: None,
            formats: HashMap::new(),
            colors: HashMap::new(),
            suffix: Arc::new(default_suffix),
            prefix: Arc::new(String::new),
            closed: AtomicBool::new(false),
            closed_reported: AtomicBool::new(false),
            write_failure_reported: AtomicBool::new(false),
        }
    }

    /// Chained setup that opens the log file as its last step.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Silences every leveled line; `console` output is unaffected.
    pub const fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Silences `console`/`consolef` only, for scripts that want bare log lines.
    pub const fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    /// Piped output and log collectors choke on ANSI escapes, so color is opt-in.
    pub const fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Lines below this threshold are dropped before rendering.
    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Replaces the console writer (stdout by default).
    pub fn set_output(&mut self, writer: impl Write + Send + 'static) {
        self.console = Console::new(writer);
    }

    /// Overrides one level's template for this logger only.
    pub fn set_format(&mut self, level: Level, template: &str) {
        self.formats.insert(level, FormatTemplate::parse(template));
    }

    /// Replaces the whole override map. Levels missing from it fall back to the registry.
    pub fn set_formats<I, S>(&mut self, formats: I)
    where
        I: IntoIterator<Item = (Level, S)>,
        S: AsRef<str>,
    {
        self.formats = formats
            .into_iter()
            .map(|(level, t)| (level, FormatTemplate::parse(t.as_ref())))
            .collect();
    }

    /// Overrides one level's painter for this logger only.
    pub fn set_color_fn(&mut self, level: Level, paint: impl Paint + 'static) {
        self.colors.insert(level, Arc::new(paint));
    }

    /// Replaces the whole color override map.
    pub fn set_colors(&mut self, colors: HashMap<Level, Arc<dyn Paint>>) {
        self.colors = colors;
    }

    /// Records the log file location; see [`resolve_path`]. Takes effect on `init`.
    pub fn set_file(&mut self, name: &str) {
        self.file_name = Some(resolve_path(name));
    }

    /// Picks the write discipline used by the next `init`.
    pub const fn set_file_mode(&mut self, mode: FileMode) {
        self.file_mode = mode;
    }

    /// Supplies the text for `{{suffix}}`; defaults to `", "` plus a local timestamp.
    pub fn set_suffix(&mut self, suffix: impl Decorator + 'static) {
        self.suffix = Arc::new(suffix);
    }

    /// Supplies the text for `{{prefix}}`; defaults to an empty string.
    pub fn set_prefix(&mut self, prefix: impl Decorator + 'static) {
        self.prefix = Arc::new(prefix);
    }

    /// Adds or replaces a level in this logger's registry.
    pub fn register_level(&mut self, level: Level, name: impl Into<String>, options: LevelOptions) {
        self.registry.register(level, name, options);
    }

    /// Current threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.clean
    }

    #[must_use]
    pub const fn is_color(&self) -> bool {
        self.color
    }

    /// Level names, templates and colors this logger resolves against.
    #[must_use]
    pub const fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Resolved path of the configured log file, whether or not it is open.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Derived from the closed flag and whether a sink is attached.
    #[must_use]
    pub fn state(&self) -> State {
        if self.closed.load(Ordering::Acquire) {
            State::Closed
        } else if self.file.is_some() {
            State::Initialized
        } else {
            State::Uninitialized
        }
    }

    /// Whether a line at `level` would pass the gate.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        !self.quiet && level >= self.level
    }

    /// Opens the configured log file for appending. Only the first successful
    /// call attaches a sink; on failure the logger stays console-only.
    pub fn init(&mut self) {
        match self.state() {
            State::Initialized => {
                self.report("log file already initialized");
                return;
            }
            State::Closed => {
                self.report("logger is closed, not reopening log file");
                return;
            }
            State::Uninitialized => {}
        }

        let Some(path) = self.file_name.clone() else {
            self.report("no log file configured");
            return;
        };

        match FileSink::open(&path, self.file_mode) {
            Ok(sink) => self.file = Some(sink),
            Err(e) => self.report(&format!(
                "cannot create logfile {}, err: {e}",
                path.display()
            )),
        }
    }

    /// `set_file` followed by `init`. The path is left alone once a file was attached.
    pub fn init_file(&mut self, name: &str) {
        if self.state() == State::Uninitialized {
            self.set_file(name);
        }
        self.init();
    }

    /// Flushes and releases the log file, deleting it when `remove` is set.
    /// Later calls do nothing. A queued writer that misses the drain deadline
    /// keeps its file: it may still be writing to it.
    pub fn close(&self, remove: bool) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let mut removable = true;
        if let Some(sink) = &self.file {
            match sink.close() {
                Ok(()) | Err(SinkError::Closed) => {}
                Err(e @ SinkError::DrainTimeout) => {
                    removable = false;
                    self.report(&format!("closing log file failed: {e}"));
                }
                Err(e @ SinkError::Io(_)) => {
                    if !self.write_failure_reported.swap(true, Ordering::AcqRel) {
                        self.report(&format!("closing log file failed: {e}"));
                    }
                }
            }
        }

        if remove
            && removable
            && let Some(path) = &self.file_name
            && let Err(e) = fs::remove_file(path)
        {
            self.report(&format!("removing {} failed: {e}", path.display()));
        }
    }

    /// The template in effect for `level`: instance override, then registry.
    #[must_use]
    pub fn template(&self, level: Level) -> Cow<'_, FormatTemplate> {
        self.formats
            .get(&level)
            .map_or_else(|| self.registry.resolve_template(level), Cow::Borrowed)
    }

    /// Plain line for `level`, newline-terminated, decorators applied.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        format_line(
            &self.template(level),
            message,
            self.suffix.as_ref(),
            self.prefix.as_ref(),
        )
    }

    /// Wraps `line` in the level's painter when color is on; otherwise returns it unchanged.
    #[must_use]
    pub fn colorize(&self, level: Level, line: &str) -> String {
        if !self.color {
            return line.to_string();
        }
        match self.colors.get(&level) {
            Some(paint) => paint.paint(line),
            None => self.registry.resolve_color(level).paint(line),
        }
    }

    fn emit(&self, level: Level, message: &str, target: Option<&mut dyn Write>) {
        if !self.enabled(level) {
            return;
        }

        let line = self.render(level, message);
        let shown = self.colorize(level, &line);
        match target {
            Some(writer) => {
                let _ = writer.write_all(shown.as_bytes()).and_then(|()| writer.flush());
            }
            None => {
                let _ = self.console.write_str(&shown);
            }
        }

        self.write_file(&line);
    }

    /// File output always gets the uncolored line.
    fn write_file(&self, line: &str) {
        let Some(sink) = &self.file else {
            if self.closed.load(Ordering::Acquire) {
                self.report_closed();
            }
            return;
        };

        match sink.write_line(line) {
            Ok(()) => {}
            Err(SinkError::Closed) => self.report_closed(),
            Err(e) => {
                if !self.write_failure_reported.swap(true, Ordering::AcqRel) {
                    self.report(&format!("writing log file failed: {e}"));
                }
            }
        }
    }

    fn report_closed(&self) {
        if self.file_name.is_some() && !self.closed_reported.swap(true, Ordering::AcqRel) {
            self.report("log file is closed, logging to console only");
        }
    }

    /// The logger's own warnings: gated like any warn line, console only, so a
    /// broken file sink cannot recurse into itself.
    fn report(&self, message: &str) {
        if !self.enabled(Level::WARN) {
            return;
        }
        let line = self.render(Level::WARN, message);
        let _ = self.console.write_str(&self.colorize(Level::WARN, &line));
    }

    /// Ungated output for banners and progress text; suppressed only by `clean`.
    pub fn console(&self, s: &str) {
        if !self.clean {
            let _ = self.console.write_str(s);
        }
    }

    /// Formatted [`console`](Self::console).
    pub fn consolef(&self, args: fmt::Arguments<'_>) {
        if !self.clean {
            let _ = self.console.write_fmt(args);
        }
    }

    /// Emits `message` at any level, registered or not.
    pub fn log(&self, level: Level, message: &str) {
        self.emit(level, message, None);
    }

    /// Formats only when the level passes the gate.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &args.to_string(), None);
        }
    }

    /// Like [`log`](Self::log) but the console rendering goes to `writer` for
    /// this call only. The file sink still receives the line.
    pub fn log_to(&self, writer: &mut dyn Write, level: Level, message: &str) {
        self.emit(level, message, Some(writer));
    }

    pub fn logf_to(&self, writer: &mut dyn Write, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &args.to_string(), Some(writer));
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::DEBUG, args);
    }

    pub fn debug_to(&self, writer: &mut dyn Write, message: &str) {
        self.log_to(writer, Level::DEBUG, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::WARN, args);
    }

    pub fn warn_to(&self, writer: &mut dyn Write, message: &str) {
        self.log_to(writer, Level::WARN, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::INFO, args);
    }

    pub fn info_to(&self, writer: &mut dyn Write, message: &str) {
        self.log_to(writer, Level::INFO, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::ERROR, args);
    }

    pub fn error_to(&self, writer: &mut dyn Write, message: &str) {
        self.log_to(writer, Level::ERROR, message);
    }

    pub fn important(&self, message: &str) {
        self.log(Level::IMPORTANT, message);
    }

    pub fn importantf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::IMPORTANT, args);
    }

    pub fn important_to(&self, writer: &mut dyn Write, message: &str) {
        self.log_to(writer, Level::IMPORTANT, message);
    }

    /// Flushes the console writer. File lines are synced as they are written,
    /// or drained by `close` in queued mode.
    ///
    /// # Errors
    /// I/O errors from the console writer.
    pub fn flush(&self) -> io::Result<()> {
        self.console.write_str("")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("quiet", &self.quiet)
            .field("clean", &self.clean)
            .field("color", &self.color)
            .field("file", &self.file_name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

fn default_suffix() -> String {
    format!(", {}", Local::now().format(TIMESTAMP_FORMAT))
}

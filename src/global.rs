//! Process-wide default logger and free-function wrappers around it.
//!
//! Created on first use with threshold `WARN`, console only. Configure it once
//! at startup through [`configure`]; emission takes a shared read lock.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

static GLOBAL: OnceLock<RwLock<Logger>> = OnceLock::new();

fn global() -> &'static RwLock<Logger> {
    GLOBAL.get_or_init(|| RwLock::new(Logger::new(Level::WARN)))
}

/// Runs `f` with exclusive access, for setters, `init` and `register_level`.
pub fn configure<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let mut logger = global().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut logger)
}

/// Runs `f` with shared access.
pub fn with<R>(f: impl FnOnce(&Logger) -> R) -> R {
    let logger = global().read().unwrap_or_else(PoisonError::into_inner);
    f(&logger)
}

/// Attaches a log file to the process-wide logger.
pub fn init_file(name: &str) {
    configure(|logger| logger.init_file(name));
}

/// Call before exit so a queued writer drains.
pub fn close(remove: bool) {
    with(|logger| logger.close(remove));
}

pub fn console(s: &str) {
    with(|logger| logger.console(s));
}

pub fn consolef(args: fmt::Arguments<'_>) {
    with(|logger| logger.consolef(args));
}

pub fn log(level: Level, message: &str) {
    with(|logger| logger.log(level, message));
}

pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    with(|logger| logger.logf(level, args));
}

pub fn debug(message: &str) {
    log(Level::DEBUG, message);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    logf(Level::DEBUG, args);
}

pub fn warn(message: &str) {
    log(Level::WARN, message);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    logf(Level::WARN, args);
}

pub fn info(message: &str) {
    log(Level::INFO, message);
}

pub fn infof(args: fmt::Arguments<'_>) {
    logf(Level::INFO, args);
}

pub fn error(message: &str) {
    log(Level::ERROR, message);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    logf(Level::ERROR, args);
}

pub fn important(message: &str) {
    log(Level::IMPORTANT, message);
}

pub fn importantf(args: fmt::Arguments<'_>) {
    logf(Level::IMPORTANT, args);
}

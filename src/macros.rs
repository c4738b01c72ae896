//! `format!`-style front ends for the `*f` methods.
//!
//! ```
//! use tintlog::{Level, Logger, infof, logf};
//!
//! let logger = Logger::new(Level::DEBUG);
//! infof!(logger, "listening on {}:{}", "0.0.0.0", 8080);
//! logf!(logger, Level(35), "custom level {}", 35);
//! ```

/// `logf!(logger, level, "fmt", args..)`
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! importantf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.importantf(::std::format_args!($($arg)+))
    };
}

/// `consolef!(logger, "fmt", args..)`; suppressed by `clean`.
#[macro_export]
macro_rules! consolef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.consolef(::std::format_args!($($arg)+))
    };
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The logger handle returned by the factory.

use crate::cause::Cause;
use crate::key_value::KeyValueMap;
use crate::log_adapter::LogLogger;
use crate::tracing_adapter::TracingLogger;
use crate::Level;
use std::fmt::Arguments;

/// A resolved logger, bound to one framework client for its whole life.
///
/// Every call first checks whether its level is enabled on the client; a
/// disabled call returns without formatting anything.
///
/// # Example
/// ```
/// use pulse_logger::{pulse_info, KeyValueMap, LoggerFactory};
///
/// let factory = LoggerFactory::default();
/// let logger = factory.get_logger("orders").unwrap();
/// pulse_info!(logger, "processed {} orders", 3);
///
/// let mut ctx = KeyValueMap::new();
/// ctx.add("order_id", 42);
/// logger.info_kv("order shipped", &ctx);
/// ```
#[derive(Debug, Clone)]
pub enum PulseLogger {
    Log(LogLogger),
    Tracing(TracingLogger),
}

impl PulseLogger {
    pub fn is_enabled(&self, level: Level) -> bool {
        match self {
            PulseLogger::Log(l) => l.is_enabled(level),
            PulseLogger::Tracing(l) => l.is_enabled(level),
        }
    }

    /// Logs a formatted message at `level`.
    pub fn log(&self, level: Level, args: Arguments<'_>) {
        match self {
            PulseLogger::Log(l) => l.log(level, args),
            PulseLogger::Tracing(l) => l.log(level, args),
        }
    }

    /// Logs `message` at `level` with structured context.
    pub fn log_kv(&self, level: Level, message: &str, context: &KeyValueMap) {
        match self {
            PulseLogger::Log(l) => l.log_kv(level, message, context),
            PulseLogger::Tracing(l) => l.log_kv(level, message, context),
        }
    }

    /// Logs an error together with its cause.
    ///
    /// A [`Cause::Runtime`] appends its text to the message as
    /// `"<message> - RuntimeException occurred: <cause>"`; a
    /// [`Cause::Checked`] leaves the message alone. The cause itself is
    /// always forwarded to the framework.
    pub fn error_with_cause(&self, message: &str, cause: Cause<'_>) {
        match self {
            PulseLogger::Log(l) => l.error_with_cause(message, cause),
            PulseLogger::Tracing(l) => l.error_with_cause(message, cause),
        }
    }

    /// The underlying client's name, which may be absent.
    pub fn name(&self) -> Option<&str> {
        match self {
            PulseLogger::Log(l) => l.name(),
            PulseLogger::Tracing(l) => l.name(),
        }
    }

    pub fn trace(&self, args: Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    pub fn debug(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn trace_kv(&self, message: &str, context: &KeyValueMap) {
        self.log_kv(Level::Trace, message, context);
    }

    pub fn debug_kv(&self, message: &str, context: &KeyValueMap) {
        self.log_kv(Level::Debug, message, context);
    }

    pub fn info_kv(&self, message: &str, context: &KeyValueMap) {
        self.log_kv(Level::Info, message, context);
    }

    pub fn warn_kv(&self, message: &str, context: &KeyValueMap) {
        self.log_kv(Level::Warn, message, context);
    }

    pub fn error_kv(&self, message: &str, context: &KeyValueMap) {
        self.log_kv(Level::Error, message, context);
    }
}

impl From<LogLogger> for PulseLogger {
    fn from(logger: LogLogger) -> Self {
        PulseLogger::Log(logger)
    }
}

impl From<TracingLogger> for PulseLogger {
    fn from(logger: TracingLogger) -> Self {
        PulseLogger::Tracing(logger)
    }
}

/// Convenience macros for logging with format strings.
///
/// The arguments are wrapped in `format_args!`, so nothing is formatted
/// unless the level is enabled.
#[macro_export]
macro_rules! pulse_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! pulse_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! pulse_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! pulse_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! pulse_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::RuntimeFailure;
    use crate::test_support::capturing_dispatch;
    use crate::tracing_adapter::TracingAdapter;

    #[test]
    fn test_level_methods_dispatch() {
        let (dispatch, events) = capturing_dispatch(tracing::Level::TRACE);
        let logger: PulseLogger = TracingAdapter::with_dispatch(dispatch).logger("svc").into();

        crate::pulse_trace!(logger, "t{}", 1);
        crate::pulse_debug!(logger, "d{}", 2);
        crate::pulse_info!(logger, "i{}", 3);
        crate::pulse_warn!(logger, "w{}", 4);
        crate::pulse_error!(logger, "e{}", 5);

        let events = events.lock().unwrap();
        let seen: Vec<(Level, &str)> = events.iter().map(|e| (e.level, e.message.as_str())).collect();
        assert_eq!(
            seen,
            vec![
                (Level::Trace, "t1"),
                (Level::Debug, "d2"),
                (Level::Info, "i3"),
                (Level::Warn, "w4"),
                (Level::Error, "e5"),
            ]
        );
    }

    #[test]
    fn test_structured_methods_dispatch() {
        let (dispatch, events) = capturing_dispatch(tracing::Level::TRACE);
        let logger: PulseLogger = TracingAdapter::with_dispatch(dispatch).logger("svc").into();
        let mut ctx = KeyValueMap::new();
        ctx.add("k", "v");

        logger.trace_kv("a", &ctx);
        logger.debug_kv("b", &ctx);
        logger.info_kv("c", &ctx);
        logger.warn_kv("d", &ctx);
        logger.error_kv("e", &ctx);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| e.field("context") == Some("k=v")));
    }

    #[test]
    fn test_error_with_cause_dispatch() {
        let (dispatch, events) = capturing_dispatch(tracing::Level::ERROR);
        let logger: PulseLogger = TracingAdapter::with_dispatch(dispatch).logger("svc").into();
        let failure = RuntimeFailure::new("boom");
        logger.error_with_cause("failed", Cause::runtime(&failure));
        assert_eq!(
            events.lock().unwrap()[0].message,
            "failed - RuntimeException occurred: boom"
        );
    }

    #[test]
    fn test_name_and_enabled_delegate() {
        let (dispatch, _) = capturing_dispatch(tracing::Level::WARN);
        let logger: PulseLogger = TracingAdapter::with_dispatch(dispatch).logger("named").into();
        assert_eq!(logger.name(), Some("named"));
        assert!(!logger.is_enabled(Level::Info));
        assert!(logger.is_enabled(Level::Error));
    }
}

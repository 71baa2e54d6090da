// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Adapter for the `log` facade.
//!
//! Unstructured calls hand the caller's `fmt::Arguments` to the client
//! untouched; the installed `log::Log` implementation does the formatting.
//! Structured calls attach the context to the record's own key/value source,
//! so nothing outlives the call.

use crate::cause::Cause;
use crate::key_value::KeyValueMap;
use crate::Level;
use log::kv::{Source, Value};
use log::{Log, Metadata, Record};
use std::fmt::{self, Arguments};

/// Target used when a logger has no name.
const DEFAULT_TARGET: &str = "pulse_logger";

/// Key under which an error-with-cause call forwards the cause.
pub const ERROR_KEY: &str = "error";

/// Resolves loggers bound to a `log::Log` client.
#[derive(Clone, Copy, Default)]
pub struct LogAdapter {
    /// `None` means "whatever `log::logger()` returns at lookup time".
    client: Option<&'static dyn Log>,
}

impl LogAdapter {
    /// Creates an adapter bound to the globally installed `log` logger.
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Creates an adapter bound to a specific client.
    pub fn with_client(client: &'static dyn Log) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Resolves a logger named `name`. The client is captured now.
    pub fn logger(&self, name: &str) -> LogLogger {
        LogLogger::new(self.resolve_client(), Some(name.to_string()))
    }

    fn resolve_client(&self) -> &'static dyn Log {
        self.client.unwrap_or_else(log::logger)
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("global_client", &self.client.is_none())
            .finish()
    }
}

/// A logger that emits `log::Record`s.
#[derive(Clone)]
pub struct LogLogger {
    client: &'static dyn Log,
    name: Option<String>,
}

impl LogLogger {
    pub fn new(client: &'static dyn Log, name: Option<String>) -> Self {
        Self { client, name }
    }

    /// The configured name, passed through unchanged.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn target(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    /// Returns `true` if both the global max level and the client accept `level`.
    pub fn is_enabled(&self, level: Level) -> bool {
        let level = log::Level::from(level);
        if level > log::max_level() {
            return false;
        }
        let metadata = Metadata::builder().level(level).target(self.target()).build();
        self.client.enabled(&metadata)
    }

    pub fn log(&self, level: Level, args: Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        self.client.log(
            &Record::builder()
                .args(args)
                .level(level.into())
                .target(self.target())
                .build(),
        );
    }

    pub fn log_kv(&self, level: Level, message: &str, context: &KeyValueMap) {
        if !self.is_enabled(level) {
            return;
        }
        let rendered: Vec<(&str, String)> = context.rendered().collect();
        let pairs: Vec<(&str, &str)> = rendered.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.emit_with_source(level, format_args!("{message}"), &pairs);
    }

    /// Logs at error level with the cause attached under [`ERROR_KEY`] as an
    /// error value, so clients can reach it through
    /// [`Value::to_borrowed_error`](log::kv::Value::to_borrowed_error).
    pub fn error_with_cause(&self, message: &str, cause: Cause<'_>) {
        if !self.is_enabled(Level::Error) {
            return;
        }
        let text = cause.augment(message);
        let pairs = [(ERROR_KEY, Value::from_dyn_error(cause.error()))];
        self.emit_with_source(Level::Error, format_args!("{text}"), &pairs);
    }

    fn emit_with_source(&self, level: Level, args: Arguments<'_>, source: &dyn Source) {
        self.client.log(
            &Record::builder()
                .args(args)
                .level(level.into())
                .target(self.target())
                .key_values(source)
                .build(),
        );
    }
}

impl fmt::Debug for LogLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLogger").field("name", &self.name).finish()
    }
}

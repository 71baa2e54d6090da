// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The closed set of logging-framework adapters.

use crate::log_adapter::LogAdapter;
use crate::logger::PulseLogger;
use crate::tracing_adapter::TracingAdapter;
use crate::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Names the supported frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdapterKind {
    /// The `log` facade.
    #[default]
    Log,
    /// The `tracing` ecosystem.
    Tracing,
}

impl AdapterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AdapterKind::Log => "log",
            AdapterKind::Tracing => "tracing",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdapterKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(AdapterKind::Log),
            "tracing" => Ok(AdapterKind::Tracing),
            other => Err(LoggerError::UnsupportedKind(other.to_string())),
        }
    }
}

/// A framework binding that resolves [`PulseLogger`]s.
#[derive(Debug, Clone)]
pub enum LoggingAdapter {
    Log(LogAdapter),
    Tracing(TracingAdapter),
}

impl LoggingAdapter {
    /// Creates the default adapter for `kind`, bound to the framework's
    /// globally installed client.
    pub fn new(kind: AdapterKind) -> Self {
        match kind {
            AdapterKind::Log => LoggingAdapter::Log(LogAdapter::new()),
            AdapterKind::Tracing => LoggingAdapter::Tracing(TracingAdapter::new()),
        }
    }

    pub fn kind(&self) -> AdapterKind {
        match self {
            LoggingAdapter::Log(_) => AdapterKind::Log,
            LoggingAdapter::Tracing(_) => AdapterKind::Tracing,
        }
    }

    /// Resolves a logger for `name`. Name validation is the factory's job.
    pub fn logger(&self, name: &str) -> PulseLogger {
        match self {
            LoggingAdapter::Log(a) => PulseLogger::Log(a.logger(name)),
            LoggingAdapter::Tracing(a) => PulseLogger::Tracing(a.logger(name)),
        }
    }

    /// Resolves a logger named after the type `T`.
    pub fn logger_for<T: ?Sized>(&self) -> PulseLogger {
        self.logger(std::any::type_name::<T>())
    }
}

impl Default for LoggingAdapter {
    fn default() -> Self {
        Self::new(AdapterKind::default())
    }
}

impl From<LogAdapter> for LoggingAdapter {
    fn from(adapter: LogAdapter) -> Self {
        LoggingAdapter::Log(adapter)
    }
}

impl From<TracingAdapter> for LoggingAdapter {
    fn from(adapter: TracingAdapter) -> Self {
        LoggingAdapter::Tracing(adapter)
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Logger resolution against a swappable active adapter.
//!
//! A [`LoggerFactory`] owns a single adapter slot. Lookups read the slot,
//! swaps replace the `Arc` it holds, so a reader always sees either the old
//! or the new adapter in full. Loggers resolved before a swap keep the
//! client they captured; they are not rebound.
//!
//! Most applications use the process-wide factory through the free
//! functions in this module. It is created on first use with the `log`
//! adapter installed and lives for the rest of the process.

use crate::adapter::{AdapterKind, LoggingAdapter};
use crate::logger::PulseLogger;
use crate::LoggerError;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL: OnceLock<LoggerFactory> = OnceLock::new();

/// Resolves loggers through the currently active [`LoggingAdapter`].
#[derive(Debug)]
pub struct LoggerFactory {
    active: RwLock<Arc<LoggingAdapter>>,
}

impl LoggerFactory {
    /// Creates a factory with `adapter` active.
    pub fn new(adapter: LoggingAdapter) -> Self {
        Self {
            active: RwLock::new(Arc::new(adapter)),
        }
    }

    /// The process-wide factory, initialised with the `log` adapter.
    pub fn global() -> &'static LoggerFactory {
        GLOBAL.get_or_init(|| LoggerFactory::new(LoggingAdapter::new(AdapterKind::Log)))
    }

    /// Resolves a logger by name.
    ///
    /// Fails with [`LoggerError::InvalidArgument`] when `name` is empty or
    /// whitespace-only; the adapter is not consulted in that case.
    pub fn get_logger(&self, name: &str) -> Result<PulseLogger, LoggerError> {
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidArgument(
                "logger name cannot be empty or blank".to_string(),
            ));
        }
        let adapter = self.adapter();
        tracing::trace!(name, kind = %adapter.kind(), "resolving logger");
        Ok(adapter.logger(name))
    }

    /// Resolves a logger scoped to the type `T`.
    pub fn get_logger_for<T: ?Sized>(&self) -> PulseLogger {
        self.adapter().logger_for::<T>()
    }

    /// Replaces the active adapter. Takes effect for every later lookup.
    pub fn set_adapter(&self, adapter: Arc<LoggingAdapter>) {
        let kind = adapter.kind();
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = adapter;
        tracing::debug!(%kind, "logging adapter swapped");
    }

    /// Returns the active adapter.
    pub fn adapter(&self) -> Arc<LoggingAdapter> {
        Arc::clone(&self.active.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Creates an adapter from its kind name (`"log"` or `"tracing"`).
    ///
    /// Any other name fails with [`LoggerError::UnsupportedKind`].
    pub fn create_adapter(kind: &str) -> Result<LoggingAdapter, LoggerError> {
        Ok(LoggingAdapter::new(kind.parse()?))
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(LoggingAdapter::default())
    }
}

/// Resolves a logger by name from the global factory.
pub fn get_logger(name: &str) -> Result<PulseLogger, LoggerError> {
    LoggerFactory::global().get_logger(name)
}

/// Resolves a type-scoped logger from the global factory.
pub fn get_logger_for<T: ?Sized>() -> PulseLogger {
    LoggerFactory::global().get_logger_for::<T>()
}

/// Replaces the global factory's active adapter.
pub fn set_adapter(adapter: Arc<LoggingAdapter>) {
    LoggerFactory::global().set_adapter(adapter);
}

/// Returns the global factory's active adapter.
pub fn adapter() -> Arc<LoggingAdapter> {
    LoggerFactory::global().adapter()
}

/// Creates an adapter from its kind name.
pub fn create_adapter(kind: &str) -> Result<LoggingAdapter, LoggerError> {
    LoggerFactory::create_adapter(kind)
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Adapter for the `tracing` ecosystem.
//!
//! Each logger captures a [`Dispatch`] when it is resolved and emits every
//! event under that dispatcher, with the logger name as the event target for
//! filtering. Messages are formatted here, before the event is built, and
//! recorded as the event message. Structured calls go through the
//! [`ThreadContext`] store and attach its rendered content as a `context`
//! field.

use crate::cause::Cause;
use crate::event::{self, EVENT_TARGET};
use crate::key_value::KeyValueMap;
use crate::thread_context::ThreadContext;
use crate::Level;
use std::fmt::{self, Arguments};
use tracing::Dispatch;

/// Resolves loggers bound to a `tracing` dispatcher.
#[derive(Clone, Default)]
pub struct TracingAdapter {
    /// `None` means "the calling thread's default dispatcher at lookup time".
    dispatch: Option<Dispatch>,
}

impl TracingAdapter {
    /// Creates an adapter bound to the default dispatcher.
    pub fn new() -> Self {
        Self { dispatch: None }
    }

    /// Creates an adapter bound to a specific dispatcher.
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    /// Resolves a logger named `name`. The dispatcher is captured now.
    pub fn logger(&self, name: &str) -> TracingLogger {
        let dispatch = match &self.dispatch {
            Some(d) => d.clone(),
            None => tracing::dispatcher::get_default(Dispatch::clone),
        };
        TracingLogger::new(dispatch, Some(name.to_string()))
    }
}

impl fmt::Debug for TracingAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingAdapter")
            .field("default_dispatch", &self.dispatch.is_none())
            .finish()
    }
}

/// A logger that emits `tracing` events.
#[derive(Clone)]
pub struct TracingLogger {
    dispatch: Dispatch,
    name: Option<String>,
}

impl TracingLogger {
    pub fn new(dispatch: Dispatch, name: Option<String>) -> Self {
        Self { dispatch, name }
    }

    /// The configured name, passed through unchanged.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn target(&self) -> &str {
        self.name.as_deref().unwrap_or(EVENT_TARGET)
    }

    /// Returns `true` if the dispatcher accepts `level` for this logger's name.
    pub fn is_enabled(&self, level: Level) -> bool {
        event::enabled(&self.dispatch, level, self.target())
    }

    pub fn log(&self, level: Level, args: Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        let message = args.to_string();
        event::emit(
            &self.dispatch,
            level,
            self.name(),
            format_args!("{message}"),
            None,
            None,
        );
    }

    pub fn log_kv(&self, level: Level, message: &str, context: &KeyValueMap) {
        if !self.is_enabled(level) {
            return;
        }
        let _guard = ThreadContext::scoped(context);
        let rendered = ThreadContext::render();
        event::emit(
            &self.dispatch,
            level,
            self.name(),
            format_args!("{message}"),
            Some(rendered.as_str()),
            None,
        );
    }

    pub fn error_with_cause(&self, message: &str, cause: Cause<'_>) {
        if !self.is_enabled(Level::Error) {
            return;
        }
        let text = cause.augment(message);
        event::emit(
            &self.dispatch,
            Level::Error,
            self.name(),
            format_args!("{text}"),
            None,
            Some(cause.error()),
        );
    }
}

impl fmt::Debug for TracingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingLogger").field("name", &self.name).finish()
    }
}

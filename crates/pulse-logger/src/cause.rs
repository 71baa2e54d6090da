// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Failure causes passed to [`PulseLogger::error_with_cause`](crate::PulseLogger::error_with_cause).
//!
//! Rust has no checked/unchecked exception split, so the caller classifies
//! the cause explicitly. A [`Cause::Runtime`] is an unexpected failure (a bug,
//! a broken invariant, a caught panic); a [`Cause::Checked`] is an error the
//! caller anticipated. Only runtime causes augment the logged message.

use std::any::Any;
use std::error::Error;
use std::fmt;

/// Separator inserted between the message and a runtime cause's text.
pub const RUNTIME_CAUSE_SEPARATOR: &str = " - RuntimeException occurred: ";

/// The error forwarded alongside an error-level message.
#[derive(Debug, Clone, Copy)]
pub enum Cause<'a> {
    /// Unexpected failure; its text is appended to the message.
    Runtime(&'a (dyn Error + 'static)),
    /// Anticipated failure; the message is logged unchanged.
    Checked(&'a (dyn Error + 'static)),
}

impl<'a> Cause<'a> {
    pub fn runtime(error: &'a (dyn Error + 'static)) -> Self {
        Cause::Runtime(error)
    }

    pub fn checked(error: &'a (dyn Error + 'static)) -> Self {
        Cause::Checked(error)
    }

    /// The wrapped error, regardless of classification.
    pub fn error(&self) -> &'a (dyn Error + 'static) {
        match *self {
            Cause::Runtime(e) | Cause::Checked(e) => e,
        }
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Cause::Runtime(_))
    }

    /// Builds the message actually emitted for this cause.
    pub fn augment(&self, message: &str) -> String {
        match self {
            Cause::Runtime(e) => format!("{message}{RUNTIME_CAUSE_SEPARATOR}{e}"),
            Cause::Checked(_) => message.to_string(),
        }
    }
}

/// A runtime failure recovered from a panic payload.
///
/// # Example
/// ```
/// use pulse_logger::{Cause, RuntimeFailure};
///
/// let payload = std::panic::catch_unwind(|| panic!("index out of range")).unwrap_err();
/// let failure = RuntimeFailure::from_panic(payload.as_ref());
/// assert_eq!(
///     Cause::runtime(&failure).augment("worker crashed"),
///     "worker crashed - RuntimeException occurred: index out of range"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFailure {
    message: String,
}

impl RuntimeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the panic message; non-string payloads yield a fixed text.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RuntimeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for RuntimeFailure {}

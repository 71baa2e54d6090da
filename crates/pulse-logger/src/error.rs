// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the logging facade.

/// Errors raised by logger lookup, adapter selection and subscriber setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A caller-supplied identifier or value was rejected before any side effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested adapter kind is outside the supported set.
    #[error("unsupported logging framework: {0}")]
    UnsupportedKind(String),

    /// A level string could not be parsed.
    #[error("unknown log level '{0}'; expected trace, debug, info, warn or error")]
    UnknownLevel(String),

    /// Configuration could not be read, parsed or serialised.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Installing the global subscriber or log bridge failed.
    #[error("logging initialisation failed: {0}")]
    Init(String),
}

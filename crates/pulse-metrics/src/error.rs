// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for metrics sampling.

/// Errors that can occur when reading host metrics.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to read a sysfs or procfs file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a numeric value from a system file.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },

    /// The expected sysfs/procfs path does not exist on this host.
    #[error("metrics source not available: {path}")]
    NotAvailable { path: String },

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

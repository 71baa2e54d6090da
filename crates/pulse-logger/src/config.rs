// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Logging configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! adapter = "tracing"
//! level = "debug"
//! logger_segments = 36
//! ```

use crate::adapter::AdapterKind;
use crate::layout::DEFAULT_LOGGER_SEGMENTS;
use crate::{Level, LoggerError};
use std::path::Path;

/// Configuration for [`init`](crate::init).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoggingConfig {
    /// Adapter installed into the global factory: `"log"` or `"tracing"`.
    #[serde(default = "default_adapter")]
    pub adapter: String,
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
    /// Right-most logger name segments shown by the layout (`0` = all).
    #[serde(default = "default_logger_segments")]
    pub logger_segments: usize,
}

fn default_adapter() -> String {
    AdapterKind::default().as_str().to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_logger_segments() -> usize {
    DEFAULT_LOGGER_SEGMENTS
}

impl LoggingConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, LoggerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, LoggerError> {
        toml::from_str(toml_str)
            .map_err(|e| LoggerError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, LoggerError> {
        toml::to_string_pretty(self)
            .map_err(|e| LoggerError::ConfigError(format!("TOML serialise error: {e}")))
    }

    pub fn parse_level(&self) -> Result<Level, LoggerError> {
        self.level.parse()
    }

    pub fn adapter_kind(&self) -> Result<AdapterKind, LoggerError> {
        self.adapter.parse()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            adapter: default_adapter(),
            level: default_level(),
            logger_segments: DEFAULT_LOGGER_SEGMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = LoggingConfig::default();
        assert_eq!(c.adapter, "log");
        assert_eq!(c.level, "info");
        assert_eq!(c.logger_segments, 36);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
adapter = "tracing"
level = "debug"
logger_segments = 2
"#;
        let c = LoggingConfig::from_toml(toml).unwrap();
        assert_eq!(c.adapter_kind().unwrap(), AdapterKind::Tracing);
        assert_eq!(c.parse_level().unwrap(), Level::Debug);
        assert_eq!(c.logger_segments, 2);
    }

    #[test]
    fn test_from_toml_uses_defaults() {
        let c = LoggingConfig::from_toml("level = \"warn\"").unwrap();
        assert_eq!(c.adapter, "log");
        assert_eq!(c.parse_level().unwrap(), Level::Warn);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = LoggingConfig {
            adapter: "tracing".into(),
            ..Default::default()
        };
        let back = LoggingConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_invalid_values() {
        let c = LoggingConfig {
            adapter: "log4j".into(),
            level: "loud".into(),
            ..Default::default()
        };
        assert!(matches!(c.adapter_kind(), Err(LoggerError::UnsupportedKind(_))));
        assert!(matches!(c.parse_level(), Err(LoggerError::UnknownLevel(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let err = LoggingConfig::from_toml("adapter = [").unwrap_err();
        assert!(matches!(err, LoggerError::ConfigError(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = LoggingConfig::from_file(Path::new("/nonexistent/pulse.toml")).unwrap_err();
        assert!(matches!(err, LoggerError::ConfigError(_)));
    }
}

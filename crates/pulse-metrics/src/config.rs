// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Metrics configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! sample_interval_ms = 500
//! proc_stat_path = "/proc/stat"
//! meminfo_path = "/proc/meminfo"
//! thermal_zone_path = "/sys/class/thermal/thermal_zone0/temp"
//! ```

use crate::memory::MEMINFO_PATH;
use crate::thermal::THERMAL_ZONE_PATH;
use crate::ticks::PROC_STAT_PATH;
use crate::MetricsError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default delay between the two tick readings of a CPU usage sample.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 500;

/// Configuration for [`MetricsProvider`](crate::MetricsProvider) and
/// [`SystemSource`](crate::SystemSource).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Blocking delay inside `cpu_usage`, in milliseconds.
    pub sample_interval_ms: u64,
    /// `/proc/stat`-formatted file with the aggregate tick counters.
    pub proc_stat_path: PathBuf,
    /// `/proc/meminfo`-formatted file with memory totals.
    pub meminfo_path: PathBuf,
    /// Thermal zone reporting millidegrees Celsius.
    pub thermal_zone_path: PathBuf,
}

impl MetricsConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, MetricsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MetricsError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, MetricsError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| MetricsError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, MetricsError> {
        toml::to_string_pretty(self)
            .map_err(|e| MetricsError::ConfigError(format!("TOML serialise error: {e}")))
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    fn validate(&self) -> Result<(), MetricsError> {
        if self.sample_interval_ms == 0 {
            return Err(MetricsError::ConfigError(
                "sample_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            proc_stat_path: PathBuf::from(PROC_STAT_PATH),
            meminfo_path: PathBuf::from(MEMINFO_PATH),
            thermal_zone_path: PathBuf::from(THERMAL_ZONE_PATH),
        }
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU temperature via `/sys/class/thermal/`.
//!
//! Thermal zones report the temperature in millidegrees Celsius. When no
//! zone is readable, [`SystemSource`](crate::SystemSource) falls back to the
//! sensors enumerated by `sysinfo` and finally to [`NO_SENSOR_CELSIUS`].

use crate::MetricsError;
use std::path::Path;

/// Default sysfs path for the CPU thermal zone.
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Temperature reported when the host exposes no thermal sensor.
pub const NO_SENSOR_CELSIUS: f64 = 0.0;

/// Sensor labels that identify the CPU package among `sysinfo` components.
const CPU_SENSOR_HINTS: [&str; 4] = ["cpu", "package", "core", "tctl"];

/// Reads a thermal zone and converts millidegrees to degrees Celsius.
pub(crate) fn read_zone_celsius(path: &Path) -> Result<f64, MetricsError> {
    let content = read_sysfs_file(path)?;
    let millidegrees: i64 = content.parse::<i64>().map_err(|_| MetricsError::ParseError {
        path: path.display().to_string(),
        detail: format!("expected integer millidegrees, got '{content}'"),
    })?;
    Ok(millidegrees as f64 / 1000.0)
}

/// Picks a CPU temperature from `sysinfo` components.
///
/// Prefers a sensor whose label looks like the CPU package, otherwise the
/// first sensor with a reading.
pub(crate) fn sensor_celsius() -> Option<f64> {
    let components = sysinfo::Components::new_with_refreshed_list();
    let readings: Vec<(String, f32)> = components
        .iter()
        .filter_map(|c| c.temperature().map(|t| (c.label().to_ascii_lowercase(), t)))
        .filter(|(_, t)| t.is_finite())
        .collect();

    readings
        .iter()
        .find(|(label, _)| CPU_SENSOR_HINTS.iter().any(|hint| label.contains(hint)))
        .or_else(|| readings.first())
        .map(|(_, t)| f64::from(*t))
}

/// Reads a sysfs/procfs file and returns its trimmed content.
///
/// Shared by the procfs readers in this crate.
pub(crate) fn read_sysfs_file(path: &Path) -> Result<String, MetricsError> {
    if !path.exists() {
        return Err(MetricsError::NotAvailable {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| MetricsError::ReadError {
            path: path.display().to_string(),
            source: e,
        })
}

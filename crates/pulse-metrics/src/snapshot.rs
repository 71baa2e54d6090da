// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregated point-in-time metrics.

use crate::DiskMetric;
use std::fmt;

/// All provider readings from one sampling call.
///
/// Built fresh by [`MetricsProvider::snapshot`](crate::MetricsProvider::snapshot);
/// nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricsSnapshot {
    /// CPU usage in percent, or `-1.0` if the sample was interrupted.
    pub cpu_usage: f64,
    /// Total physical memory in bytes.
    pub total_memory: u64,
    /// Available physical memory in bytes.
    pub available_memory: u64,
    /// CPU temperature in degrees Celsius (`0.0` without a sensor).
    pub cpu_temperature: f64,
    /// Mounted volumes in source enumeration order.
    pub disks: Vec<DiskMetric>,
}

impl MetricsSnapshot {
    pub fn new(
        cpu_usage: f64,
        total_memory: u64,
        available_memory: u64,
        cpu_temperature: f64,
        disks: Vec<DiskMetric>,
    ) -> Self {
        Self {
            cpu_usage,
            total_memory,
            available_memory,
            cpu_temperature,
            disks,
        }
    }
}

/// ```text
/// CPU Usage: 12.34%, Memory: 4000/10000, Temp: 60.5°C, Disks: [Disk /data: 500/2000 used]
/// ```
impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU Usage: {:.2}%, Memory: {}/{}, Temp: {:.1}°C, Disks: [",
            self.cpu_usage, self.available_memory, self.total_memory, self.cpu_temperature
        )?;
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{disk}")?;
        }
        f.write_str("]")
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The hardware-introspection seam.
//!
//! [`HardwareSource`] is everything [`MetricsProvider`](crate::MetricsProvider)
//! needs from the host. [`SystemSource`] is the Linux implementation: procfs
//! and sysfs for CPU, memory and thermal readings, `sysinfo` for mounted
//! file stores and as a fallback temperature sensor.

use crate::config::MetricsConfig;
use crate::memory::MemoryInfo;
use crate::thermal::{self, NO_SENSOR_CELSIUS};
use crate::ticks::CpuTicks;
use crate::MetricsError;
use std::path::PathBuf;

/// Capacity figures of one mounted volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    pub mount_point: String,
    /// Capacity in bytes.
    pub total_space: u64,
    /// Bytes available to unprivileged callers.
    pub usable_space: u64,
}

impl FileStore {
    pub fn new(mount_point: impl Into<String>, total_space: u64, usable_space: u64) -> Self {
        Self {
            mount_point: mount_point.into(),
            total_space,
            usable_space,
        }
    }
}

/// Host readings consumed by the metrics provider.
///
/// Implementations must be cheap to call; the only intentional delay lives
/// in the provider's CPU sampling.
pub trait HardwareSource: Send + Sync {
    /// Current aggregate CPU tick counters.
    fn cpu_ticks(&self) -> Result<CpuTicks, MetricsError>;

    /// CPU load in `[0.0, 1.0]` between `previous` and now.
    fn cpu_load_between_ticks(&self, previous: &CpuTicks) -> Result<f64, MetricsError> {
        Ok(self.cpu_ticks()?.load_since(previous))
    }

    /// Total physical memory in bytes.
    fn total_memory(&self) -> Result<u64, MetricsError>;

    /// Available physical memory in bytes.
    fn available_memory(&self) -> Result<u64, MetricsError>;

    /// CPU temperature in degrees Celsius, or [`NO_SENSOR_CELSIUS`] when the
    /// host has no readable sensor.
    fn cpu_temperature(&self) -> f64;

    /// Mounted file stores in the order the OS enumerates them.
    fn file_stores(&self) -> Result<Vec<FileStore>, MetricsError>;
}

/// Linux host readings from procfs, sysfs and `sysinfo`.
#[derive(Debug, Clone)]
pub struct SystemSource {
    proc_stat_path: PathBuf,
    meminfo_path: PathBuf,
    thermal_zone_path: PathBuf,
}

impl SystemSource {
    pub fn new() -> Self {
        Self::from_config(&MetricsConfig::default())
    }

    pub fn from_config(config: &MetricsConfig) -> Self {
        Self {
            proc_stat_path: config.proc_stat_path.clone(),
            meminfo_path: config.meminfo_path.clone(),
            thermal_zone_path: config.thermal_zone_path.clone(),
        }
    }

    fn memory(&self) -> Result<MemoryInfo, MetricsError> {
        MemoryInfo::read_from(&self.meminfo_path)
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareSource for SystemSource {
    fn cpu_ticks(&self) -> Result<CpuTicks, MetricsError> {
        CpuTicks::read_from(&self.proc_stat_path)
    }

    fn total_memory(&self) -> Result<u64, MetricsError> {
        Ok(self.memory()?.total_bytes)
    }

    fn available_memory(&self) -> Result<u64, MetricsError> {
        Ok(self.memory()?.available_bytes)
    }

    fn cpu_temperature(&self) -> f64 {
        thermal::read_zone_celsius(&self.thermal_zone_path)
            .ok()
            .or_else(thermal::sensor_celsius)
            .unwrap_or(NO_SENSOR_CELSIUS)
    }

    fn file_stores(&self) -> Result<Vec<FileStore>, MetricsError> {
        let disks = sysinfo::Disks::new_with_refreshed_list();
        Ok(disks
            .list()
            .iter()
            .map(|disk| {
                FileStore::new(
                    disk.mount_point().display().to_string(),
                    disk.total_space(),
                    disk.available_space(),
                )
            })
            .collect())
    }
}

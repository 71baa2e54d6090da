// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pulse-metrics
//!
//! Host metrics as plain values: CPU usage, memory totals, CPU temperature
//! and per-volume disk usage.
//!
//! # Sources
//! - **CPU usage**: delta of the aggregate tick counters in `/proc/stat`
//!   across a fixed, interruptible delay (500 ms by default).
//! - **Memory**: `MemTotal` / `MemAvailable` from `/proc/meminfo`.
//! - **Temperature**: thermal zone 0, then any `sysinfo` sensor, else `0.0`.
//! - **Disks**: every mounted volume reported by `sysinfo`, in OS order.
//!
//! Reads go through the [`HardwareSource`] trait, so tests and non-Linux
//! hosts can plug in their own source.
//!
//! # Example
//! ```no_run
//! use pulse_metrics::MetricsProvider;
//!
//! let mut provider = MetricsProvider::new().expect("failed to read /proc/stat");
//! let snapshot = provider.snapshot().expect("failed to sample metrics");
//! println!("{snapshot}");
//! ```

mod config;
mod disk;
mod error;
mod interrupt;
mod memory;
mod provider;
mod snapshot;
mod source;
mod thermal;
mod ticks;

pub use config::{MetricsConfig, DEFAULT_SAMPLE_INTERVAL_MS};
pub use disk::DiskMetric;
pub use error::MetricsError;
pub use interrupt::{Interrupt, Interrupted};
pub use memory::{MemoryInfo, MEMINFO_PATH};
pub use provider::{MetricsProvider, CPU_USAGE_INTERRUPTED};
pub use snapshot::MetricsSnapshot;
pub use source::{FileStore, HardwareSource, SystemSource};
pub use thermal::{NO_SENSOR_CELSIUS, THERMAL_ZONE_PATH};
pub use ticks::{CpuTicks, PROC_STAT_PATH, TICK_STATES};

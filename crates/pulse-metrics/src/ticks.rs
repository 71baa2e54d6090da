// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregate CPU tick counters from `/proc/stat`.
//!
//! The first line of `/proc/stat` holds cumulative jiffies spent in each
//! CPU state since boot:
//!
//! ```text
//! cpu  user nice system idle iowait irq softirq steal guest guest_nice
//! ```
//!
//! Utilisation between two readings is the share of non-idle ticks in the
//! total delta. `guest` time is already counted in `user`, so only the first
//! eight counters are kept.

use crate::thermal::read_sysfs_file;
use crate::MetricsError;
use std::path::Path;

/// Default path to the kernel CPU statistics file.
pub const PROC_STAT_PATH: &str = "/proc/stat";

/// Number of CPU states tracked per reading.
pub const TICK_STATES: usize = 8;

const IDLE: usize = 3;
const IOWAIT: usize = 4;

/// One reading of the aggregate CPU tick counters.
///
/// Counters are in `/proc/stat` order: user, nice, system, idle, iowait,
/// irq, softirq, steal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CpuTicks {
    counters: [u64; TICK_STATES],
}

impl CpuTicks {
    pub const fn new(counters: [u64; TICK_STATES]) -> Self {
        Self { counters }
    }

    pub fn counters(&self) -> &[u64; TICK_STATES] {
        &self.counters
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counters.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Ticks spent idle, including time waiting on I/O.
    pub fn idle(&self) -> u64 {
        self.counters[IDLE].saturating_add(self.counters[IOWAIT])
    }

    /// Fraction of non-idle time since `previous`, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` when no ticks elapsed. A counter that went backwards
    /// (e.g. a CPU taken offline) contributes nothing.
    pub fn load_since(&self, previous: &CpuTicks) -> f64 {
        let mut total = 0u64;
        let mut idle = 0u64;
        for (i, (now, before)) in self.counters.iter().zip(&previous.counters).enumerate() {
            let delta = now.saturating_sub(*before);
            total = total.saturating_add(delta);
            if i == IDLE || i == IOWAIT {
                idle = idle.saturating_add(delta);
            }
        }
        if total == 0 {
            return 0.0;
        }
        total.saturating_sub(idle) as f64 / total as f64
    }

    /// Reads the aggregate `cpu` line from a `/proc/stat`-formatted file.
    pub fn read_from(path: &Path) -> Result<Self, MetricsError> {
        let content = read_sysfs_file(path)?;
        Self::parse(&content, path)
    }

    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MetricsError> {
        let parse_error = |detail: String| MetricsError::ParseError {
            path: source_path.display().to_string(),
            detail,
        };

        let line = content
            .lines()
            .find(|l| l.split_whitespace().next() == Some("cpu"))
            .ok_or_else(|| parse_error("aggregate cpu line not found".to_string()))?;

        let mut counters = [0u64; TICK_STATES];
        let mut seen = 0;
        for (slot, field) in counters.iter_mut().zip(line.split_whitespace().skip(1)) {
            *slot = field
                .parse()
                .map_err(|_| parse_error(format!("expected integer tick count, got '{field}'")))?;
            seen += 1;
        }
        // Kernels before 2.6 stop after idle; later fields default to zero.
        if seen <= IDLE {
            return Err(parse_error(format!("expected at least 4 tick counters, got {seen}")));
        }

        Ok(Self { counters })
    }
}

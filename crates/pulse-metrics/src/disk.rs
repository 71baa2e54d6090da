// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-volume disk usage.

use crate::source::FileStore;
use std::fmt;

/// Capacity and usage of one mounted file store at sampling time.
///
/// `used_space` is `total - usable` as read from the source. The two figures
/// are read independently, so an inconsistent pair yields a negative value;
/// it is reported as-is rather than clamped. A difference beyond the `i64`
/// range saturates at `i64::MAX` / `i64::MIN`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DiskMetric {
    mount_point: String,
    total_space: u64,
    used_space: i64,
}

impl DiskMetric {
    pub fn new(mount_point: impl Into<String>, total_space: u64, usable_space: u64) -> Self {
        Self {
            mount_point: mount_point.into(),
            total_space,
            used_space: signed_difference(total_space, usable_space),
        }
    }

    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Capacity in bytes.
    pub fn total_space(&self) -> u64 {
        self.total_space
    }

    /// Used bytes; negative only when the source reported usable > total.
    pub fn used_space(&self) -> i64 {
        self.used_space
    }
}

fn signed_difference(total: u64, usable: u64) -> i64 {
    let exact = i128::from(total) - i128::from(usable);
    i64::try_from(exact).unwrap_or(if exact > 0 { i64::MAX } else { i64::MIN })
}

impl From<&FileStore> for DiskMetric {
    fn from(store: &FileStore) -> Self {
        Self::new(store.mount_point.as_str(), store.total_space, store.usable_space)
    }
}

impl fmt::Display for DiskMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disk {}: {}/{} used",
            self.mount_point, self.used_space, self.total_space
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_space_and_display() {
        let disk = DiskMetric::new("/data", 2000, 1500);
        assert_eq!(disk.mount_point(), "/data");
        assert_eq!(disk.total_space(), 2000);
        assert_eq!(disk.used_space(), 500);
        assert_eq!(disk.to_string(), "Disk /data: 500/2000 used");
    }

    #[test]
    fn test_inconsistent_read_goes_negative() {
        let disk = DiskMetric::new("/scratch", 1000, 1200);
        assert_eq!(disk.used_space(), -200);
        assert_eq!(disk.to_string(), "Disk /scratch: -200/1000 used");
    }

    #[test]
    fn test_capacities_beyond_i64() {
        let huge = u64::MAX - 10;
        assert_eq!(DiskMetric::new("/big", huge, huge - 4096).used_space(), 4096);
        assert_eq!(DiskMetric::new("/big", u64::MAX, 0).used_space(), i64::MAX);
        assert_eq!(DiskMetric::new("/big", 0, u64::MAX).used_space(), i64::MIN);
        assert_eq!(DiskMetric::new("/big", 100, huge).used_space(), i64::MIN);
        assert_eq!(DiskMetric::new("/big", i64::MAX as u64, 0).used_space(), i64::MAX);
    }

    #[test]
    fn test_from_file_store() {
        let store = FileStore::new("/mnt1", 200_000, 100_000);
        assert_eq!(DiskMetric::from(&store).used_space(), 100_000);
    }
}

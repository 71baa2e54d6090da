// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System memory totals via `/proc/meminfo`.

use crate::MetricsError;
use std::path::Path;

/// Default path to the kernel memory info file.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Physical memory totals in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MemoryInfo {
    /// Total physical memory.
    pub total_bytes: u64,
    /// Memory the kernel estimates is available for new allocations
    /// without swapping (free + reclaimable cache).
    pub available_bytes: u64,
}

impl MemoryInfo {
    /// Reads memory information from a `/proc/meminfo`-formatted file.
    pub fn read_from(path: &Path) -> Result<Self, MetricsError> {
        let content = std::fs::read_to_string(path).map_err(|e| MetricsError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses the content of a `/proc/meminfo`-formatted string.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MetricsError> {
        let mut total_kb: Option<u64> = None;
        let mut available_kb: Option<u64> = None;

        for line in content.lines() {
            let mut parts = line.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            match key {
                "MemTotal:" => total_kb = Some(parse_kb_value(value, source_path)?),
                "MemAvailable:" => available_kb = Some(parse_kb_value(value, source_path)?),
                _ => {}
            }

            if total_kb.is_some() && available_kb.is_some() {
                break;
            }
        }

        let total_kb = total_kb.ok_or_else(|| missing_field("MemTotal", source_path))?;
        let available_kb = available_kb.ok_or_else(|| missing_field("MemAvailable", source_path))?;

        Ok(Self {
            total_bytes: total_kb.saturating_mul(1024),
            available_bytes: available_kb.saturating_mul(1024),
        })
    }
}

/// Parses a numeric string from `/proc/meminfo` (values are in kB).
fn parse_kb_value(s: &str, source_path: &Path) -> Result<u64, MetricsError> {
    s.parse::<u64>().map_err(|_| MetricsError::ParseError {
        path: source_path.display().to_string(),
        detail: format!("expected integer kB value, got '{s}'"),
    })
}

fn missing_field(field: &str, source_path: &Path) -> MetricsError {
    MetricsError::ParseError {
        path: source_path.display().to_string(),
        detail: format!("{field} not found"),
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-pattern line layout for `tracing-subscriber`.
//!
//! Every event is written as one line:
//!
//! ```text
//! 2025-03-14T09:26:53,589 [main] INFO  app::orders - order shipped context=order_id=42
//! ```
//!
//! i.e. ISO-8601 timestamp with millisecond precision, thread name, level
//! padded to five columns, logger name, message, then any remaining fields.
//! The logger is the event's `logger` field when present (set by both
//! adapters), otherwise the event target. Events bridged from `log` are
//! normalised first so they show their original target.

use crate::Level;
use chrono::{DateTime, Local};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Timestamp pattern: `yyyy-MM-ddTHH:mm:ss,SSS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S,%3f";

/// Default number of right-most logger name segments kept.
pub const DEFAULT_LOGGER_SEGMENTS: usize = 36;

/// Event formatter producing the fixed pulse line pattern.
#[derive(Debug, Clone, Copy)]
pub struct PulseLayout {
    logger_segments: usize,
}

impl PulseLayout {
    /// Creates a layout keeping at most `logger_segments` right-most
    /// segments of each logger name (`0` keeps the whole name).
    pub fn new(logger_segments: usize) -> Self {
        Self { logger_segments }
    }

    /// Renders one line, without the trailing newline.
    pub fn render(
        &self,
        timestamp: &DateTime<Local>,
        thread: &str,
        level: Level,
        logger: &str,
        message: &str,
        fields: &[(String, String)],
    ) -> String {
        let mut line = format!(
            "{} [{thread}] {level:<5} {} - {message}",
            timestamp.format(TIMESTAMP_FORMAT),
            rightmost_segments(logger, self.logger_segments),
        );
        for (key, value) in fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        line
    }
}

impl Default for PulseLayout {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_SEGMENTS)
    }
}

impl<S, N> FormatEvent<S, N> for PulseLayout
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let current = std::thread::current();
        let thread = match current.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", current.id()),
        };
        let logger = visitor.logger.as_deref().unwrap_or(metadata.target());

        let line = self.render(
            &Local::now(),
            &thread,
            Level::from(metadata.level()),
            logger,
            &visitor.message,
            &visitor.fields,
        );
        writeln!(writer, "{line}")
    }
}

/// Collects the message, the `logger` field and every other field.
#[derive(Default)]
struct LineVisitor {
    message: String,
    logger: Option<String>,
    fields: Vec<(String, String)>,
}

impl LineVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "logger" => self.logger = Some(value),
            // Bridged `log` metadata is already reflected in the line.
            name if name.starts_with("log.") => {}
            name => self.fields.push((name.to_string(), value)),
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}

/// Keeps the `keep` right-most segments of a logger name.
///
/// Segments are separated by `::` when the name contains it, by `.`
/// otherwise. `keep == 0` returns the name unchanged.
pub fn rightmost_segments(name: &str, keep: usize) -> &str {
    if keep == 0 {
        return name;
    }
    let sep = if name.contains("::") { "::" } else { "." };
    let mut end = name.len();
    let mut start = 0;
    for _ in 0..keep {
        match name[..end].rfind(sep) {
            Some(pos) => {
                start = pos + sep.len();
                end = pos;
            }
            None => return name,
        }
    }
    &name[start..]
}

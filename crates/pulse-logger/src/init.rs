// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Process-level logging setup.

use crate::adapter::LoggingAdapter;
use crate::bridge::BRIDGE;
use crate::config::LoggingConfig;
use crate::factory::LoggerFactory;
use crate::layout::PulseLayout;
use crate::LoggerError;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_log::AsLog;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber and selects the configured adapter.
///
/// - `RUST_LOG`, when set, overrides `config.level`. Directives are matched
///   against logger names, so `warn,orders=debug` works for both adapters.
/// - Records from the `log` facade are bridged into the same subscriber with
///   their key/value pairs kept, so both adapters end up in one output
///   stream formatted by [`PulseLayout`].
/// - The configured adapter replaces the global factory's active adapter.
///
/// Returns [`LoggerError::Init`] if a global subscriber or `log` logger is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggerError> {
    init_with_writer(config, std::io::stdout)
}

/// Like [`init`], writing formatted lines to `writer` instead of stdout.
pub fn init_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = config.parse_level()?;
    let kind = config.adapter_kind()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(PulseLayout::new(config.logger_segments))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggerError::Init(e.to_string()))?;
    log::set_logger(&BRIDGE).map_err(|e| LoggerError::Init(e.to_string()))?;
    // Let the `log` adapter skip disabled records before reaching the bridge.
    log::set_max_level(LevelFilter::current().as_log());

    LoggerFactory::global().set_adapter(Arc::new(LoggingAdapter::new(kind)));
    tracing::debug!(%kind, %level, "logging initialised");
    Ok(())
}

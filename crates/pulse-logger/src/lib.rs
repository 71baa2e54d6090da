// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pulse-logger
//!
//! A logging facade that dispatches to either the `log` facade or the
//! `tracing` ecosystem through one API.
//!
//! # Key Components
//!
//! - [`LoggerFactory`]: resolves named or type-scoped loggers against the
//!   active adapter; the adapter can be swapped at runtime.
//! - [`LoggingAdapter`]: the closed set of framework bindings (`log`,
//!   `tracing`).
//! - [`PulseLogger`]: the resolved handle: level-gated messages, structured
//!   context and error-with-cause calls.
//! - [`KeyValueMap`]: ordered structured context for a single call.
//! - [`ThreadContext`]: the thread-scoped store the `tracing` adapter uses
//!   for structured calls, cleared after every call.
//! - [`PulseLayout`] / [`init`]: the fixed line layout and process setup.
//!
//! # Dispatch
//!
//! ```text
//! get_logger("orders")
//!       │
//!       ▼
//!   LoggerFactory ──► active Arc<LoggingAdapter>
//!       │                 ├── Log      → LogLogger     (log::Log client)
//!       │                 └── Tracing  → TracingLogger (tracing::Dispatch)
//!       ▼
//!   PulseLogger::info(..)  ──► enabled? ──► emit
//! ```
//!
//! # Example
//! ```
//! use pulse_logger::{pulse_debug, Cause, KeyValueMap, RuntimeFailure};
//!
//! let logger = pulse_logger::get_logger("checkout").unwrap();
//! pulse_debug!(logger, "cart has {} items", 3);
//!
//! let mut ctx = KeyValueMap::new();
//! ctx.add("cart_id", "c-17").add("coupon", None::<String>);
//! logger.info_kv("checkout started", &ctx);
//!
//! let failure = RuntimeFailure::new("payment gateway unreachable");
//! logger.error_with_cause("checkout failed", Cause::runtime(&failure));
//! ```

mod adapter;
mod bridge;
mod cause;
mod config;
mod error;
mod event;
mod factory;
mod init;
mod key_value;
pub mod layout;
mod level;
mod log_adapter;
mod logger;
mod thread_context;
mod tracing_adapter;

#[cfg(test)]
mod test_support;

pub use adapter::{AdapterKind, LoggingAdapter};
pub use cause::{Cause, RuntimeFailure, RUNTIME_CAUSE_SEPARATOR};
pub use config::LoggingConfig;
pub use error::LoggerError;
pub use factory::{adapter, create_adapter, get_logger, get_logger_for, set_adapter, LoggerFactory};
pub use init::{init, init_with_writer};
pub use key_value::{render_value, KeyValueMap, NULL_VALUE};
pub use layout::PulseLayout;
pub use level::Level;
pub use log_adapter::{LogAdapter, LogLogger};
pub use logger::PulseLogger;
pub use thread_context::{ContextGuard, ThreadContext};
pub use tracing_adapter::{TracingAdapter, TracingLogger};

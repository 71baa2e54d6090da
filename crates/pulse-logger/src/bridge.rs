// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Forwards `log` records into the current `tracing` dispatcher.
//!
//! Each record becomes one event whose `logger` field is the record target.
//! Key/value pairs attached to the record are rendered into the `context`
//! field, and an `error` pair holding an error value becomes the `error`
//! field, so structured calls on the `log` adapter keep their context once
//! [`init`](crate::init) has routed everything into one subscriber.

use crate::event;
use crate::key_value::push_pair;
use crate::log_adapter::ERROR_KEY;
use crate::Level;
use log::kv::{self, Key, Value, VisitSource};
use log::{Log, Metadata, Record};

/// The `log::Log` installed by [`init`](crate::init).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LogBridge;

pub(crate) static BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let level = Level::from(metadata.level());
        tracing::dispatcher::get_default(|dispatch| {
            event::enabled(dispatch, level, metadata.target())
        })
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let source = record.key_values();
        let mut pairs = ContextPairs::default();
        // A failing source still leaves the pairs visited so far.
        let _ = source.visit(&mut pairs);
        let error_value = source.get(Key::from_str(ERROR_KEY));
        let error = error_value.as_ref().and_then(|v| v.to_borrowed_error());
        let context = (!pairs.rendered.is_empty()).then_some(pairs.rendered.as_str());

        tracing::dispatcher::get_default(|dispatch| {
            event::emit(
                dispatch,
                Level::from(record.level()),
                Some(record.target()),
                *record.args(),
                context,
                error,
            )
        });
    }

    fn flush(&self) {}
}

/// Renders every pair except an `error` error value as `k=v k=v`.
#[derive(Default)]
struct ContextPairs {
    rendered: String,
}

impl<'kvs> VisitSource<'kvs> for ContextPairs {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        if key.as_str() == ERROR_KEY && value.to_borrowed_error().is_some() {
            return Ok(());
        }
        push_pair(&mut self.rendered, key.as_str(), &value.to_string());
        Ok(())
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tracing` events whose target is chosen at runtime.
//!
//! `tracing` macros bake the target into each callsite, so a logger named
//! `orders` would be filtered as this crate's module. Instead, enablement is
//! asked with metadata carrying the logger name as target (what per-target
//! directives such as `orders=debug` match on), and the event is then sent
//! through one static callsite per level with a fixed field set:
//! `message`, `logger`, `context`, `error`.

use crate::Level;
use std::error::Error;
use std::fmt::Arguments;
use std::sync::Once;
use tracing::callsite::{self, Callsite, Identifier};
use tracing::field::{FieldSet, Value};
use tracing::metadata::Kind;
use tracing::subscriber::Interest;
use tracing::{Dispatch, Event, Metadata};

/// Target reported by events from an unnamed logger.
pub(crate) const EVENT_TARGET: &str = "pulse_logger";

const FIELD_NAMES: &[&str] = &["message", "logger", "context", "error"];

macro_rules! level_callsite {
    ($level:expr, $cs:ident, $meta:ident, $ty:ident) => {
        struct $ty;
        static $cs: $ty = $ty;
        static $meta: Metadata<'static> = Metadata::new(
            "pulse event",
            EVENT_TARGET,
            $level,
            None,
            None,
            None,
            FieldSet::new(FIELD_NAMES, Identifier(&$cs)),
            Kind::EVENT,
        );

        impl Callsite for $ty {
            fn set_interest(&self, _: Interest) {}

            fn metadata(&self) -> &'static Metadata<'static> {
                &$meta
            }
        }
    };
}

level_callsite!(tracing::Level::TRACE, TRACE_CS, TRACE_META, TraceCallsite);
level_callsite!(tracing::Level::DEBUG, DEBUG_CS, DEBUG_META, DebugCallsite);
level_callsite!(tracing::Level::INFO, INFO_CS, INFO_META, InfoCallsite);
level_callsite!(tracing::Level::WARN, WARN_CS, WARN_META, WarnCallsite);
level_callsite!(tracing::Level::ERROR, ERROR_CS, ERROR_META, ErrorCallsite);

static REGISTER: Once = Once::new();

fn callsite_for(level: Level) -> &'static dyn Callsite {
    REGISTER.call_once(|| {
        callsite::register(&TRACE_CS);
        callsite::register(&DEBUG_CS);
        callsite::register(&INFO_CS);
        callsite::register(&WARN_CS);
        callsite::register(&ERROR_CS);
    });
    match level {
        Level::Trace => &TRACE_CS,
        Level::Debug => &DEBUG_CS,
        Level::Info => &INFO_CS,
        Level::Warn => &WARN_CS,
        Level::Error => &ERROR_CS,
    }
}

/// Returns `true` if `dispatch` accepts an event at `level` for `target`.
pub(crate) fn enabled(dispatch: &Dispatch, level: Level, target: &str) -> bool {
    let metadata = Metadata::new(
        "pulse event",
        target,
        level.into(),
        None,
        None,
        None,
        FieldSet::new(FIELD_NAMES, Identifier(callsite_for(level))),
        Kind::EVENT,
    );
    dispatch.enabled(&metadata)
}

/// Sends one event to `dispatch`. Callers check [`enabled`] first.
pub(crate) fn emit(
    dispatch: &Dispatch,
    level: Level,
    logger: Option<&str>,
    message: Arguments<'_>,
    context: Option<&str>,
    error: Option<&(dyn Error + 'static)>,
) {
    let metadata = callsite_for(level).metadata();
    let mut fields = metadata.fields().iter();
    let (Some(message_field), Some(logger_field), Some(context_field), Some(error_field)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return;
    };

    let values = [
        (&message_field, Some(&message as &dyn Value)),
        (&logger_field, logger.as_ref().map(|l| l as &dyn Value)),
        (&context_field, context.as_ref().map(|c| c as &dyn Value)),
        (&error_field, error.as_ref().map(|e| e as &dyn Value)),
    ];
    let value_set = metadata.fields().value_set(&values);
    dispatch.event(&Event::new(metadata, &value_set));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::RuntimeFailure;
    use crate::test_support::{capturing_dispatch, filtered_dispatch};

    #[test]
    fn test_enabled_matches_target_directives() {
        let (dispatch, _) = filtered_dispatch("warn,orders=debug");
        assert!(enabled(&dispatch, Level::Debug, "orders"));
        assert!(enabled(&dispatch, Level::Debug, "orders::checkout"));
        assert!(!enabled(&dispatch, Level::Trace, "orders"));
        assert!(!enabled(&dispatch, Level::Info, "billing"));
        assert!(enabled(&dispatch, Level::Warn, "billing"));
    }

    #[test]
    fn test_emit_records_present_fields_only() {
        let (dispatch, events) = capturing_dispatch(tracing::Level::TRACE);
        let failure = RuntimeFailure::new("boom");
        emit(&dispatch, Level::Warn, Some("svc"), format_args!("a {}", 1), None, None);
        emit(
            &dispatch,
            Level::Error,
            None,
            format_args!("b"),
            Some("k=v"),
            Some(&failure),
        );

        let events = events.lock().unwrap();
        assert_eq!(events[0].level, Level::Warn);
        assert_eq!(events[0].message, "a 1");
        assert_eq!(events[0].field("logger"), Some("svc"));
        assert_eq!(events[0].field("context"), None);
        assert_eq!(events[1].field("logger"), None);
        assert_eq!(events[1].field("context"), Some("k=v"));
        assert_eq!(events[1].field("error"), Some("boom"));
    }
}

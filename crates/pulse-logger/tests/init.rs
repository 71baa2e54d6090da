// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration test: process-level initialisation.
//!
//! Kept in its own test binary because it installs global state.

use pulse_logger::{AdapterKind, Cause, KeyValueMap, LoggerError, LoggingConfig, RuntimeFailure};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl SharedBuf {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
    lines
        .iter()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line contains {needle:?} in {lines:#?}"))
}

#[test]
fn test_init_routes_both_adapters_into_one_stream() {
    let buf = SharedBuf::default();
    let config = LoggingConfig::default();
    pulse_logger::init_with_writer(&config, buf.clone()).unwrap();
    assert_eq!(pulse_logger::adapter().kind(), AdapterKind::Log);

    // Default `log` adapter: the record goes through the bridge.
    let logger = pulse_logger::get_logger("shop.orders").unwrap();
    let mut ctx = KeyValueMap::new();
    ctx.add("order_id", 42).add("coupon", None::<String>);
    logger.info_kv("structured line", &ctx);
    logger.debug(format_args!("below the configured level"));
    let failure = RuntimeFailure::new("gateway timeout");
    logger.error_with_cause("payment failed", Cause::runtime(&failure));

    // Plain `log` macros share the same path.
    log::warn!(target: "init.bridge", attempt = 3; "bridged record");

    // Swap to the `tracing` adapter on the same subscriber.
    pulse_logger::set_adapter(Arc::new(pulse_logger::create_adapter("tracing").unwrap()));
    let traced = pulse_logger::get_logger("shop.billing").unwrap();
    let mut ctx = KeyValueMap::new();
    ctx.add("invoice", "inv 7");
    traced.info_kv("invoice issued", &ctx);

    let lines = buf.lines();
    assert!(line_with(&lines, "structured line")
        .ends_with(" INFO  shop.orders - structured line context=order_id=42 coupon=null"));
    assert!(!lines.iter().any(|l| l.contains("below the configured level")));
    assert!(line_with(&lines, "payment failed").ends_with(
        " ERROR shop.orders - payment failed - RuntimeException occurred: gateway timeout error=gateway timeout"
    ));
    assert!(line_with(&lines, "bridged record")
        .ends_with(" WARN  init.bridge - bridged record context=attempt=3"));
    assert!(line_with(&lines, "invoice issued")
        .ends_with(r#" INFO  shop.billing - invoice issued context=invoice="inv 7""#));

    let err = pulse_logger::init(&config).unwrap_err();
    assert!(matches!(err, LoggerError::Init(_)));
}

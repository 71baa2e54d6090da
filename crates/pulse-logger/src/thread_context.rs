// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Thread-scoped diagnostic context used by the `tracing` adapter.
//!
//! Structured calls on the `tracing` adapter go through this store: the
//! entries are put into the calling thread's context, the event is emitted
//! with the rendered context attached, and the store is cleared again.
//! Clearing is owned by a [`ContextGuard`], so it happens on every exit path,
//! including unwinding out of a subscriber that panicked.
//!
//! ```text
//! ThreadContext::scoped(&ctx)
//!       │
//!       ▼
//!   ContextGuard  ◄─── entries live in a thread_local
//!       │
//!       │  drop()
//!       ▼
//!   ThreadContext::clear()
//! ```

use crate::key_value::{push_pair, KeyValueMap};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static CONTEXT: RefCell<Vec<(String, String)>> = const { RefCell::new(Vec::new()) };
}

/// Accessor for the calling thread's diagnostic context.
pub struct ThreadContext;

impl ThreadContext {
    /// Puts `key`, replacing a previous value in place.
    pub fn put(key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        CONTEXT.with(|ctx| {
            let mut ctx = ctx.borrow_mut();
            match ctx.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => ctx.push((key, value)),
            }
        });
    }

    pub fn get(key: &str) -> Option<String> {
        CONTEXT.with(|ctx| {
            ctx.borrow()
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Removes every entry for the calling thread.
    pub fn clear() {
        CONTEXT.with(|ctx| ctx.borrow_mut().clear());
    }

    pub fn is_empty() -> bool {
        CONTEXT.with(|ctx| ctx.borrow().is_empty())
    }

    /// Copies the current entries in insertion order.
    pub fn snapshot() -> Vec<(String, String)> {
        CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    /// Renders the current entries as `k1=v1 k2=v2`. Empty values and values
    /// containing whitespace, `=` or `"` are JSON-quoted.
    pub fn render() -> String {
        CONTEXT.with(|ctx| {
            let mut out = String::new();
            for (key, value) in ctx.borrow().iter() {
                push_pair(&mut out, key, value);
            }
            out
        })
    }

    /// Populates the context from `map` and returns a guard that clears it.
    ///
    /// Null values are stored as the literal `"null"`.
    pub fn scoped(map: &KeyValueMap) -> ContextGuard {
        for (key, value) in map.rendered() {
            Self::put(key, value);
        }
        ContextGuard {
            _not_send: PhantomData,
        }
    }
}

/// Clears the thread context when dropped.
///
/// Not `Send`: the guard must be dropped on the thread whose context it owns.
#[must_use = "the context is cleared as soon as the guard is dropped"]
pub struct ContextGuard {
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        ThreadContext::clear();
    }
}

impl std::fmt::Debug for ContextGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextGuard").finish()
    }
}

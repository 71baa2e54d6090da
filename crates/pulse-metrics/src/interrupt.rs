// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cancellation flag for the blocking CPU sample.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Returned by [`Interrupt::sleep`] when the wait was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("sampling interrupted")]
pub struct Interrupted;

/// A clonable interrupt flag.
///
/// Setting the flag wakes any thread sleeping on it. The flag stays set
/// until [`clear`](Self::clear) is called, so the caller that triggered the
/// interrupt can still observe it after the sampler has returned.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag and wakes all sleepers.
    pub fn interrupt(&self) {
        let (flag, wake) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        wake.notify_all();
    }

    pub fn is_interrupted(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn clear(&self) {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner) = false;
    }

    /// Blocks for `duration` unless interrupted.
    ///
    /// Returns immediately with [`Interrupted`] if the flag is already set.
    /// Never clears the flag.
    pub fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let (flag, wake) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _timeout) = wake
            .wait_timeout_while(guard, duration, |interrupted| !*interrupted)
            .unwrap_or_else(PoisonError::into_inner);
        if *guard {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}

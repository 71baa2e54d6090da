// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Metrics sampling over a [`HardwareSource`].
//!
//! # Concurrency
//! [`MetricsProvider::cpu_usage`] and [`MetricsProvider::snapshot`] take
//! `&mut self`: they overwrite the tick reading kept from the previous
//! sample. Sharing one provider between threads therefore requires wrapping
//! it in a `Mutex` (one sampler at a time); alternatively give each thread
//! its own provider. Every other accessor takes `&self` and re-queries the
//! source.

use crate::config::MetricsConfig;
use crate::interrupt::Interrupt;
use crate::source::{HardwareSource, SystemSource};
use crate::ticks::CpuTicks;
use crate::{DiskMetric, MetricsError, MetricsSnapshot};
use pulse_logger::{pulse_debug, pulse_trace, PulseLogger};
use std::time::Duration;

/// Returned by [`MetricsProvider::cpu_usage`] when the sampling delay was
/// interrupted.
pub const CPU_USAGE_INTERRUPTED: f64 = -1.0;

/// Samples host metrics and assembles them into plain values.
pub struct MetricsProvider<S = SystemSource> {
    source: S,
    previous_ticks: CpuTicks,
    sample_interval: Duration,
    interrupt: Interrupt,
    logger: PulseLogger,
}

impl MetricsProvider<SystemSource> {
    /// Creates a provider over the local host with default settings.
    pub fn new() -> Result<Self, MetricsError> {
        Self::with_source(SystemSource::new())
    }

    /// Creates a provider over the local host using `config` for the
    /// source paths and the sampling delay.
    pub fn with_config(config: &MetricsConfig) -> Result<Self, MetricsError> {
        Ok(Self::with_source(SystemSource::from_config(config))?
            .with_sample_interval(config.sample_interval()))
    }
}

impl<S: HardwareSource> MetricsProvider<S> {
    /// Creates a provider over `source`, capturing the initial tick reading.
    pub fn with_source(source: S) -> Result<Self, MetricsError> {
        let ticks = source.cpu_ticks()?;
        Ok(Self::with_initial_ticks(source, ticks))
    }

    /// Creates a provider whose first CPU sample is measured from `ticks`.
    pub fn with_initial_ticks(source: S, ticks: CpuTicks) -> Self {
        Self {
            source,
            previous_ticks: ticks,
            sample_interval: MetricsConfig::default().sample_interval(),
            interrupt: Interrupt::new(),
            logger: pulse_logger::get_logger_for::<Self>(),
        }
    }

    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Replaces the interrupt flag the CPU sample waits on.
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// A handle that cancels an in-progress (or the next) CPU sample.
    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

    pub fn previous_ticks(&self) -> &CpuTicks {
        &self.previous_ticks
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// CPU usage in percent since the previous sample.
    ///
    /// Blocks for the sample interval first. If the wait is interrupted,
    /// returns [`CPU_USAGE_INTERRUPTED`] without touching the stored ticks
    /// and leaves the interrupt flag set for the caller to observe.
    pub fn cpu_usage(&mut self) -> Result<f64, MetricsError> {
        if self.interrupt.sleep(self.sample_interval).is_err() {
            pulse_debug!(self.logger, "cpu sample interrupted");
            return Ok(CPU_USAGE_INTERRUPTED);
        }

        let load = self.source.cpu_load_between_ticks(&self.previous_ticks)? * 100.0;
        self.previous_ticks = self.source.cpu_ticks()?;
        pulse_trace!(self.logger, "cpu usage {load:.2}%");
        Ok(load)
    }

    pub fn total_memory(&self) -> Result<u64, MetricsError> {
        self.source.total_memory()
    }

    pub fn available_memory(&self) -> Result<u64, MetricsError> {
        self.source.available_memory()
    }

    /// Passed through from the source, including its no-sensor sentinel.
    pub fn cpu_temperature(&self) -> f64 {
        self.source.cpu_temperature()
    }

    /// One [`DiskMetric`] per mounted file store, in source order.
    pub fn disk_usage(&self) -> Result<Vec<DiskMetric>, MetricsError> {
        let disks: Vec<DiskMetric> = self.source.file_stores()?.iter().map(DiskMetric::from).collect();
        pulse_trace!(self.logger, "enumerated {} file stores", disks.len());
        Ok(disks)
    }

    /// Samples every metric. Blocks for the CPU sample interval.
    pub fn snapshot(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        let cpu_usage = self.cpu_usage()?;
        Ok(MetricsSnapshot::new(
            cpu_usage,
            self.total_memory()?,
            self.available_memory()?,
            self.cpu_temperature(),
            self.disk_usage()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    const SHORT: Duration = Duration::from_millis(5);

    /// Source returning fixed readings and counting tick reads.
    struct FakeSource {
        ticks: CpuTicks,
        load: f64,
        stores: Vec<FileStore>,
        tick_reads: AtomicUsize,
    }

    impl FakeSource {
        fn new(load: f64) -> Self {
            Self {
                ticks: CpuTicks::new([100, 200, 300, 400, 0, 0, 0, 0]),
                load,
                stores: vec![
                    FileStore::new("/mnt1", 200_000, 100_000),
                    FileStore::new("/mnt2", 500_000, 200_000),
                ],
                tick_reads: AtomicUsize::new(0),
            }
        }
    }

    impl HardwareSource for FakeSource {
        fn cpu_ticks(&self) -> Result<CpuTicks, MetricsError> {
            self.tick_reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.ticks)
        }

        fn cpu_load_between_ticks(&self, _previous: &CpuTicks) -> Result<f64, MetricsError> {
            Ok(self.load)
        }

        fn total_memory(&self) -> Result<u64, MetricsError> {
            Ok(10_000)
        }

        fn available_memory(&self) -> Result<u64, MetricsError> {
            Ok(4_000)
        }

        fn cpu_temperature(&self) -> f64 {
            60.5
        }

        fn file_stores(&self) -> Result<Vec<FileStore>, MetricsError> {
            Ok(self.stores.clone())
        }
    }

    /// Source whose tick counters advance on every read.
    struct SteppingSource {
        reads: Mutex<u64>,
    }

    impl HardwareSource for SteppingSource {
        fn cpu_ticks(&self) -> Result<CpuTicks, MetricsError> {
            let mut reads = self.reads.lock().unwrap();
            *reads += 1;
            let n = *reads;
            // Each read adds 30 busy and 10 idle ticks.
            Ok(CpuTicks::new([30 * n, 0, 0, 10 * n, 0, 0, 0, 0]))
        }

        fn total_memory(&self) -> Result<u64, MetricsError> {
            Ok(0)
        }

        fn available_memory(&self) -> Result<u64, MetricsError> {
            Ok(0)
        }

        fn cpu_temperature(&self) -> f64 {
            0.0
        }

        fn file_stores(&self) -> Result<Vec<FileStore>, MetricsError> {
            Err(MetricsError::NotAvailable {
                path: "fake".to_string(),
            })
        }
    }

    fn provider(load: f64) -> MetricsProvider<FakeSource> {
        MetricsProvider::with_source(FakeSource::new(load))
            .unwrap()
            .with_sample_interval(SHORT)
    }

    #[test]
    fn test_cpu_usage_scales_load() {
        let mut p = provider(0.5);
        assert!((p.cpu_usage().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_cpu_usage_refreshes_ticks() {
        let mut p = provider(0.5);
        assert_eq!(p.source().tick_reads.load(Ordering::SeqCst), 1);
        p.cpu_usage().unwrap();
        assert_eq!(p.source().tick_reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cpu_usage_uses_default_load_computation() {
        let source = SteppingSource {
            reads: Mutex::new(0),
        };
        let mut p = MetricsProvider::with_source(source)
            .unwrap()
            .with_sample_interval(SHORT);
        assert!((p.cpu_usage().unwrap() - 75.0).abs() < 1e-9);
        // The stored reading moved past the one the load was measured against.
        assert_eq!(p.previous_ticks().counters()[0], 90);
    }

    #[test]
    fn test_cpu_usage_interrupted() {
        let mut p = provider(0.5).with_sample_interval(Duration::from_secs(30));
        let interrupt = p.interrupt_handle();
        interrupt.interrupt();

        let start = Instant::now();
        assert_eq!(p.cpu_usage().unwrap(), CPU_USAGE_INTERRUPTED);
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(interrupt.is_interrupted());
        // Stored ticks untouched.
        assert_eq!(p.source().tick_reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cpu_usage_interrupted_from_another_thread() {
        let interrupt = Interrupt::new();
        let mut p = provider(0.5)
            .with_sample_interval(Duration::from_secs(30))
            .with_interrupt(interrupt.clone());

        let sampler = std::thread::spawn(move || p.cpu_usage().unwrap());
        std::thread::sleep(Duration::from_millis(20));
        interrupt.interrupt();

        assert_eq!(sampler.join().unwrap(), CPU_USAGE_INTERRUPTED);
        assert!(interrupt.is_interrupted());
    }

    #[test]
    fn test_shared_provider_behind_mutex() {
        let shared = Arc::new(Mutex::new(provider(0.25)));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.lock().unwrap().cpu_usage().unwrap())
            })
            .collect();
        for h in handles {
            assert!((h.join().unwrap() - 25.0).abs() < 1e-9);
        }
        let reads = shared.lock().unwrap().source().tick_reads.load(Ordering::SeqCst);
        assert_eq!(reads, 5);
    }

    #[test]
    fn test_disk_usage_in_source_order() {
        let p = provider(0.0);
        let disks = p.disk_usage().unwrap();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].mount_point(), "/mnt1");
        assert_eq!(disks[0].total_space(), 200_000);
        assert_eq!(disks[0].used_space(), 100_000);
        assert_eq!(disks[1].mount_point(), "/mnt2");
        assert_eq!(disks[1].used_space(), 300_000);
    }

    #[test]
    fn test_pass_through_readings() {
        let p = provider(0.0);
        assert_eq!(p.total_memory().unwrap(), 10_000);
        assert_eq!(p.available_memory().unwrap(), 4_000);
        assert_eq!(p.cpu_temperature(), 60.5);
    }

    #[test]
    fn test_source_failure_propagates() {
        let p = MetricsProvider::with_initial_ticks(
            SteppingSource {
                reads: Mutex::new(0),
            },
            CpuTicks::default(),
        );
        assert!(matches!(p.disk_usage(), Err(MetricsError::NotAvailable { .. })));
    }

    #[test]
    fn test_snapshot() {
        let mut p = provider(0.1234);
        let snap = p.snapshot().unwrap();
        assert!((snap.cpu_usage - 12.34).abs() < 1e-9);
        assert_eq!(snap.total_memory, 10_000);
        assert_eq!(snap.available_memory, 4_000);
        assert_eq!(snap.disks.len(), 2);
        let text = snap.to_string();
        assert!(text.contains("CPU Usage: 12.34%"));
        assert!(text.contains("Disk /mnt2: 300000/500000 used"));
    }
}

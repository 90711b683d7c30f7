//! Catalog metrics.
//!
//! Tracks key lookups, missing keys, bundle loads and load failures for a
//! single catalog instance.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by one catalog.
#[derive(Debug, Default)]
pub struct CatalogMetrics {
    /// Number of key lookups (sync and async)
    lookups: AtomicUsize,

    /// Number of lookups that fell through to the key itself
    misses: AtomicUsize,

    /// Number of bundle load attempts
    bundle_loads: AtomicUsize,

    /// Number of bundle loads that failed
    load_failures: AtomicUsize,
}

impl CatalogMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key lookup (sync or async).
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell through to the key itself.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a bundle load attempt.
    pub fn record_bundle_load(&self) {
        self.bundle_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed bundle load.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the current miss count.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Get the number of bundle load attempts.
    pub fn bundle_loads(&self) -> usize {
        self.bundle_loads.load(Ordering::Relaxed)
    }

    /// Get the number of failed bundle loads.
    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let loads = self.bundle_loads();
        let failures = self.load_failures();

        let hit_rate = if lookups > 0 {
            (lookups - misses.min(lookups)) as f64 / lookups as f64 * 100.0
        } else {
            0.0
        };

        let load_success_rate = if loads > 0 {
            (loads - failures.min(loads)) as f64 / loads as f64 * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            hit_rate,
            bundle_loads: loads,
            load_failures: failures,
            load_success_rate,
        }
    }
}

/// Snapshot of catalog statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub hit_rate: f64,

    pub bundle_loads: usize,
    pub load_failures: usize,

    /// Bundle load success rate as a percentage (0-100)
    pub load_success_rate: f64,
}

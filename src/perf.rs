//! Performance instrumentation for input hot paths.
//!
//! Pointer-move handling and hit testing run dozens of times per second
//! while the user drags, so they carry lightweight scoped timers that only
//! report when an operation is slow.
//!
//! Enable the `profiling` cargo feature for per-scope trace output;
//! without it the macros compile to nothing but a name drop.
//!
//! ```ignore
//! fn handle_pointer_move(...) {
//!     profile_scope!("handle_pointer_move");
//!     // ... work ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Threshold above which an operation on the input path is considered slow
pub const SLOW_OPERATION_MS: f64 = 4.0;

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Statistics for a specific operation type.
#[derive(Debug, Clone)]
pub struct OperationStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum for average calculation
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Get the average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }
}

/// Aggregated per-operation timings for the input path.
#[derive(Default)]
pub struct PerfMonitor {
    operation_stats: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation timing.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats
            .entry(name)
            .or_default()
            .record(elapsed_ms);
    }

    /// Get statistics for a specific operation.
    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    /// Log the slowest operations seen so far.
    pub fn log_slow_operations(&self) {
        let mut ops: Vec<(&'static str, &OperationStats)> =
            self.operation_stats.iter().map(|(k, v)| (*k, v)).collect();
        ops.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (name, stats) in ops.into_iter().take(5) {
            if stats.average() > 0.1 {
                // Only show ops taking >0.1ms
                warn!(
                    operation = name,
                    avg_ms = format!("{:.2}", stats.average()),
                    max_ms = format!("{:.2}", stats.max_ms()),
                    count = stats.count(),
                    "Slow operation profile"
                );
            }
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        self.operation_stats.clear();
    }
}

/// A scoped timer that logs duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (low 1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            if elapsed_ms > self.threshold_ms {
                trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms.max(SLOW_OPERATION_MS) {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    "Slow operation"
                );
            }
        }
    }
}

/// Measure execution time of a closure and return both the result and
/// elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

//! Scope-based execution timers.
//!
//! [`ScopedTimer`] measures elapsed wall-clock time over a lexical scope or
//! a manually delimited interval. A timer still running when it goes out of
//! scope stops itself and emits exactly one report through its sink.

use crate::config::ProfileConfig;
use crate::report::{ReportSink, TimeUnit, TimerReport, TracingSink};
use crate::stopwatch::Stopwatch;
use std::sync::Arc;
use std::time::Duration;

/// Labeled scope timer.
///
/// Each instance is a unique measurement session: copying would duplicate
/// timing state, so the type is deliberately not clonable and transfers by
/// move only.
///
/// # Example
///
/// ```
/// use perf_timer::ScopedTimer;
/// use std::time::Duration;
///
/// let mut timer = ScopedTimer::new("parse");
/// // ... timed work ...
/// timer.stop();
/// assert!(timer.elapsed() < Duration::from_secs(1));
/// ```
///
/// Dropping a running timer performs an implicit [`stop`](Self::stop)
/// followed by one report; a timer stopped explicitly stays silent on drop.
#[derive(Debug)]
pub struct ScopedTimer {
    /// Label included in every report.
    label: String,
    /// Monotonic clock source.
    stopwatch: Stopwatch,
    /// True between `start` and `stop`.
    running: bool,
    /// Last captured duration; zero until the first `stop`.
    elapsed: Duration,
    /// Unit used when rendering reports.
    unit: TimeUnit,
    /// Reports under this threshold are suppressed.
    min_report: Duration,
    /// Master switch taken from [`ProfileConfig::enabled`].
    enabled: bool,
    /// Report destination.
    sink: Arc<dyn ReportSink>,
}

impl ScopedTimer {
    /// Create a timer that starts measuring immediately.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let mut timer = Self::deferred(label);
        timer.start();
        timer
    }

    /// Create a timer without capturing a start timestamp.
    ///
    /// The timer measures nothing until [`start`](Self::start) is called;
    /// in particular it does not report on drop.
    #[must_use]
    pub fn deferred(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stopwatch: Stopwatch::deferred(),
            running: false,
            elapsed: Duration::ZERO,
            unit: TimeUnit::default(),
            min_report: Duration::ZERO,
            enabled: true,
            sink: Arc::new(TracingSink),
        }
    }

    /// Create a running timer honoring the defaults in `config`.
    #[must_use]
    pub fn from_config(label: impl Into<String>, config: &ProfileConfig) -> Self {
        let mut timer = Self::new(label);
        timer.unit = config.unit;
        timer.min_report = config.min_report;
        timer.enabled = config.enabled;
        timer
    }

    /// Set the unit used when rendering reports.
    #[must_use]
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Replace the report sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Suppress reports for measurements under `threshold`.
    #[must_use]
    pub fn with_min_report(mut self, threshold: Duration) -> Self {
        self.min_report = threshold;
        self
    }

    /// Capture a fresh start timestamp and mark the timer running.
    pub fn start(&mut self) {
        self.running = true;
        self.stopwatch.reset();
    }

    /// Capture elapsed time since the last `start` and mark not running.
    ///
    /// Returns the captured duration, also available afterwards through
    /// [`elapsed`](Self::elapsed).
    pub fn stop(&mut self) -> Duration {
        self.elapsed = self.stopwatch.elapsed();
        self.running = false;
        self.elapsed
    }

    /// Last captured duration; zero before the first [`stop`](Self::stop).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True between `start` and `stop`.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The timer's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Deliver the last captured measurement to the sink.
    ///
    /// Does nothing when reporting is disabled or the measurement is under
    /// the configured threshold.
    pub fn report(&self) {
        if !self.enabled || self.elapsed < self.min_report {
            return;
        }
        let report = TimerReport::new(self.label.clone(), self.elapsed, self.unit);
        self.sink.report(&report);
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if self.running {
            self.stop();
            self.report();
        }
    }
}

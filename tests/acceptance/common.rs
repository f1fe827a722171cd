//! Common utilities for integration tests.
//!
//! Provides helpers for:
//! - Recording timer reports delivered through a sink
//! - Busy-waiting for short, tightly bounded test delays

use perf_timer::{ReportSink, TimerReport};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sink that records every report it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<TimerReport>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports received.
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// Copy of all received reports, in delivery order.
    pub fn reports(&self) -> Vec<TimerReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn report(&self, report: &TimerReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}

/// Busy-wait for at least `duration` on the monotonic clock.
///
/// Sleeping can oversleep by whole scheduler quanta; spinning keeps short
/// test delays tight.
pub fn spin_for(duration: Duration) {
    let start = Instant::now();
    while start.elapsed() < duration {
        std::hint::spin_loop();
    }
}

//! Monotonic stopwatch for interval measurement.
//!
//! Wraps `std::time::Instant`, so readings are monotonic and unaffected by
//! wall-clock adjustments.

use std::time::{Duration, Instant};

/// Monotonic interval stopwatch.
///
/// A stopwatch is either started (holding the most recent reset point) or
/// deferred (no reading captured yet). [`elapsed`](Self::elapsed) measures
/// against the most recent reset point; a deferred stopwatch that was never
/// reset reads zero.
///
/// Each instance is a unique measurement session and is deliberately not
/// clonable.
#[derive(Debug)]
pub struct Stopwatch {
    /// Most recent reset point; `None` until the first reset.
    started: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopwatch and capture a reading immediately.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Some(Instant::now()),
        }
    }

    /// Create a stopwatch without capturing a reading.
    ///
    /// Call [`reset`](Self::reset) to start measuring.
    #[must_use]
    pub fn deferred() -> Self {
        Self { started: None }
    }

    /// Capture a fresh monotonic reading.
    pub fn reset(&mut self) {
        self.started = Some(Instant::now());
    }

    /// True once a reading has been captured.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Time elapsed since the most recent reset.
    ///
    /// Returns [`Duration::ZERO`] if no reading has been captured yet.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |started| started.elapsed())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

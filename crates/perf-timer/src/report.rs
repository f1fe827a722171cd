//! Report units, snapshots, and delivery sinks.
//!
//! A finished measurement is captured as a [`TimerReport`] and handed to a
//! [`ReportSink`]. Sinks are the seam for report delivery: the default
//! [`TracingSink`] emits a `tracing` event, [`WriterSink`] writes plain
//! `<label> took <value> <unit>` lines to any output stream, and
//! [`NullSink`] discards everything.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{info, warn};

/// Display and conversion unit for reported durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    #[default]
    Millis,
    /// Whole seconds.
    Seconds,
}

impl TimeUnit {
    /// Convert a duration into this unit, truncating fractional parts.
    #[must_use]
    pub fn convert(&self, duration: Duration) -> u128 {
        match self {
            Self::Nanos => duration.as_nanos(),
            Self::Micros => duration.as_micros(),
            Self::Millis => duration.as_millis(),
            Self::Seconds => u128::from(duration.as_secs()),
        }
    }

    /// Unit suffix used in report lines.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "us",
            Self::Millis => "ms",
            Self::Seconds => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Immutable snapshot of one finished measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerReport {
    /// Label of the timer that produced this report.
    pub label: String,
    /// Measured duration in nanoseconds.
    pub elapsed_ns: u64,
    /// Unit used when rendering the report.
    pub unit: TimeUnit,
}

impl TimerReport {
    /// Create a report from a captured duration.
    #[must_use]
    pub fn new(label: impl Into<String>, elapsed: Duration, unit: TimeUnit) -> Self {
        Self {
            label: label.into(),
            elapsed_ns: elapsed.as_nanos() as u64,
            unit,
        }
    }

    /// The measured duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// The measured duration converted to the report's unit.
    #[must_use]
    pub fn value(&self) -> u128 {
        self.unit.convert(self.elapsed())
    }
}

impl fmt::Display for TimerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {} {}", self.label, self.value(), self.unit)
    }
}

/// Destination for finished measurements.
///
/// Reporting takes `&self` so one sink can be shared across timers; sinks
/// that buffer internally handle their own locking.
pub trait ReportSink: fmt::Debug + Send + Sync {
    /// Deliver one report.
    fn report(&self, report: &TimerReport);
}

/// Sink that emits reports as `tracing` events (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, report: &TimerReport) {
        info!(
            label = %report.label,
            elapsed_ns = report.elapsed_ns,
            "{}",
            report
        );
    }
}

/// Sink that writes report lines to an output stream.
///
/// The writer sits behind a mutex so the sink can be shared across timers.
/// Write failures are logged and never propagated.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl WriterSink<io::Stdout> {
    /// Sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the inner writer, recovering it even from a poisoned lock.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + fmt::Debug> ReportSink for WriterSink<W> {
    fn report(&self, report: &TimerReport) {
        match self.writer.lock() {
            Ok(mut writer) => {
                if let Err(e) = writeln!(writer, "{report}") {
                    warn!("Failed to write timer report: {e}");
                }
            }
            Err(_) => warn!("Timer report writer poisoned, dropping report"),
        }
    }
}

/// Sink that discards every report.
///
/// Useful for silencing a shared-sink setup without touching call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&self, _report: &TimerReport) {}
}

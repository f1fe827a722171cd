//! Scope-based wall-clock execution timers.
//!
//! This crate measures elapsed time over lexical scopes or manually
//! delimited intervals:
//!
//! - **Stopwatch** ([`stopwatch`]): monotonic interval measurement
//! - **Scoped timers** ([`scope`]): labeled timers that report on drop
//! - **Reports** ([`report`]): units, report snapshots, and delivery sinks
//! - **Configuration** ([`config`]): TOML-backed reporting defaults
//!
//! # Example
//!
//! ```
//! use perf_timer::{ScopedTimer, TimeUnit};
//!
//! let mut timer = ScopedTimer::new("startup").with_unit(TimeUnit::Micros);
//! // ... timed work ...
//! let elapsed = timer.stop();
//! assert_eq!(elapsed, timer.elapsed());
//! ```
//!
//! A timer dropped while still running stops itself and emits exactly one
//! report through its sink; an explicitly stopped timer stays silent.

pub mod config;
pub mod report;
pub mod scope;
pub mod stopwatch;

pub use config::{ConfigError, ProfileConfig};
pub use report::{NullSink, ReportSink, TimeUnit, TimerReport, TracingSink, WriterSink};
pub use scope::ScopedTimer;
pub use stopwatch::Stopwatch;

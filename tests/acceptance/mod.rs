//! Integration tests for perf-utils acceptance testing.
//!
//! These tests exercise the public surface end to end:
//! - Scoped timer measurement, drop reporting, and thresholds
//! - Report sinks, units, and TOML-configured defaults
//! - Lazy map emplacement and memoization semantics

mod common;
mod memo_test;

//! Benchmark engine module
//!
//! Contains the write/read/verify loop, its per-window accumulators and
//! the console reporter.

pub mod report;
pub mod runner;
pub mod stats;

// Re-export commonly used types
pub use report::StatsReporter;
pub use runner::{BenchmarkLoop, verify_block};
pub use stats::{LatencyRange, RunningStats, WindowReport};

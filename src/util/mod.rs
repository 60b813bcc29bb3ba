//! Utility functions module
//!
//! Contains helpers for units formatting and the per-window rate math.

pub mod units;

// Re-export commonly used functions
pub use units::{
    format_bytes, format_elapsed, format_latency, format_timestamp,
    loops_per_minute, average_duration,
};

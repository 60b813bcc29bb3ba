//! Per-window accumulators
//!
//! `RunningStats` collects write and read timings of completed iterations
//! and turns them into a `WindowReport` once the measurement window has
//! elapsed, resetting itself in the same step.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::util::units::{average_duration, loops_per_minute};

/// Fastest and slowest sample observed in a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min: Duration,
    pub max: Duration,
}

impl LatencyRange {
    fn widen(range: Option<Self>, sample: Duration) -> Self {
        match range {
            Some(range) => Self {
                min: range.min.min(sample),
                max: range.max.max(sample),
            },
            None => Self {
                min: sample,
                max: sample,
            },
        }
    }
}

/// Summary of one measurement window
#[derive(Debug, Clone)]
pub struct WindowReport {
    /// Wall-clock time at which the window closed
    pub timestamp: DateTime<Local>,
    /// Completed loops divided by the elapsed window in minutes
    pub loops_per_minute: f64,
    /// Completed loops in the window
    pub total_loops: u64,
    /// Actual window length, at least the configured window
    pub elapsed: Duration,
    pub avg_write: Duration,
    pub avg_read: Duration,
    pub write_range: Option<LatencyRange>,
    pub read_range: Option<LatencyRange>,
}

/// Accumulated timings for the current window
#[derive(Debug, Clone)]
pub struct RunningStats {
    write_total: Duration,
    read_total: Duration,
    loop_count: u64,
    window_start: Instant,
    write_range: Option<LatencyRange>,
    read_range: Option<LatencyRange>,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Start a window now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start a window at `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            write_total: Duration::ZERO,
            read_total: Duration::ZERO,
            loop_count: 0,
            window_start: start,
            write_range: None,
            read_range: None,
        }
    }

    /// Record one completed, verified iteration
    pub fn record(&mut self, write: Duration, read: Duration) {
        self.write_total += write;
        self.read_total += read;
        self.loop_count += 1;
        self.write_range = Some(LatencyRange::widen(self.write_range, write));
        self.read_range = Some(LatencyRange::widen(self.read_range, read));
    }

    /// Zero every accumulator and restart the window at `now`
    pub fn reset(&mut self, now: Instant) {
        *self = Self::starting_at(now);
    }

    /// Time since the window started
    pub fn window_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.window_start)
    }

    /// Build the report for the current window, if it has run for at least
    /// `window`, and reset the accumulators
    pub fn take_report(&mut self, now: Instant, window: Duration) -> Option<WindowReport> {
        let elapsed = self.window_elapsed(now);
        if elapsed < window {
            return None;
        }

        let report = WindowReport {
            timestamp: Local::now(),
            loops_per_minute: loops_per_minute(self.loop_count, elapsed),
            total_loops: self.loop_count,
            elapsed,
            avg_write: average_duration(self.write_total, self.loop_count),
            avg_read: average_duration(self.read_total, self.loop_count),
            write_range: self.write_range,
            read_range: self.read_range,
        };

        self.reset(now);
        Some(report)
    }

    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    pub fn write_total(&self) -> Duration {
        self.write_total
    }

    pub fn read_total(&self) -> Duration {
        self.read_total
    }

    pub fn window_start(&self) -> Instant {
        self.window_start
    }
}

//! Console reporting of the startup banner and per-window summaries

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::bench::stats::WindowReport;
use crate::util::units::{format_elapsed, format_latency, format_timestamp};

pub const SEPARATOR: &str = "--------------------------------------------------";

/// Banner printed once before the first iteration
pub fn banner_lines(start: &DateTime<Local>, window: Duration) -> [String; 2] {
    [
        format!("Start testing, @time: {}", format_timestamp(start)),
        format!(
            "Result will be printed every {}, please wait...",
            format_elapsed(window)
        ),
    ]
}

/// Six-line summary of a closed measurement window
pub fn window_lines(report: &WindowReport) -> [String; 6] {
    [
        SEPARATOR.to_string(),
        format!("Time: {}", format_timestamp(&report.timestamp)),
        format!("Average loops per minute: {:.2}", report.loops_per_minute),
        format!(
            "Total loops: {}, Total time: {}",
            report.total_loops,
            format_elapsed(report.elapsed)
        ),
        format!("Average write duration: {}", format_latency(report.avg_write)),
        format!("Average read duration: {}", format_latency(report.avg_read)),
    ]
}

/// Writes banner and window summaries to an output stream, normally stdout
pub struct StatsReporter<W: Write> {
    out: W,
}

impl<W: Write> StatsReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, start: &DateTime<Local>, window: Duration) {
        self.emit(&banner_lines(start, window));
    }

    pub fn window(&mut self, report: &WindowReport) {
        self.emit(&window_lines(report));
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Output failures are not benchmark failures
    fn emit(&mut self, lines: &[String]) {
        for line in lines {
            let _ = writeln!(self.out, "{}", line);
        }
        let _ = self.out.flush();
    }
}

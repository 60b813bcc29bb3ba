//! Write/read/verify loop
//!
//! Each iteration generates a fresh random block, writes it over the
//! scratch file, reads the file back and compares the two buffers. Timings
//! of verified iterations feed `RunningStats`; when the measurement window
//! closes the summary is printed and the accumulators start over. Any
//! failure ends the loop.

use std::convert::Infallible;
use std::io::{self, Stdout, Write};
use std::time::Instant;

use chrono::Local;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

use crate::bench::report::StatsReporter;
use crate::bench::stats::{RunningStats, WindowReport};
use crate::config::LoopConfig;
use crate::io::disk::{DiskIO, PlatformDiskIO};
use crate::io::random::DataGenerator;
use crate::util::units::{format_bytes, format_elapsed, format_latency};
use crate::{DiskLoopError, Result};

/// The benchmark loop and everything it owns
pub struct BenchmarkLoop<D = PlatformDiskIO, R = OsRng, W: Write = Stdout> {
    config: LoopConfig,
    disk_io: D,
    generator: DataGenerator<R>,
    reporter: StatsReporter<W>,
    stats: RunningStats,
}

impl BenchmarkLoop {
    /// Loop over the platform file system, OS entropy and stdout
    pub fn new(config: LoopConfig) -> Result<Self> {
        Self::with_parts(
            config,
            PlatformDiskIO::new(),
            DataGenerator::new(),
            StatsReporter::new(io::stdout()),
        )
    }
}

impl<D, R, W> BenchmarkLoop<D, R, W>
where
    D: DiskIO,
    R: RngCore + CryptoRng,
    W: Write,
{
    /// Assemble a loop from explicit storage, entropy and output parts
    pub fn with_parts(
        config: LoopConfig,
        disk_io: D,
        generator: DataGenerator<R>,
        reporter: StatsReporter<W>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            disk_io,
            generator,
            reporter,
            stats: RunningStats::new(),
        })
    }

    /// Print the banner, then iterate until something fails
    pub fn run(&mut self) -> Result<Infallible> {
        let started = Local::now();
        self.stats.reset(Instant::now());
        self.reporter.banner(&started, self.config.window);

        info!(
            "Looping over {} with {} blocks, reporting every {}",
            self.config.scratch_path.display(),
            format_bytes(self.config.block_size as u64),
            format_elapsed(self.config.window)
        );

        loop {
            self.run_iteration()?;
        }
    }

    /// Run one generate/write/read/verify cycle
    ///
    /// Returns the window summary when this iteration closed the
    /// measurement window; the summary has already been printed.
    pub fn run_iteration(&mut self) -> Result<Option<WindowReport>> {
        let data = self.generator.generate(self.config.block_size)?;
        let path = &self.config.scratch_path;

        let write_start = Instant::now();
        self.disk_io
            .write_file(path, &data)
            .map_err(|source| DiskLoopError::Write {
                path: path.clone(),
                source,
            })?;
        let write_time = write_start.elapsed();

        let read_start = Instant::now();
        let read_back = self
            .disk_io
            .read_file(path)
            .map_err(|source| DiskLoopError::Read {
                path: path.clone(),
                source,
            })?;
        let read_time = read_start.elapsed();

        verify_block(&data, &read_back)?;

        self.stats.record(write_time, read_time);
        debug!(
            loops = self.stats.loop_count(),
            write_us = write_time.as_micros() as u64,
            read_us = read_time.as_micros() as u64,
            "block verified"
        );

        let report = self.stats.take_report(Instant::now(), self.config.window);
        if let Some(report) = &report {
            self.reporter.window(report);
            if let (Some(write), Some(read)) = (report.write_range, report.read_range) {
                info!(
                    "Window closed after {} loops: write {}..{}, read {}..{}",
                    report.total_loops,
                    format_latency(write.min),
                    format_latency(write.max),
                    format_latency(read.min),
                    format_latency(read.max)
                );
            }
        }

        Ok(report)
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    pub fn disk_io(&self) -> &D {
        &self.disk_io
    }

    pub fn reporter(&self) -> &StatsReporter<W> {
        &self.reporter
    }
}

/// Compare the written block with the bytes read back
pub fn verify_block(written: &[u8], read: &[u8]) -> Result<()> {
    if written == read {
        return Ok(());
    }

    let offset = written
        .iter()
        .zip(read)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| written.len().min(read.len()));

    Err(DiskLoopError::DataMismatch {
        written: written.len(),
        read: read.len(),
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_loop(
        dir: &std::path::Path,
        block_size: usize,
        window: Duration,
    ) -> BenchmarkLoop<PlatformDiskIO, OsRng, Vec<u8>> {
        let config = LoopConfig::new()
            .with_scratch_path(dir.join("testfile.dat"))
            .with_block_size(block_size)
            .with_window(window);

        BenchmarkLoop::with_parts(
            config,
            PlatformDiskIO::new(),
            DataGenerator::new(),
            StatsReporter::new(Vec::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_block_equal() {
        assert!(verify_block(b"abcdef", b"abcdef").is_ok());
        assert!(verify_block(b"", b"").is_ok());
    }

    #[test]
    fn test_verify_block_content_difference() {
        match verify_block(b"abcdef", b"abcXef") {
            Err(DiskLoopError::DataMismatch { written, read, offset }) => {
                assert_eq!((written, read, offset), (6, 6, 3));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_block_length_difference() {
        match verify_block(b"abcdef", b"abc") {
            Err(DiskLoopError::DataMismatch { written, read, offset }) => {
                assert_eq!((written, read, offset), (6, 3, 3));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }

        match verify_block(b"ab", b"abcd") {
            Err(DiskLoopError::DataMismatch { offset, .. }) => assert_eq!(offset, 2),
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LoopConfig::new().with_block_size(0);
        let result = BenchmarkLoop::with_parts(
            config,
            PlatformDiskIO::new(),
            DataGenerator::new(),
            StatsReporter::new(Vec::new()),
        );
        assert!(matches!(result, Err(DiskLoopError::Config(_))));
    }

    #[test]
    fn test_iteration_counts_and_leaves_scratch_file() {
        let temp_dir = tempdir().unwrap();
        let mut bench = test_loop(temp_dir.path(), 4096, Duration::from_secs(3600));

        for _ in 0..3 {
            assert!(bench.run_iteration().unwrap().is_none());
        }

        assert_eq!(bench.stats().loop_count(), 3);
        let measured = bench.stats().write_total() + bench.stats().read_total();
        assert!(measured <= bench.stats().window_elapsed(Instant::now()));
        assert!(bench.reporter().get_ref().is_empty());

        let scratch = &bench.config().scratch_path;
        assert_eq!(std::fs::metadata(scratch).unwrap().len(), 4096);
    }

    #[test]
    fn test_iteration_closes_window() {
        let temp_dir = tempdir().unwrap();
        let mut bench = test_loop(temp_dir.path(), 10, Duration::from_millis(20));

        std::thread::sleep(Duration::from_millis(25));
        let report = bench.run_iteration().unwrap().expect("window should have closed");

        assert_eq!(report.total_loops, 1);
        assert!(report.elapsed >= Duration::from_millis(20));
        assert_eq!(bench.stats().loop_count(), 0);
        assert_eq!(bench.stats().write_total(), Duration::ZERO);
        assert_eq!(bench.stats().read_total(), Duration::ZERO);

        let output = String::from_utf8(bench.reporter().get_ref().clone()).unwrap();
        assert_eq!(output.lines().count(), 6);
    }
}

//! diskloop - Disk write/read/verify loop
//!
//! Repeatedly writes a block of random data to a scratch file, reads it
//! back, verifies it byte for byte, and reports average write and read
//! latency once per measurement window.

use std::path::PathBuf;
use std::time::Duration;

pub mod bench;
pub mod config;
pub mod io;
pub mod util;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DiskLoopError {
    /// Entropy source could not supply the requested bytes
    #[error("Failed to generate random data: {0}")]
    Generation(#[source] rand::Error),
    /// Writing the scratch file failed
    #[error("Failed to write data to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the scratch file back failed
    #[error("Failed to read data from file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Bytes read back differ from the bytes written
    #[error(
        "Data mismatch! wrote {written} bytes, read {read} bytes, first difference at byte {offset}"
    )]
    DataMismatch {
        written: usize,
        read: usize,
        offset: usize,
    },
    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for diskloop operations
pub type Result<T> = std::result::Result<T, DiskLoopError>;

// Common types and constants
pub const SCRATCH_FILE: &str = "testfile.dat";
pub const BLOCK_SIZE: usize = 100 * 1024;
pub const MEASURE_WINDOW: Duration = Duration::from_secs(60);

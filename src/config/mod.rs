//! Loop configuration
//!
//! The binary always runs with the fixed defaults; the builders exist so
//! tests can shrink the block size and the measurement window.

use std::path::PathBuf;
use std::time::Duration;
use crate::{DiskLoopError, Result, BLOCK_SIZE, MEASURE_WINDOW, SCRATCH_FILE};

/// Parameters of the write/read/verify loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Scratch file overwritten every iteration
    pub scratch_path: PathBuf,
    /// Size of the random block written each iteration (in bytes)
    pub block_size: usize,
    /// Measurement window after which statistics are reported and reset
    pub window: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            scratch_path: PathBuf::from(SCRATCH_FILE),
            block_size: BLOCK_SIZE,
            window: MEASURE_WINDOW,
        }
    }
}

impl LoopConfig {
    /// Create a new loop configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.scratch_path.as_os_str().is_empty() {
            return Err(DiskLoopError::Config(
                "Scratch file path must not be empty".to_string()
            ));
        }

        if self.block_size == 0 {
            return Err(DiskLoopError::Config(
                "Block size must be greater than 0".to_string()
            ));
        }

        if self.window.is_zero() {
            return Err(DiskLoopError::Config(
                "Measurement window must be greater than 0".to_string()
            ));
        }

        Ok(())
    }

    /// Set the scratch file path
    pub fn with_scratch_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scratch_path = path.into();
        self
    }

    /// Set the block size
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Set the measurement window
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }
}

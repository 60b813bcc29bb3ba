//! Random block generation backed by the operating system's entropy source

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use crate::{DiskLoopError, Result};

/// Produces freshly generated blocks of cryptographically random bytes
#[derive(Debug)]
pub struct DataGenerator<R = OsRng> {
    rng: R,
}

impl DataGenerator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for DataGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> DataGenerator<R> {
    /// Use a specific cryptographic RNG instead of `OsRng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `size` random bytes
    pub fn generate(&mut self, size: usize) -> Result<Vec<u8>> {
        let mut data = vec![0u8; size];
        self.rng
            .try_fill_bytes(&mut data)
            .map_err(DiskLoopError::Generation)?;
        Ok(data)
    }
}

//! I/O operations module
//!
//! Contains the whole-file storage seam used by the loop and the random
//! block generator.

pub mod disk;
pub mod random;


pub use disk::{DiskIO, PlatformDiskIO, create_disk_io};
pub use random::DataGenerator;

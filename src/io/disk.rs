use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Whole-file storage operations used by the benchmark loop
pub trait DiskIO {
    /// Replace the file's contents with `data`, creating it if absent
    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Read the file's entire current contents
    fn read_file(&mut self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Platform-specific disk I/O implementation
#[derive(Clone, Debug)]
pub struct PlatformDiskIO;

impl PlatformDiskIO {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformDiskIO {
    fn default() -> Self {
        Self::new()
    }
}

fn read_whole(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let size_hint = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut buffer = Vec::with_capacity(size_hint);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(windows)]
mod windows_impl {
    use super::*;

    impl DiskIO for PlatformDiskIO {
        fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            file.write_all(data)
        }

        fn read_file(&mut self, path: &Path) -> io::Result<Vec<u8>> {
            read_whole(path)
        }
    }
}

#[cfg(unix)]
mod unix_impl {
    use super::*;
    use std::os::unix::fs::OpenOptionsExt;

    /// rw-r--r--
    const SCRATCH_MODE: u32 = 0o644;

    impl DiskIO for PlatformDiskIO {
        fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(SCRATCH_MODE)
                .open(path)?;
            file.write_all(data)
        }

        fn read_file(&mut self, path: &Path) -> io::Result<Vec<u8>> {
            read_whole(path)
        }
    }
}

/// Create a new platform-specific disk I/O instance
pub fn create_disk_io() -> PlatformDiskIO {
    PlatformDiskIO::new()
}

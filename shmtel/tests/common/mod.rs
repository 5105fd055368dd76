//! Shared-memory stand-in for the platform side of a channel.

#![allow(dead_code)]

use nix::fcntl::OFlag;
use nix::sys::mman::{shm_open, shm_unlink};
use nix::sys::stat::Mode;
use nix::unistd::ftruncate;
use shmtel_channel::ChannelTable;
use std::fs::File;
use std::os::unix::fs::FileExt;

/// A real POSIX shared-memory object, unlinked on drop.
pub struct ShmFixture {
    pub name: String,
    file: File,
}

impl ShmFixture {
    /// Create `/shmtel_cmd_<tag>_<pid>` with `size` zeroed bytes.
    pub fn create(tag: &str, size: usize) -> Self {
        let name = format!("/shmtel_cmd_{}_{}", tag, std::process::id());
        // Leftover from an aborted run.
        let _ = shm_unlink(name.as_str());
        let fd = shm_open(
            name.as_str(),
            OFlag::O_CREAT | OFlag::O_EXCL | OFlag::O_RDWR,
            Mode::S_IRUSR | Mode::S_IWUSR,
        )
        .expect("shm_open");
        ftruncate(&fd, size as i64).expect("ftruncate");
        Self {
            name,
            file: File::from(fd),
        }
    }

    /// Write through the object's descriptor, as the platform would.
    pub fn fill(&self, offset: u64, bytes: &[u8]) {
        self.file.write_all_at(bytes, offset).expect("write shm");
    }

    /// Read the object through its descriptor, bypassing any mapping.
    pub fn contents(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.file.read_exact_at(&mut buf, 0).expect("read shm");
        buf
    }
}

impl Drop for ShmFixture {
    fn drop(&mut self) {
        let _ = shm_unlink(self.name.as_str());
    }
}

/// One-entry channel table for `name`.
pub fn table_for(name: &str, size: usize, role: i64) -> ChannelTable {
    ChannelTable::from_toml(&format!("[\"{name}\"]\nsize = {size}\nrole = {role}\n"))
        .expect("valid table")
}

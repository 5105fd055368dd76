//! Shared-memory channel handle.
//!
//! A [`Channel`] is either fully closed or fully open. When open it owns
//! the file descriptor of the POSIX shared-memory object and a read-write
//! mapping of exactly the declared size. Nothing else is held, so there is
//! no half-open state to reason about.
//!
//! Reads take no lock. The platform may be writing concurrently, and a
//! snapshot can therefore mix old and new bytes. Callers needing atomic
//! records must build that on top of this layer.

use crate::config::{ChannelSpec, ChannelTable};
use crate::error::{ChannelError, ChannelResult};
use crate::role::Role;
use memmap2::{MmapMut, MmapOptions};
use nix::fcntl::OFlag;
use nix::sys::mman::shm_open;
use nix::sys::stat::Mode;
use shmtel_codec::{Record, RecordKind, Telemetry};
use std::fs::File;
use tracing::{debug, warn};

/// Resources held while a channel is open. Field order is drop order:
/// the mapping goes before the descriptor.
#[derive(Debug)]
struct OpenRegion {
    spec: ChannelSpec,
    open_role: Role,
    map: MmapMut,
    _file: File,
}

/// A single named region, opened on demand against a channel table.
///
/// # Example
///
/// ```rust,no_run
/// use shmtel_channel::{Channel, ChannelTable, Role};
/// use shmtel_codec::ProcessStat;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = ChannelTable::load(Path::new("/etc/shmtel/channels.toml"))?;
/// let mut channel = Channel::new(table);
/// channel.open("/procstat", Role::PlatformOwned)?;
/// let stat: ProcessStat = channel.read_record()?;
/// println!("{} processes alive", stat.alive_count());
/// channel.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Channel {
    table: ChannelTable,
    region: Option<OpenRegion>,
}

impl Channel {
    /// Create a closed channel bound to `table`.
    pub fn new(table: ChannelTable) -> Self {
        Self {
            table,
            region: None,
        }
    }

    /// Open the region called `name` as `role`.
    ///
    /// The region must already exist and be at least as large as its
    /// configured size; this never creates one. On any failure the channel
    /// stays closed and nothing acquired along the way is kept.
    pub fn open(&mut self, name: &str, role: Role) -> ChannelResult<()> {
        if let Some(region) = &self.region {
            return Err(ChannelError::AlreadyOpen {
                name: region.spec.name.clone(),
            });
        }

        let spec = self.table.spec(name)?;

        let fd = shm_open(name, OFlag::O_RDWR, Mode::empty()).map_err(|source| {
            ChannelError::OpenFailed {
                name: name.to_string(),
                source,
            }
        })?;
        let file = File::from(fd);

        let actual = file
            .metadata()
            .map_err(|e| ChannelError::MapFailed {
                name: name.to_string(),
                reason: e.to_string(),
            })?
            .len();
        if actual < spec.size as u64 {
            warn!(
                channel = name,
                actual,
                declared = spec.size,
                "Region smaller than declared size"
            );
            return Err(ChannelError::MapFailed {
                name: name.to_string(),
                reason: format!("region is {actual} bytes, {} declared", spec.size),
            });
        }

        // SAFETY: the object is at least `spec.size` bytes (checked above) and
        // the mapping lives no longer than `file`. Concurrent writers in other
        // processes are part of the channel contract; all access goes through
        // byte copies.
        let map = unsafe { MmapOptions::new().len(spec.size).map_mut(&file) }.map_err(|e| {
            ChannelError::MapFailed {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(
            channel = name,
            size = spec.size,
            configured = %spec.role,
            opened = %role,
            "Channel opened"
        );

        self.region = Some(OpenRegion {
            spec,
            open_role: role,
            map,
            _file: file,
        });
        Ok(())
    }

    /// Release the mapping, then the descriptor. No-op when already closed.
    pub fn close(&mut self) {
        if let Some(region) = self.region.take() {
            debug!(channel = %region.spec.name, "Channel closed");
        }
    }

    /// Copy of the whole region, exactly `declared_size` bytes.
    pub fn read(&self) -> ChannelResult<Vec<u8>> {
        let region = self.region()?;
        Ok(region.map[..].to_vec())
    }

    /// Copy the region into `buf`, returning the number of bytes copied.
    ///
    /// At most `min(buf.len(), declared_size)` bytes are copied.
    pub fn read_into(&self, buf: &mut [u8]) -> ChannelResult<usize> {
        let region = self.region()?;
        let n = buf.len().min(region.map.len());
        buf[..n].copy_from_slice(&region.map[..n]);
        Ok(n)
    }

    /// Write `bytes` at offset 0.
    ///
    /// Only a handle opened with the configured role may write. Bytes past
    /// `bytes.len()` keep their previous contents.
    pub fn write(&mut self, bytes: &[u8]) -> ChannelResult<()> {
        let region = self.region.as_mut().ok_or(ChannelError::NotOpen)?;

        if region.open_role != region.spec.role {
            warn!(
                channel = %region.spec.name,
                configured = %region.spec.role,
                opened = %region.open_role,
                "Write refused: role mismatch"
            );
            return Err(ChannelError::RoleMismatch {
                name: region.spec.name.clone(),
                configured: region.spec.role,
                opened: region.open_role,
            });
        }

        if bytes.len() > region.map.len() {
            return Err(ChannelError::BufferTooLarge {
                name: region.spec.name.clone(),
                len: bytes.len(),
                capacity: region.map.len(),
            });
        }

        region.map[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Decode the current contents as `R`.
    pub fn read_record<R: Record>(&self) -> ChannelResult<R> {
        let region = self.region()?;
        Ok(R::decode(&region.map)?)
    }

    /// Decode the current contents as the layout named by `kind`.
    pub fn read_telemetry(&self, kind: RecordKind) -> ChannelResult<Telemetry> {
        let region = self.region()?;
        Ok(Telemetry::decode(kind, &region.map)?)
    }

    /// Encode `record` and write it at offset 0.
    pub fn write_record<R: Record>(&mut self, record: &R) -> ChannelResult<()> {
        let bytes = record.encode()?;
        self.write(&bytes)
    }

    /// Swap the channel table. Only allowed while closed.
    pub fn replace_table(&mut self, table: ChannelTable) -> ChannelResult<()> {
        if let Some(region) = &self.region {
            return Err(ChannelError::AlreadyOpen {
                name: region.spec.name.clone(),
            });
        }
        self.table = table;
        Ok(())
    }

    /// Table entries are resolved against.
    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    /// True while a mapping is held.
    pub fn is_open(&self) -> bool {
        self.region.is_some()
    }

    /// Name of the open region.
    pub fn name(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.spec.name.as_str())
    }

    /// Declared size of the open region.
    pub fn declared_size(&self) -> Option<usize> {
        self.region.as_ref().map(|r| r.spec.size)
    }

    /// Role the open region is configured with.
    pub fn configured_role(&self) -> Option<Role> {
        self.region.as_ref().map(|r| r.spec.role)
    }

    /// Role passed to `open`.
    pub fn open_role(&self) -> Option<Role> {
        self.region.as_ref().map(|r| r.open_role)
    }

    fn region(&self) -> ChannelResult<&OpenRegion> {
        self.region.as_ref().ok_or(ChannelError::NotOpen)
    }
}

impl Drop for Channel {
    fn drop(&mut self) {
        self.close();
    }
}

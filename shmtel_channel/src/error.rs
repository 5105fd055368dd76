//! Error types for channel operations

use crate::config::ConfigError;
use crate::role::Role;
use shmtel_codec::CodecError;
use thiserror::Error;

/// Broad class of a [`ChannelError`], for callers deciding whether to skip a
/// cycle, log or escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Channel table is missing the entry or the entry is malformed
    Configuration,
    /// The OS object or its mapping could not be acquired
    Resource,
    /// Operation not valid in the channel's current state
    State,
    /// Bytes did not fit a record layout
    Codec,
}

/// Errors that can occur during channel operations
#[derive(Error, Debug)]
pub enum ChannelError {
    /// No entry for the channel in the table
    #[error("No configuration entry for channel {name}")]
    ConfigMissing {
        /// Channel name
        name: String,
    },

    /// Entry has no `size` key
    #[error("Channel {name} has no size")]
    SizeMissing {
        /// Channel name
        name: String,
    },

    /// Entry's `size` is not a positive integer
    #[error("Channel {name} has invalid size {value}")]
    SizeInvalid {
        /// Channel name
        name: String,
        /// Offending value as written
        value: String,
    },

    /// Entry has no integer `role` (or `kind`) key
    #[error("Channel {name} has no integer role")]
    RoleMissing {
        /// Channel name
        name: String,
    },

    /// Whole-file configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The shared-memory object could not be opened
    #[error("Failed to open shared memory object {name}: {source}")]
    OpenFailed {
        /// Channel name
        name: String,
        /// Source nix error
        source: nix::Error,
    },

    /// The object could not be mapped at its declared size
    #[error("Failed to map channel {name}: {reason}")]
    MapFailed {
        /// Channel name
        name: String,
        /// Why mapping failed
        reason: String,
    },

    /// Operation needs an open channel
    #[error("Channel is not open")]
    NotOpen,

    /// `open` called on a channel that already holds a mapping
    #[error("Channel already open on {name}")]
    AlreadyOpen {
        /// Name of the region currently held
        name: String,
    },

    /// Write attempted with a role other than the configured one
    #[error("Channel {name} is configured {configured}, opened as {opened}")]
    RoleMismatch {
        /// Channel name
        name: String,
        /// Role from the channel table
        configured: Role,
        /// Role passed to `open`
        opened: Role,
    },

    /// Write payload longer than the mapping
    #[error("Write of {len} bytes exceeds channel {name} size {capacity}")]
    BufferTooLarge {
        /// Channel name
        name: String,
        /// Payload length
        len: usize,
        /// Declared channel size
        capacity: usize,
    },

    /// Record encode/decode failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl ChannelError {
    /// Which of the four failure classes this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChannelError::ConfigMissing { .. }
            | ChannelError::SizeMissing { .. }
            | ChannelError::SizeInvalid { .. }
            | ChannelError::RoleMissing { .. }
            | ChannelError::Config(_) => ErrorCategory::Configuration,
            ChannelError::OpenFailed { .. } | ChannelError::MapFailed { .. } => {
                ErrorCategory::Resource
            }
            ChannelError::NotOpen
            | ChannelError::AlreadyOpen { .. }
            | ChannelError::RoleMismatch { .. }
            | ChannelError::BufferTooLarge { .. } => ErrorCategory::State,
            ChannelError::Codec(_) => ErrorCategory::Codec,
        }
    }
}

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

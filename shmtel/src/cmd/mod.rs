//! Subcommand implementations.
//!
//! Each command takes the loaded channel table and writes its output to a
//! caller-supplied sink so it can be exercised without a terminal.

pub mod dump;
pub mod list;
pub mod log;
pub mod send;
pub mod show;
pub mod write;

use shmtel_codec::RecordKind;
use shmtel_codec::channels::kind_for_channel;
use thiserror::Error;

/// Result type shared by the subcommands.
pub type CmdResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Argument problems detected after parsing.
#[derive(Debug, Error)]
pub enum CliError {
    /// Channel name gives no hint of its record layout
    #[error("Cannot infer record kind for channel {channel}; pass --as KIND")]
    UnknownKind {
        /// Channel name
        channel: String,
    },

    /// `--as` given, but not once per channel
    #[error("{kinds} --as values for {channels} channels; give one per channel or none")]
    KindCount {
        /// Channels named on the command line
        channels: usize,
        /// `--as` values given
        kinds: usize,
    },

    /// Nothing to write
    #[error("Empty payload for channel {channel}")]
    EmptyPayload {
        /// Channel name
        channel: String,
    },
}

/// Pick the record kind for `channel`: the explicit one, else the kind its
/// well-known name carries.
pub fn resolve_kind(channel: &str, explicit: Option<RecordKind>) -> Result<RecordKind, CliError> {
    explicit
        .or_else(|| kind_for_channel(channel))
        .ok_or_else(|| CliError::UnknownKind {
            channel: channel.to_string(),
        })
}

//! `shmtel write`: raw bytes into a user-owned channel, echoed back as a
//! hex dump of what the region now holds.

use super::dump::hexdump;
use super::{CliError, CmdResult};
use crate::cli::WriteArgs;
use shmtel_channel::{Channel, ChannelTable, Role};
use std::io::Write;
use tracing::info;

/// Bytes to write, from `--hex` or `--u32`.
pub fn payload(args: &WriteArgs) -> CmdResult<Vec<u8>> {
    let bytes = match (&args.hex, args.value) {
        (Some(text), _) => {
            let digits: String = text.split_whitespace().collect();
            let digits = digits.strip_prefix("0x").unwrap_or(&digits);
            hex::decode(digits)?
        }
        (None, Some(value)) => value.to_le_bytes().to_vec(),
        (None, None) => Vec::new(),
    };
    if bytes.is_empty() {
        return Err(CliError::EmptyPayload {
            channel: args.channel.clone(),
        }
        .into());
    }
    Ok(bytes)
}

/// Write at offset 0 as `UserOwned`, then dump the written span as read
/// back from the region. Returns that read-back span.
pub fn run(table: ChannelTable, args: &WriteArgs, out: &mut impl Write) -> CmdResult<Vec<u8>> {
    let bytes = payload(args)?;

    let mut channel = Channel::new(table);
    channel.open(&args.channel, Role::UserOwned)?;
    let readback = channel.write(&bytes).and_then(|()| channel.read());
    channel.close();

    let mut readback = readback?;
    readback.truncate(bytes.len());
    info!(channel = %args.channel, len = bytes.len(), "Payload written");

    hexdump(&readback, out)?;
    Ok(readback)
}

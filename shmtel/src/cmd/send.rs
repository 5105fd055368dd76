//! `shmtel send-command`

use super::CmdResult;
use crate::cli::SendArgs;
use shmtel_channel::{Channel, ChannelTable, Role};
use shmtel_codec::AutopilotCommand;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Largest integer an `f32` holds exactly.
const F32_EXACT: u128 = 1 << 24;

/// Command stamp: wall-clock milliseconds wrapped to stay exact in an `f32`.
///
/// The autopilot bridge only forwards a command whose timestamp differs from
/// the previous one, so consecutive commands must get distinct stamps.
pub fn command_timestamp() -> f32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % F32_EXACT) as f32
}

pub fn build_command(args: &SendArgs) -> AutopilotCommand {
    AutopilotCommand {
        timestamp: args.timestamp.unwrap_or_else(command_timestamp),
        vx: args.vx,
        vy: args.vy,
        vz: args.vz,
        yaw_rate: args.yaw_rate,
    }
}

/// Write the command as the user-owned side of the channel.
pub fn run(table: ChannelTable, args: &SendArgs) -> CmdResult<AutopilotCommand> {
    let command = build_command(args);
    let mut channel = Channel::new(table);
    channel.open(&args.channel, Role::UserOwned)?;
    let written = channel.write_record(&command);
    channel.close();
    written?;

    info!(
        channel = %args.channel,
        vx = command.vx,
        vy = command.vy,
        vz = command.vz,
        yaw_rate = command.yaw_rate,
        "Command sent"
    );
    Ok(command)
}

//! `shmtel show`

use super::{CmdResult, resolve_kind};
use crate::cli::ShowArgs;
use crate::columns::detail_columns;
use shmtel_channel::{Channel, ChannelTable, Role};
use shmtel_codec::Telemetry;
use std::io::Write;
use tracing::debug;

/// Open, read once, close.
pub fn read_once(table: ChannelTable, args: &ShowArgs) -> CmdResult<Telemetry> {
    let kind = resolve_kind(&args.channel, args.kind)?;
    let mut channel = Channel::new(table);
    channel.open(&args.channel, Role::PlatformOwned)?;
    let record = channel.read_telemetry(kind);
    channel.close();
    debug!(channel = %args.channel, %kind, "Read one record");
    Ok(record?)
}

pub fn run(table: ChannelTable, args: &ShowArgs, json: bool, out: &mut impl Write) -> CmdResult {
    let record = read_once(table, args)?;
    print_record(&args.channel, &record, json, out)
}

/// Pretty JSON, or `NAME: value` lines under a title.
pub fn print_record(
    channel: &str,
    record: &Telemetry,
    json: bool,
    out: &mut impl Write,
) -> CmdResult {
    if json {
        serde_json::to_writer_pretty(&mut *out, record)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} ({})", channel, record.kind())?;
    let cols = detail_columns(record);
    let width = cols.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, value) in cols {
        writeln!(out, "  {name:<width$}  {value}")?;
    }
    Ok(())
}

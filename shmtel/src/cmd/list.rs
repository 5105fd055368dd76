//! `shmtel list`

use super::CmdResult;
use serde_json::json;
use shmtel_channel::ChannelTable;
use shmtel_codec::channels::kind_for_channel;
use std::io::Write;

pub fn run(table: &ChannelTable, json: bool, out: &mut impl Write) -> CmdResult {
    if json {
        let rows: Vec<_> = table
            .iter()
            .map(|(name, spec)| match spec {
                Ok(spec) => json!({
                    "name": name,
                    "size": spec.size,
                    "role": spec.role,
                    "kind": kind_for_channel(name).map(|k| k.short_name()),
                    "path": spec.path,
                }),
                Err(e) => json!({ "name": name, "error": e.to_string() }),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<16} {:>10} {:<9} {:<13} STATUS", "CHANNEL", "SIZE", "ROLE", "KIND")?;
    for (name, spec) in table.iter() {
        let kind = kind_for_channel(name).map_or("-", |k| k.short_name());
        match spec {
            Ok(spec) => writeln!(
                out,
                "{:<16} {:>10} {:<9} {:<13} ok",
                name,
                spec.size,
                spec.role.to_string(),
                kind
            )?,
            Err(e) => writeln!(out, "{:<16} {:>10} {:<9} {:<13} {}", name, "-", "-", kind, e)?,
        }
    }
    Ok(())
}

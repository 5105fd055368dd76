//! `shmtel dump`

use super::CmdResult;
use crate::cli::DumpArgs;
use shmtel_channel::{Channel, ChannelTable, Role};
use std::io::Write;

const ROW: usize = 16;

pub fn run(table: ChannelTable, args: &DumpArgs, out: &mut impl Write) -> CmdResult {
    let mut channel = Channel::new(table);
    channel.open(&args.channel, Role::PlatformOwned)?;
    let snapshot = channel.read();
    channel.close();

    let snapshot = snapshot?;
    let len = args.len.unwrap_or(snapshot.len()).min(snapshot.len());
    hexdump(&snapshot[..len], out)?;
    Ok(())
}

/// `offset  hex bytes  |ascii|`, sixteen bytes per row.
pub fn hexdump(bytes: &[u8], out: &mut impl Write) -> std::io::Result<()> {
    for (row, chunk) in bytes.chunks(ROW).enumerate() {
        write!(out, "{:08x}  ", row * ROW)?;
        for i in 0..ROW {
            match chunk.get(i) {
                Some(b) => write!(out, "{b:02x} ")?,
                None => write!(out, "   ")?,
            }
            if i == 7 {
                write!(out, " ")?;
            }
        }
        let ascii: String = chunk
            .iter()
            .map(|b| {
                if b.is_ascii_graphic() || *b == b' ' {
                    *b as char
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(out, " |{ascii}|")?;
    }
    Ok(())
}

//! Command-line arguments.

use clap::{Args as ClapArgs, Parser, Subcommand};
use shmtel_codec::RecordKind;
use shmtel_codec::channels;
use std::path::PathBuf;

/// Inspect, log and command shared-memory telemetry channels
#[derive(Parser, Debug)]
#[command(name = "shmtel")]
#[command(version)]
#[command(about = "Inspect, log and command shared-memory telemetry channels")]
#[command(long_about = None)]
pub struct Args {
    /// Channel table (TOML)
    #[arg(
        short,
        long,
        global = true,
        env = "SHMTEL_CONFIG",
        default_value = "/etc/shmtel/channels.toml"
    )]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON output (records and logs)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured channels and whether their entries are valid
    List,
    /// Read one record and print it
    Show(ShowArgs),
    /// Hex dump of a channel snapshot
    Dump(DumpArgs),
    /// Poll one or more channels and append one CSV row per sample
    Log(LogArgs),
    /// Write raw bytes to a user-owned channel and read them back
    Write(WriteArgs),
    /// Write a velocity command to the autopilot channel
    SendCommand(SendArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ShowArgs {
    /// Channel name, e.g. /procstat
    pub channel: String,

    /// Record kind; inferred from well-known channel names when omitted
    #[arg(long = "as", value_name = "KIND")]
    pub kind: Option<RecordKind>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DumpArgs {
    pub channel: String,

    /// Only dump the first N bytes
    #[arg(long, value_name = "N")]
    pub len: Option<usize>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LogArgs {
    /// Channels sampled into each row, in column order
    #[arg(required = true, value_name = "CHANNEL")]
    pub channels: Vec<String>,

    /// Record kind of each channel, in the same order; inferred from
    /// well-known names when omitted
    #[arg(long = "as", value_name = "KIND")]
    pub kinds: Vec<RecordKind>,

    /// CSV file to append to (created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Delay between samples
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after N rows (runs until Ctrl-C when omitted)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Field delimiter: one ASCII punctuation character, or `tab`
    #[arg(long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() && !b.is_ascii_alphanumeric() && *b != b'"' => Ok(*b),
            _ => Err(format!("'{s}' is not a single punctuation character or `tab`")),
        },
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WriteArgs {
    /// Channel name, e.g. /sample
    pub channel: String,

    /// Payload as hex digits, e.g. 01000000
    #[arg(long, value_name = "HEX", required_unless_present = "value", conflicts_with = "value")]
    pub hex: Option<String>,

    /// Payload as one little-endian u32
    #[arg(long = "u32", value_name = "N")]
    pub value: Option<u32>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SendArgs {
    /// Forward velocity, m/s
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub vx: f32,

    /// Rightward velocity, m/s
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub vy: f32,

    /// Downward velocity, m/s
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub vz: f32,

    /// Yaw rate, rad/s
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub yaw_rate: f32,

    /// Explicit command timestamp (defaults to a wrapping millisecond clock)
    #[arg(long, allow_negative_numbers = true)]
    pub timestamp: Option<f32>,

    #[arg(long, default_value = channels::AUTOPILOT_SEND)]
    pub channel: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn show_with_kind() {
        let args =
            Args::try_parse_from(["shmtel", "show", "/x", "--as", "gnss", "--json"]).unwrap();
        assert!(args.json);
        match args.command {
            Command::Show(show) => {
                assert_eq!(show.channel, "/x");
                assert_eq!(show.kind, Some(RecordKind::GnssFix));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn send_accepts_negative_values() {
        let args = Args::try_parse_from([
            "shmtel",
            "send-command",
            "--vx",
            "-1.5",
            "--yaw-rate",
            "0.2",
        ])
        .unwrap();
        match args.command {
            Command::SendCommand(send) => {
                assert_eq!(send.vx, -1.5);
                assert_eq!(send.yaw_rate, 0.2);
                assert_eq!(send.channel, "/mavlink_send");
                assert_eq!(send.timestamp, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn log_requires_out() {
        assert!(Args::try_parse_from(["shmtel", "log", "/procstat"]).is_err());
    }

    #[test]
    fn log_several_channels_tab_separated() {
        let args = Args::try_parse_from([
            "shmtel",
            "log",
            "/resstat",
            "/failsafeinfo",
            "--out",
            "resource.csv",
            "--delimiter",
            "tab",
            "--count",
            "3",
        ])
        .unwrap();
        match args.command {
            Command::Log(log) => {
                assert_eq!(log.channels, ["/resstat", "/failsafeinfo"]);
                assert!(log.kinds.is_empty());
                assert_eq!(log.delimiter, b'\t');
                assert_eq!(log.count, Some(3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn log_defaults_to_comma() {
        let args = Args::try_parse_from(["shmtel", "log", "/sample", "--as", "ping", "-o", "x"])
            .unwrap();
        match args.command {
            Command::Log(log) => {
                assert_eq!(log.delimiter, b',');
                assert_eq!(log.kinds, [RecordKind::HeartbeatPing]);
                assert_eq!(log.count, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn log_count_zero_rejected() {
        assert!(
            Args::try_parse_from(["shmtel", "log", "/procstat", "-o", "x", "--count", "0"])
                .is_err()
        );
    }

    #[test]
    fn delimiter_values() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("x").is_err());
        assert!(parse_delimiter("\"").is_err());
    }

    #[test]
    fn write_takes_exactly_one_payload() {
        let args = Args::try_parse_from(["shmtel", "write", "/sample", "--u32", "1"]).unwrap();
        match args.command {
            Command::Write(w) => {
                assert_eq!(w.value, Some(1));
                assert_eq!(w.hex, None);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Args::try_parse_from(["shmtel", "write", "/sample"]).is_err());
        assert!(
            Args::try_parse_from(["shmtel", "write", "/sample", "--u32", "1", "--hex", "01"])
                .is_err()
        );
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(Args::try_parse_from(["shmtel", "show", "/x", "--as", "lidar"]).is_err());
    }
}

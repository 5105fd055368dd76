//! # Shmtel Binary
//!
//! # Usage
//!
//! ```bash
//! # What is configured
//! shmtel --config config/channels.toml list
//!
//! # One-shot read of a well-known channel
//! shmtel show /resstat
//! shmtel show /sample --as ping --json
//!
//! # Raw bytes
//! shmtel dump /gnss --len 64
//!
//! # Append one row per second until Ctrl-C
//! shmtel log /procstat --out process_status.csv
//!
//! # Resource load and failsafe levels in one tab-separated row
//! shmtel log /resstat /failsafeinfo --out resource.csv --delimiter tab
//!
//! # Raw value into the user-owned scratch channel
//! shmtel write /sample --u32 1
//!
//! # Velocity command to the autopilot
//! shmtel send-command --vx 1.0 --vy 0 --vz -0.5 --yaw-rate 0.1
//! ```

#![deny(warnings)]

use clap::Parser;
use shmtel::cli::{Args, Command};
use shmtel::cmd;
use shmtel_channel::ChannelTable;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        error!("shmtel failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_tracing(&args);

    debug!("Loading channel table from {}", args.config.display());
    let table = ChannelTable::load(&args.config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::List => cmd::list::run(&table, args.json, &mut out)?,
        Command::Show(show) => cmd::show::run(table, show, args.json, &mut out)?,
        Command::Dump(dump) => cmd::dump::run(table, dump, &mut out)?,
        Command::Log(log) => cmd::log::run(table, log)?,
        Command::Write(write) => {
            cmd::write::run(table, write, &mut out)?;
        }
        Command::SendCommand(send) => {
            cmd::send::run(table, send)?;
        }
    }
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so record output on stdout stays clean.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

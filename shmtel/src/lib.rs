//! # Shmtel
//!
//! Caller-side tooling for shared-memory telemetry channels: list the
//! channel table, print or hex-dump a snapshot, poll a channel into a CSV
//! log, and send velocity commands to the autopilot channel.

pub mod cli;
pub mod cmd;
pub mod columns;

//! `shmtel log`: poll channels into an append-only CSV file.
//!
//! Each cycle opens every source channel in turn, takes one snapshot, closes
//! it again and appends a single row: the local wall-clock time followed by
//! the columns of each source, in order. The header is written once, from
//! the first good sample, and only when the file is empty. A failed cycle
//! is logged and skipped; the next tick tries again.

use super::{CliError, CmdResult, resolve_kind};
use crate::cli::LogArgs;
use crate::columns::columns;
use chrono::Local;
use csv::{QuoteStyle, WriterBuilder};
use shmtel_channel::{Channel, ChannelTable, Role};
use shmtel_codec::{RecordKind, Telemetry};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Timestamp format of the first column.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A channel sampled into each row and the layout it is decoded as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Channel name
    pub channel: String,
    /// Record layout of the channel
    pub kind: RecordKind,
}

impl Source {
    pub fn new(channel: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            channel: channel.into(),
            kind,
        }
    }
}

/// Pair channels with their `--as` kinds: none given means every kind is
/// inferred from the channel name, otherwise one per channel.
pub fn resolve_sources(
    channels: &[String],
    kinds: &[RecordKind],
) -> Result<Vec<Source>, CliError> {
    if kinds.is_empty() {
        return channels
            .iter()
            .map(|c| resolve_kind(c, None).map(|k| Source::new(c.as_str(), k)))
            .collect();
    }
    if kinds.len() != channels.len() {
        return Err(CliError::KindCount {
            channels: channels.len(),
            kinds: kinds.len(),
        });
    }
    Ok(channels
        .iter()
        .zip(kinds)
        .map(|(c, k)| Source::new(c.as_str(), *k))
        .collect())
}

/// One or more channels feeding one CSV file.
pub struct Logger {
    channel: Channel,
    sources: Vec<Source>,
    label: String,
    writer: csv::Writer<File>,
    header_written: bool,
}

impl Logger {
    /// Open `path` for appending, creating it when missing.
    pub fn create(
        table: ChannelTable,
        sources: Vec<Source>,
        path: &Path,
        delimiter: u8,
    ) -> CmdResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let header_written = file.metadata()?.len() > 0;
        let writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Always)
            // Process tables change width with their count.
            .flexible(true)
            .from_writer(file);

        let label = sources
            .iter()
            .map(|s| s.channel.as_str())
            .collect::<Vec<_>>()
            .join(",");

        Ok(Self {
            channel: Channel::new(table),
            sources,
            label,
            writer,
            header_written,
        })
    }

    /// Take one sample of every source and append it as one row.
    ///
    /// Nothing is written unless every source was read.
    pub fn sample(&mut self) -> CmdResult {
        let mut cols = Vec::new();
        for source in &self.sources {
            let record = read_source(&mut self.channel, source)?;
            cols.extend(columns(&record));
        }

        if !self.header_written {
            let header = std::iter::once("TIME").chain(cols.iter().map(|(n, _)| n.as_str()));
            self.writer.write_record(header)?;
            self.header_written = true;
        }

        let now = Local::now().format(TIME_FORMAT).to_string();
        let row = std::iter::once(now.as_str()).chain(cols.iter().map(|(_, v)| v.as_str()));
        self.writer.write_record(row)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn read_source(channel: &mut Channel, source: &Source) -> CmdResult<Telemetry> {
    channel.open(&source.channel, Role::PlatformOwned)?;
    let record = channel.read_telemetry(source.kind);
    channel.close();
    Ok(record?)
}

/// Sample every `interval` until `running` clears or `count` rows are written.
///
/// Returns the number of rows written.
pub fn poll(
    logger: &mut Logger,
    interval: Duration,
    count: Option<u64>,
    running: &AtomicBool,
) -> u64 {
    let done = |rows: u64| count.is_some_and(|n| rows >= n);
    let mut rows = 0u64;
    while running.load(Ordering::SeqCst) && !done(rows) {
        match logger.sample() {
            Ok(()) => rows += 1,
            Err(e) => warn!(channels = %logger.label, "Sample skipped: {}", e),
        }
        if done(rows) {
            break;
        }
        std::thread::sleep(interval);
    }
    debug!(channels = %logger.label, rows, "Polling stopped");
    rows
}

pub fn run(table: ChannelTable, args: &LogArgs) -> CmdResult {
    let sources = resolve_sources(&args.channels, &args.kinds)?;
    let mut logger = Logger::create(table, sources, &args.out, args.delimiter)?;

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        flag.store(false, Ordering::SeqCst);
    })?;

    info!(
        channels = %logger.label,
        out = %args.out.display(),
        interval_ms = args.interval_ms,
        "Logging started"
    );
    let rows = poll(
        &mut logger,
        Duration::from_millis(args.interval_ms),
        args.count,
        &running,
    );
    info!(rows, "Logging finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn absent_logger(path: &Path) -> Logger {
        let table =
            ChannelTable::from_toml("[\"/shmtel_log_absent\"]\nsize = 4\nrole = 1\n").unwrap();
        let sources = vec![Source::new("/shmtel_log_absent", RecordKind::HeartbeatPing)];
        Logger::create(table, sources, path, b',').unwrap()
    }

    #[test]
    fn failed_cycles_are_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut logger = absent_logger(&path);

        assert!(logger.sample().is_err());

        let running = AtomicBool::new(true);
        // Nothing succeeds, so stop the loop from outside after a few ticks.
        let rows = std::thread::scope(|s| {
            s.spawn(|| {
                std::thread::sleep(Duration::from_millis(30));
                running.store(false, Ordering::SeqCst);
            });
            poll(&mut logger, Duration::from_millis(5), Some(1), &running)
        });
        assert_eq!(rows, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn stopped_flag_means_no_samples() {
        let dir = tempdir().unwrap();
        let mut logger = absent_logger(&dir.path().join("out.csv"));
        let running = AtomicBool::new(false);
        assert_eq!(poll(&mut logger, Duration::ZERO, None, &running), 0);
    }

    #[test]
    fn zero_count_means_no_samples() {
        let dir = tempdir().unwrap();
        let mut logger = absent_logger(&dir.path().join("out.csv"));
        let running = AtomicBool::new(true);
        assert_eq!(poll(&mut logger, Duration::ZERO, Some(0), &running), 0);
    }

    #[test]
    fn sources_inferred_or_paired() {
        let channels = vec!["/resstat".to_string(), "/failsafeinfo".to_string()];
        assert_eq!(
            resolve_sources(&channels, &[]).unwrap(),
            [
                Source::new("/resstat", RecordKind::ResourceStat),
                Source::new("/failsafeinfo", RecordKind::FailsafeInfo),
            ]
        );

        let paired = resolve_sources(
            &channels,
            &[RecordKind::HeartbeatPing, RecordKind::RangeFinder],
        )
        .unwrap();
        assert_eq!(paired[1], Source::new("/failsafeinfo", RecordKind::RangeFinder));

        assert!(matches!(
            resolve_sources(&channels, &[RecordKind::HeartbeatPing]),
            Err(CliError::KindCount { channels: 2, kinds: 1 })
        ));
        assert!(matches!(
            resolve_sources(&["/sample".to_string()], &[]),
            Err(CliError::UnknownKind { .. })
        ));
    }

    #[test]
    fn time_format() {
        let t = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(t.format(TIME_FORMAT).to_string(), "2024/03/05 07:08:09");
    }
}

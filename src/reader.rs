use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::aggregator::DailyCounts;
use crate::error::{LogError, LogResult};
use crate::event::parse_line;
use crate::stats::IngestStats;

/// What to do with a line that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Log a warning, drop the line and keep going.
    #[default]
    Skip,
    /// Fail the whole run on the first malformed line.
    Abort,
}

#[derive(Debug, Default)]
pub struct IngestOutcome {
    pub counts: DailyCounts,
    pub stats: IngestStats,
}

pub fn ingest_file(path: &Path, policy: MalformedPolicy) -> LogResult<IngestOutcome> {
    if !path.is_file() {
        return Err(LogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LogError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    info!(action = "open", component = "log_reader", file_path = ?path, "Opened log file");
    ingest_reader(BufReader::new(file), path, policy)
}

/// Streams `reader` one line at a time into a fresh [`DailyCounts`].
///
/// Lines are trimmed before parsing and blank lines are ignored. `path` is
/// only used to label I/O errors.
pub fn ingest_reader<R: BufRead>(
    reader: R,
    path: &Path,
    policy: MalformedPolicy,
) -> LogResult<IngestOutcome> {
    let start_time = Instant::now();
    let mut outcome = IngestOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line_number = index + 1;
        outcome.stats.lines_read += 1;

        let line = line.trim();
        if line.is_empty() {
            outcome.stats.blank_lines += 1;
            continue;
        }

        match parse_line(line) {
            Ok(event) => outcome.counts.record(event),
            Err(source) => match policy {
                MalformedPolicy::Abort => {
                    return Err(LogError::Malformed {
                        line_number,
                        source,
                    })
                }
                MalformedPolicy::Skip => {
                    warn!(action = "skip", component = "log_reader", line_number, error = %source, "Skipping malformed line");
                    outcome.stats.skipped += 1;
                }
            },
        }
    }

    info!(
        action = "complete",
        component = "log_reader",
        lines_read = outcome.stats.lines_read,
        events = outcome.stats.events(),
        skipped = outcome.stats.skipped,
        days = outcome.counts.day_count(),
        duration_ms = start_time.elapsed().as_millis(),
        "Log ingestion completed"
    );
    Ok(outcome)
}

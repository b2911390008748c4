use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::args::{Args, OutputFormat};
use crate::error::LogResult;
use crate::reader::{ingest_file, MalformedPolicy};
use crate::report::{RenderOptions, Report};
use crate::stats::AnalysisResult;

pub fn analyze_log_file(args: &Args) -> LogResult<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", file_path = ?args.input, "Starting log analysis");

    let policy = if args.strict {
        MalformedPolicy::Abort
    } else {
        MalformedPolicy::Skip
    };
    let outcome = ingest_file(&args.input, policy)?;

    let ranking_start = Instant::now();
    let options = RenderOptions {
        top: args.top,
        redact: args.redact,
    };
    let report = Report::build(&outcome.counts, &options);
    if report.is_empty() {
        info!(action = "empty", component = "analysis", "No events found, report is empty");
    }
    info!(
        action = "rank",
        component = "analysis",
        days = report.days.len(),
        distinct_pairs = outcome.counts.entry_count(),
        total_hits = outcome.counts.total_hits(),
        duration_ms = ranking_start.elapsed().as_millis(),
        "Ranked daily counts"
    );

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        report,
        stats: outcome.stats,
    })
}

pub fn print_report<W: Write>(result: &AnalysisResult, args: &Args, out: &mut W) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            for line in result.report.lines() {
                writeln!(out, "{line}").context("Failed to write report")?;
            }
        }
        OutputFormat::Json => {
            let json = result
                .report
                .to_json()
                .context("Failed to serialize report")?;
            writeln!(out, "{json}").context("Failed to write report")?;
        }
    }
    out.flush().context("Failed to flush report")?;
    Ok(())
}

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `DD/MM/YYYY GMT` headers followed by `<url> <hits>` lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dailyhits",
    about = "Summarize a timestamped URL access log into per-day hit counts",
    version,
    long_about = None
)]
pub struct Args {
    /// Log file with one `<epoch_seconds>|<url>` record per line
    pub input: PathBuf,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Number of top URLs to display per day
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Redact URL hosts for privacy; URLs that redact alike are merged into one row
    #[arg(long)]
    pub redact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Arguments for `input` with every option at its default.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            strict: false,
            top: None,
            format: OutputFormat::Text,
            redact: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_positional() {
        let args = Args::try_parse_from(["dailyhits", "input.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("input.txt"));
        assert!(!args.strict);
        assert_eq!(args.top, None);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn parses_options() {
        let args = Args::try_parse_from([
            "dailyhits", "--strict", "-t", "3", "--format", "json", "--redact", "-v", "log.txt",
        ])
        .unwrap();
        assert!(args.strict);
        assert_eq!(args.top, Some(3));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.redact);
        assert!(args.verbose);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["dailyhits"]).is_err());
    }
}

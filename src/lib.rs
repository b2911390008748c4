pub mod aggregator;
pub mod args;
pub mod error;
pub mod event;
pub mod reader;
pub mod report;
pub mod stats;
pub mod summary;
pub mod utils;

pub use aggregator::{accumulate, DailyCounts};
pub use args::{Args, OutputFormat};
pub use error::{LogError, ParseError};
pub use event::{parse_line, Event};
pub use reader::{ingest_file, ingest_reader, MalformedPolicy};
pub use report::{render, RenderOptions, Report};
pub use stats::{AnalysisResult, IngestStats};
pub use summary::{analyze_log_file, print_report};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single log line is rejected. Every variant is a malformed line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 2 '|'-separated fields, found {0}")]
    FieldCount(usize),

    #[error("timestamp {0:?} is not a base-10 integer")]
    InvalidTimestamp(String),

    #[error("timestamp {0} is negative")]
    NegativeTimestamp(i64),

    #[error("timestamp {0} is outside the supported calendar range")]
    TimestampOutOfRange(i64),

    #[error("url field is empty")]
    EmptyUrl,
}

/// Failures while turning a log file into daily counts.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed line {line_number}: {source}")]
    Malformed {
        line_number: usize,
        #[source]
        source: ParseError,
    },
}

impl LogError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LogError::FileNotFound { .. } | LogError::Io { .. } | LogError::Malformed { .. } => 1,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = LogError::Malformed {
            line_number: 7,
            source: ParseError::FieldCount(1),
        };
        assert_eq!(
            err.to_string(),
            "malformed line 7: expected 2 '|'-separated fields, found 1"
        );

        let err = LogError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "input file not found: missing.txt");
    }

    #[test]
    fn every_error_exits_non_zero() {
        let errors = [
            LogError::FileNotFound {
                path: PathBuf::from("a"),
            },
            LogError::Io {
                path: PathBuf::from("a"),
                source: io::Error::new(io::ErrorKind::Other, "boom"),
            },
            LogError::Malformed {
                line_number: 1,
                source: ParseError::EmptyUrl,
            },
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0);
        }
    }
}

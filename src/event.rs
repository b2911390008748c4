use chrono::DateTime;

use crate::error::ParseError;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// One parsed `<epoch_seconds>|<url>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Start of the containing UTC day, in epoch seconds.
    pub day_key: i64,
    pub url: String,
}

/// Truncates a non-negative epoch timestamp to the start of its UTC day.
pub fn day_key_for(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

pub fn parse_line(line: &str) -> Result<Event, ParseError> {
    let fields: Vec<&str> = line.split('|').collect();
    let [timestamp, url] = fields.as_slice() else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let timestamp: i64 = timestamp
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(timestamp.to_string()))?;
    if timestamp < 0 {
        return Err(ParseError::NegativeTimestamp(timestamp));
    }
    // Every accepted timestamp must map to a printable calendar date.
    if DateTime::from_timestamp(timestamp, 0).is_none() {
        return Err(ParseError::TimestampOutOfRange(timestamp));
    }

    if url.is_empty() {
        return Err(ParseError::EmptyUrl);
    }

    Ok(Event {
        day_key: day_key_for(timestamp),
        url: url.to_string(),
    })
}

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::aggregator::DailyCounts;
use crate::utils::redact_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlHits {
    pub url: String,
    pub hits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day_key: i64,
    pub date: Option<NaiveDate>,
    pub urls: Vec<UrlHits>,
}

/// Days in ascending `day_key` order; within a day, URLs by descending hit
/// count with ties broken by ascending URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub days: Vec<DayReport>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Keep at most this many URLs per day.
    pub top: Option<usize>,
    pub redact: bool,
}

impl Report {
    pub fn from_counts(counts: &DailyCounts) -> Self {
        let mut days: Vec<DayReport> = counts
            .days()
            .map(|(day_key, urls)| DayReport {
                day_key,
                date: day_date(day_key),
                urls: rank(urls.iter().map(|(url, &hits)| (url.clone(), hits))),
            })
            .collect();
        days.sort_unstable_by_key(|day| day.day_key);

        Report { days }
    }

    pub fn build(counts: &DailyCounts, options: &RenderOptions) -> Self {
        let mut report = Self::from_counts(counts);
        report.apply(options);
        report
    }

    /// Redacts, then truncates each day to `top`.
    ///
    /// URLs that redact to the same label are merged into one row and the day
    /// is re-ranked, so `top` counts distinct labels.
    pub fn apply(&mut self, options: &RenderOptions) {
        for day in &mut self.days {
            if options.redact {
                let mut merged: HashMap<String, u64> = HashMap::with_capacity(day.urls.len());
                for entry in day.urls.drain(..) {
                    *merged.entry(redact_url(&entry.url)).or_insert(0) += entry.hits;
                }
                day.urls = rank(merged);
            }
            if let Some(top) = options.top {
                day.urls.truncate(top);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        let url_lines: usize = self.days.iter().map(|day| day.urls.len()).sum();
        let mut lines = Vec::with_capacity(self.days.len() + url_lines);
        for day in &self.days {
            lines.push(format_day_header(day.day_key));
            lines.extend(
                day.urls
                    .iter()
                    .map(|entry| format!("{} {}", entry.url, entry.hits)),
            );
        }
        lines
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Descending hits, ties by ascending URL. Keys must be unique, which makes the
/// unstable sort total.
fn rank<I>(urls: I) -> Vec<UrlHits>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut ranked: Vec<UrlHits> = urls
        .into_iter()
        .map(|(url, hits)| UrlHits { url, hits })
        .collect();
    ranked.sort_unstable_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.url.cmp(&b.url)));
    ranked
}

pub fn day_date(day_key: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(day_key, 0).map(|dt| dt.date_naive())
}

/// `DD/MM/YYYY GMT` for the UTC date of `day_key`.
///
/// Keys outside chrono's range cannot come out of the parser; if one is
/// recorded by hand the raw key is printed instead.
pub fn format_day_header(day_key: i64) -> String {
    match day_date(day_key) {
        Some(date) => format!("{} GMT", date.format("%d/%m/%Y")),
        None => format!("{day_key} GMT"),
    }
}

pub fn render(counts: &DailyCounts) -> Vec<String> {
    Report::from_counts(counts).lines()
}

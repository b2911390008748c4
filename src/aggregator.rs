use std::collections::HashMap;

use crate::event::Event;

/// Hit counts per URL, bucketed by UTC day key.
///
/// Both levels are unordered. Ordering is imposed once, in [`crate::report`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DailyCounts {
    days: HashMap<i64, HashMap<String, u64>>,
}

impl DailyCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Event) {
        *self
            .days
            .entry(event.day_key)
            .or_default()
            .entry(event.url)
            .or_insert(0) += 1;
    }

    /// Hit count for `url` on `day_key`, or 0 when it was never seen.
    pub fn hits(&self, day_key: i64, url: &str) -> u64 {
        self.days
            .get(&day_key)
            .and_then(|urls| urls.get(url))
            .copied()
            .unwrap_or(0)
    }

    pub fn days(&self) -> impl Iterator<Item = (i64, &HashMap<String, u64>)> {
        self.days.iter().map(|(day_key, urls)| (*day_key, urls))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of distinct (day, url) pairs.
    pub fn entry_count(&self) -> usize {
        self.days.values().map(HashMap::len).sum()
    }

    pub fn total_hits(&self) -> u64 {
        self.days
            .values()
            .flat_map(HashMap::values)
            .sum()
    }
}

impl Extend<Event> for DailyCounts {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.record(event);
        }
    }
}

impl FromIterator<Event> for DailyCounts {
    fn from_iter<I: IntoIterator<Item = Event>>(events: I) -> Self {
        let mut counts = DailyCounts::new();
        counts.extend(events);
        counts
    }
}

pub fn accumulate<I>(events: I) -> DailyCounts
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().collect()
}

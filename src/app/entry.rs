use chrono::{Local, TimeZone};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One visited page: its URL and when it was visited, in seconds since the epoch.
#[derive(Debug, Clone)]
pub struct NavigationEntry {
    url: String,
    timestamp: i64,
}

impl NavigationEntry {
    pub fn new(url: impl Into<String>, timestamp: i64) -> Self {
        Self {
            url: url.into(),
            timestamp,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    /// Renders the timestamp in local time. Falls back to the raw number when
    /// it can't be mapped to a single local date.
    pub fn formatted_timestamp(&self) -> String {
        match Local.timestamp_opt(self.timestamp, 0).single() {
            Some(time) => time.format(TIMESTAMP_FORMAT).to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

impl fmt::Display for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "URL:{} Visited On: {}", self.url, self.formatted_timestamp())
    }
}

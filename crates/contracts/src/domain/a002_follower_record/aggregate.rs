use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record recently added by someone the user follows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub id: i64,
    #[serde(default)]
    pub gravatar: String,
    pub user: String,
    pub artist: String,
    pub title: String,
    /// HTTP date ("Fri, 16 Oct 2026 10:00:00 GMT") or RFC 3339
    pub timestamp: String,
}

impl FollowerRecord {
    /// "{user} added {artist} - {title}"
    pub fn summary(&self) -> String {
        format!("{} added {} - {}", self.user, self.artist, self.title)
    }
}

/// Feed response: an object keyed by position ("0", "1", ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowerFeed(pub BTreeMap<String, FollowerRecord>);

impl FollowerFeed {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries newest first (highest id first)
    pub fn into_sorted(self) -> Vec<FollowerRecord> {
        let mut records: Vec<FollowerRecord> = self.0.into_values().collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "0": {"id": 7, "gravatar": "https://g/a", "user": "you", "artist": "Can", "title": "Tago Mago", "timestamp": "Mon, 12 Oct 2026 10:00:00 GMT"},
        "1": {"id": 12, "gravatar": "https://g/b", "user": "sam", "artist": "Neu!", "title": "Neu! 75", "timestamp": "Tue, 13 Oct 2026 10:00:00 GMT"},
        "10": {"id": 3, "user": "sam", "artist": "Faust", "title": "IV", "timestamp": "2026-10-01T08:00:00Z"}
    }"#;

    #[test]
    fn test_feed_sorted_newest_first() {
        let feed: FollowerFeed = serde_json::from_str(FEED).unwrap();
        assert_eq!(feed.len(), 3);
        let ids: Vec<i64> = feed.into_sorted().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![12, 7, 3]);
    }

    #[test]
    fn test_missing_gravatar_defaults_to_empty() {
        let feed: FollowerFeed = serde_json::from_str(FEED).unwrap();
        let faust = feed.into_sorted().pop().unwrap();
        assert_eq!(faust.gravatar, "");
        assert_eq!(faust.summary(), "sam added Faust - IV");
    }

    #[test]
    fn test_empty_feed() {
        let feed: FollowerFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.is_empty());
        assert!(feed.into_sorted().is_empty());
    }
}

//! Lookup result types and duration rendering

use serde::Serialize;
use thiserror::Error;

/// A qualifying candidate found for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongMatch {
    /// Title reported by the backend
    pub title: String,
    /// Canonical watch URL
    pub url: String,
    /// Duration in whole seconds
    pub duration_secs: u64,
}

impl SongMatch {
    /// Duration rendered for display
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }
}

/// Why a lookup produced no usable result
///
/// The distinction is kept here but collapses at the rendering
/// boundary: a timed-out lookup and a clean miss draw the same row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup exceeded the dispatcher's per-task deadline
    #[error("lookup timed out")]
    Timeout,
    /// The outbound request failed
    #[error("backend request failed: {0}")]
    Request(String),
    /// The backend answered with something we could not read
    #[error("backend response unreadable: {0}")]
    Parse(String),
}

/// Outcome of a single lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// First candidate that met the duration floor
    Found(SongMatch),
    /// Backend answered, nothing qualified
    NotFound,
    /// Lookup never produced an answer
    Failed(LookupError),
}

impl LookupOutcome {
    /// The match, if any. Failures read the same as a clean miss.
    pub fn song(&self) -> Option<&SongMatch> {
        match self {
            LookupOutcome::Found(song) => Some(song),
            _ => None,
        }
    }
}

/// One row of a dispatch result set, paired with the query it answers
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub query: String,
    pub outcome: LookupOutcome,
}

/// Render seconds as `H:MM:SS` past the hour mark, `M:SS` below it.
/// The leftmost unit carries no leading zero.
pub fn format_duration(secs: u64) -> String {
    let (mins, s) = (secs / 60, secs % 60);
    let (h, m) = (mins / 60, mins % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_under_a_minute() {
        assert_eq!(format_duration(45), "0:45");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(185), "3:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3661), "1:01:01");
        assert_eq!(format_duration(3600), "1:00:00");
    }

    #[test]
    fn test_failures_collapse_to_no_song() {
        let found = LookupOutcome::Found(SongMatch {
            title: "Song".to_string(),
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            duration_secs: 200,
        });
        assert!(found.song().is_some());

        assert!(LookupOutcome::NotFound.song().is_none());
        assert!(LookupOutcome::Failed(LookupError::Timeout).song().is_none());
        assert!(LookupOutcome::Failed(LookupError::Request("boom".to_string()))
            .song()
            .is_none());
    }
}

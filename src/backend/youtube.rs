//! YouTube search backend (no API key required)

use super::traits::{BackendRequest, BackendResponse, SearchBackend, VideoEntry};
use anyhow::{anyhow, Result};

/// YouTube video search, scraping the regular results page
pub struct YouTube {
    base_url: String,
}

impl YouTube {
    pub fn new() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
        }
    }

    /// Point the backend at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Extract text from YouTube's JSON structure
    fn text_of(element: &serde_json::Value) -> String {
        // Try "runs" format first
        if let Some(runs) = element.get("runs").and_then(|r| r.as_array()) {
            return runs
                .iter()
                .filter_map(|r| r.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("");
        }
        // Fall back to "simpleText"
        element
            .get("simpleText")
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .to_string()
    }

    /// Extract the ytInitialData JSON from YouTube's HTML
    fn extract_initial_data(html: &str) -> Option<serde_json::Value> {
        let start_marker = "ytInitialData = ";
        let start = html.find(start_marker)?;
        let json_start = start + start_marker.len();

        // The JSON blob ends at ";</script>"
        let end_marker = ";</script>";
        let end = html[json_start..].find(end_marker)?;

        let json_str = &html[json_start..json_start + end];
        serde_json::from_str(json_str).ok()
    }

    /// Walk the search result sections and collect video entries.
    /// Entries with no id, no title, or no parseable duration (live
    /// streams, premieres) are skipped.
    fn collect_entries(data: &serde_json::Value) -> Vec<VideoEntry> {
        let mut entries = Vec::new();

        let sections = data
            .get("contents")
            .and_then(|c| c.get("twoColumnSearchResultsRenderer"))
            .and_then(|r| r.get("primaryContents"))
            .and_then(|p| p.get("sectionListRenderer"))
            .and_then(|s| s.get("contents"))
            .and_then(|c| c.as_array());

        let sections = match sections {
            Some(s) => s,
            None => return entries,
        };

        for section in sections {
            let contents = section
                .get("itemSectionRenderer")
                .and_then(|r| r.get("contents"))
                .and_then(|c| c.as_array());

            let contents = match contents {
                Some(c) => c,
                None => continue,
            };

            for container in contents {
                let video = match container.get("videoRenderer") {
                    Some(v) => v,
                    None => continue,
                };

                let video_id = match video.get("videoId").and_then(|v| v.as_str()) {
                    Some(id) => id,
                    None => continue,
                };

                let title =
                    Self::text_of(video.get("title").unwrap_or(&serde_json::Value::Null));
                if title.is_empty() {
                    continue;
                }

                let length_text =
                    Self::text_of(video.get("lengthText").unwrap_or(&serde_json::Value::Null));
                let duration_secs = match parse_length(&length_text) {
                    Some(secs) => secs,
                    None => continue,
                };

                entries.push(VideoEntry {
                    id: video_id.to_string(),
                    title,
                    url: watch_url(video_id),
                    duration_secs,
                });
            }
        }

        entries
    }
}

impl Default for YouTube {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBackend for YouTube {
    fn name(&self) -> &str {
        "youtube"
    }

    fn request(&self, query: &str) -> Result<BackendRequest> {
        // CONSENT bypasses the cookie consent interstitial
        Ok(BackendRequest::get(format!("{}/results", self.base_url))
            .param("search_query", query)
            .cookie("CONSENT", "YES+"))
    }

    fn response(&self, response: BackendResponse) -> Result<Vec<VideoEntry>> {
        let data = Self::extract_initial_data(&response.text)
            .ok_or_else(|| anyhow!("ytInitialData not found in response from {}", response.url))?;

        Ok(Self::collect_entries(&data))
    }
}

/// Canonical watch URL for a video id
fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Parse YouTube's `lengthText` clock format (`M:SS` or `H:MM:SS`)
/// into whole seconds. Non-clock text ("LIVE", empty) yields None.
fn parse_length(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut secs = 0u64;
    for part in parts {
        secs = secs * 60 + part.parse::<u64>().ok()?;
    }
    Some(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_page(renderers: Vec<serde_json::Value>) -> String {
        let data = serde_json::json!({
            "contents": {
                "twoColumnSearchResultsRenderer": {
                    "primaryContents": {
                        "sectionListRenderer": {
                            "contents": [
                                {"itemSectionRenderer": {"contents": renderers}}
                            ]
                        }
                    }
                }
            }
        });
        format!(
            "<html><body><script>var ytInitialData = {};</script></body></html>",
            data
        )
    }

    fn video(id: &str, title: &str, length: &str) -> serde_json::Value {
        serde_json::json!({
            "videoRenderer": {
                "videoId": id,
                "title": {"runs": [{"text": title}]},
                "lengthText": {"simpleText": length}
            }
        })
    }

    #[test]
    fn test_request() {
        let youtube = YouTube::new();
        let request = youtube.request("never gonna give you up").unwrap();

        assert_eq!(request.url, "https://www.youtube.com/results");
        assert_eq!(
            request.params.get("search_query").map(String::as_str),
            Some("never gonna give you up")
        );
        assert!(request.cookies.contains_key("CONSENT"));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("0:45"), Some(45));
        assert_eq!(parse_length("3:05"), Some(185));
        assert_eq!(parse_length("1:01:01"), Some(3661));
        assert_eq!(parse_length("10:00"), Some(600));
        assert_eq!(parse_length("LIVE"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("1:02:03:04"), None);
    }

    #[test]
    fn test_text_of() {
        let simple = serde_json::json!({"simpleText": "Hello World"});
        assert_eq!(YouTube::text_of(&simple), "Hello World");

        let runs = serde_json::json!({
            "runs": [{"text": "Hello "}, {"text": "World"}]
        });
        assert_eq!(YouTube::text_of(&runs), "Hello World");
    }

    #[test]
    fn test_response_parses_entries_in_page_order() {
        let youtube = YouTube::new();
        let page = search_page(vec![
            video("abc123", "Short clip", "0:45"),
            video("def456", "Full song", "3:05"),
        ]);

        let entries = youtube
            .response(BackendResponse {
                status: 200,
                text: page,
                url: "https://www.youtube.com/results".to_string(),
            })
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "abc123");
        assert_eq!(entries[0].duration_secs, 45);
        assert_eq!(entries[1].title, "Full song");
        assert_eq!(entries[1].url, "https://www.youtube.com/watch?v=def456");
        assert_eq!(entries[1].duration_secs, 185);
    }

    #[test]
    fn test_response_skips_unusable_renderers() {
        let youtube = YouTube::new();
        let live = serde_json::json!({
            "videoRenderer": {
                "videoId": "live01",
                "title": {"runs": [{"text": "Live stream"}]}
            }
        });
        let promo = serde_json::json!({"adSlotRenderer": {}});
        let page = search_page(vec![live, promo, video("ok1", "Real song", "4:00")]);

        let entries = youtube
            .response(BackendResponse {
                status: 200,
                text: page,
                url: String::new(),
            })
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ok1");
    }

    #[test]
    fn test_response_without_initial_data_is_an_error() {
        let youtube = YouTube::new();
        let result = youtube.response(BackendResponse {
            status: 200,
            text: "<html><body>consent wall</body></html>".to_string(),
            url: "https://www.youtube.com/results".to_string(),
        });
        assert!(result.is_err());
    }
}

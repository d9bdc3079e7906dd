//! Single-query lookup
//!
//! One query, one outbound call: fetch a handful of candidates from
//! the search backend and keep the first one long enough to qualify.

use crate::backend::{SearchBackend, VideoEntry};
use crate::network::HttpClient;
use crate::results::{LookupError, SongMatch};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Seam between the dispatcher and the concrete lookup path
#[async_trait]
pub trait SongLookup: Send + Sync {
    /// Resolve one query to its first qualifying match, if any
    async fn lookup(&self, query: &str) -> Result<Option<SongMatch>, LookupError>;
}

/// Production lookup: an HTTP round trip to a search backend plus the
/// duration filter. No retries, one outbound call per invocation.
pub struct BackendLookup {
    client: HttpClient,
    backend: Arc<dyn SearchBackend>,
    min_duration_secs: u64,
    max_candidates: usize,
}

impl BackendLookup {
    pub fn new(client: HttpClient, backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            client,
            backend,
            min_duration_secs: crate::DEFAULT_MIN_DURATION_SECS,
            max_candidates: crate::DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Set the duration floor
    pub fn with_min_duration(mut self, secs: u64) -> Self {
        self.min_duration_secs = secs;
        self
    }

    /// Set how many candidates are considered per query
    pub fn with_max_candidates(mut self, count: usize) -> Self {
        self.max_candidates = count;
        self
    }
}

#[async_trait]
impl SongLookup for BackendLookup {
    async fn lookup(&self, query: &str) -> Result<Option<SongMatch>, LookupError> {
        let request = self
            .backend
            .request(query)
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.is_success() {
            return Err(LookupError::Request(format!(
                "HTTP status {} from {}",
                response.status, response.url
            )));
        }

        let entries = self
            .backend
            .response(response)
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        debug!(
            backend = self.backend.name(),
            query,
            candidates = entries.len(),
            "backend returned candidates"
        );

        let chosen = first_qualifying(
            entries.into_iter().take(self.max_candidates),
            self.min_duration_secs,
        );

        Ok(chosen.map(|entry| SongMatch {
            title: entry.title,
            url: entry.url,
            duration_secs: entry.duration_secs,
        }))
    }
}

/// First entry meeting the duration floor, in backend rank order.
/// First match wins even when a later candidate is longer.
pub fn first_qualifying<I>(entries: I, min_secs: u64) -> Option<VideoEntry>
where
    I: IntoIterator<Item = VideoEntry>,
{
    entries.into_iter().find(|e| e.duration_secs >= min_secs)
}

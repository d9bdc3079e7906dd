//! Bounded fan-out/fan-in over single-query lookups

use crate::lookup::SongLookup;
use crate::results::{LookupError, LookupOutcome, LookupResult};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Runs a batch of lookups concurrently and reassembles the outcomes
/// in input order.
///
/// Completion order is arbitrary; only the final projection restores
/// the caller's ordering. A batch always completes: per-query failures
/// and timeouts degrade to not-found rows, never to a batch error.
pub struct Dispatcher {
    lookup: Arc<dyn SongLookup>,
    max_concurrency: usize,
    task_timeout: Duration,
}

impl Dispatcher {
    pub fn new(lookup: Arc<dyn SongLookup>) -> Self {
        Self {
            lookup,
            max_concurrency: crate::DEFAULT_MAX_CONCURRENCY,
            task_timeout: Duration::from_secs(crate::DEFAULT_LOOKUP_TIMEOUT),
        }
    }

    /// Set the number of lookups allowed in flight at once
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    /// Set the per-lookup deadline
    pub fn with_task_timeout(mut self, task_timeout: Duration) -> Self {
        self.task_timeout = task_timeout;
        self
    }

    /// Split raw multi-line input into queries and dispatch them
    pub async fn dispatch_text(&self, raw: &str) -> Vec<LookupResult> {
        self.dispatch(parse_queries(raw)).await
    }

    /// Run every query through the lookup, at most `max_concurrency`
    /// in flight, and return one outcome per query in input order.
    pub async fn dispatch(&self, queries: Vec<String>) -> Vec<LookupResult> {
        if queries.is_empty() {
            return Vec::new();
        }

        let batch = Uuid::new_v4();
        let started = Instant::now();
        info!(%batch, queries = queries.len(), "dispatching lookup batch");

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));

        let tasks = queries.iter().map(|query| {
            let query = query.clone();
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&semaphore);
            let task_timeout = self.task_timeout;

            async move {
                // Queue until a worker slot frees up
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return (
                            query,
                            LookupOutcome::Failed(LookupError::Request(
                                "worker pool closed".to_string(),
                            )),
                        )
                    }
                };

                let task_started = Instant::now();
                let outcome = match timeout(task_timeout, lookup.lookup(&query)).await {
                    Ok(Ok(Some(song))) => LookupOutcome::Found(song),
                    Ok(Ok(None)) => LookupOutcome::NotFound,
                    Ok(Err(err)) => {
                        warn!(%query, %err, "lookup failed");
                        LookupOutcome::Failed(err)
                    }
                    Err(_) => {
                        // The in-flight request is dropped with the future
                        warn!(%query, deadline = ?task_timeout, "lookup timed out");
                        LookupOutcome::Failed(LookupError::Timeout)
                    }
                };
                debug!(%query, elapsed = ?task_started.elapsed(), "lookup finished");
                (query, outcome)
            }
        });

        // Completions land keyed by query text. Duplicate queries each
        // run their own lookup; the last writer wins, which is fine
        // since identical queries resolve identically.
        let completed: HashMap<String, LookupOutcome> =
            join_all(tasks).await.into_iter().collect();

        info!(%batch, elapsed = ?started.elapsed(), "lookup batch complete");

        queries
            .into_iter()
            .map(|query| {
                let outcome = completed
                    .get(&query)
                    .cloned()
                    .unwrap_or(LookupOutcome::NotFound);
                LookupResult { query, outcome }
            })
            .collect()
    }
}

/// Trim raw multi-line input into the query list, dropping blank lines
pub fn parse_queries(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

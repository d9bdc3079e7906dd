//! Songseek: a batch song link finder
//!
//! Takes a list of free-text song titles, runs one video search per
//! title concurrently, and keeps the first hit per title that is long
//! enough to be a full song rather than a teaser or clip.

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod lookup;
pub mod network;
pub mod results;
pub mod web;

pub use config::Settings;
pub use dispatch::Dispatcher;
pub use results::{LookupOutcome, LookupResult, SongMatch};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum duration a candidate must reach to qualify, in seconds
pub const DEFAULT_MIN_DURATION_SECS: u64 = 180;

/// Candidates considered per query
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Concurrent lookups per batch
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Per-lookup deadline in seconds
pub const DEFAULT_LOOKUP_TIMEOUT: u64 = 15;

//! Video search backend module
//!
//! Defines the SearchBackend trait and the YouTube implementation.

mod traits;
pub mod youtube;

pub use traits::{BackendRequest, BackendResponse, SearchBackend, VideoEntry};
pub use youtube::YouTube;

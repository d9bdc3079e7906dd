//! HTTP networking module
//!
//! Provides the outbound HTTP client used for backend requests.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::generate_user_agent;

//! Batch dispatch module
//!
//! Fans a batch of queries out over the lookup seam with bounded
//! concurrency and reassembles the outcomes in input order.

mod dispatcher;

pub use dispatcher::{parse_queries, Dispatcher};

//! Reports over submitted journal entries
//!
//! Aggregates built from the outbox contents, independent of how they are
//! displayed.

pub mod summary;

pub use summary::{AccountActivity, SessionSummary};

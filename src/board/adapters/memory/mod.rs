//! In-memory adapters for board ports.

mod source;

pub use source::InMemoryIssueSource;

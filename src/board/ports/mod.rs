//! Port contracts for board data retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by the report
//! pipeline.

pub mod source;

pub use source::{IssueSource, IssueSourceError, IssueSourceResult};

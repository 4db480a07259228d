//! Adapter implementations for board ports.

mod github;
pub mod memory;

pub use github::{GithubIssueSource, GithubSourceSettings};

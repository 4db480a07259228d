//! Board event filtering and timeline reconstruction.
//!
//! This context turns the noisy per-issue event history of a project board
//! into a clean column timeline: the event filter normalizes raw tracker
//! events into board operations, and the timeline builder folds those
//! operations into dated stage entries, handling regression, reset, and
//! closure. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Issue iteration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

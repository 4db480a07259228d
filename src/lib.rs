//! Stagecraft: project-board timeline reconstruction and stage reporting.
//!
//! This crate rebuilds, from each issue's raw project-board event history,
//! a timeline of which pipeline stage the issue occupied and when, then
//! projects every timeline into a fixed tabular report with one date column
//! per stage.
//!
//! # Architecture
//!
//! Stagecraft follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state machines and projection rules with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the tracker, the report sink,
//!   and the notifier
//! - **Adapters**: Concrete implementations of ports (GitHub API, delimited
//!   files, mail gateway, in-memory fakes)
//!
//! # Modules
//!
//! - [`board`]: Event filtering and timeline reconstruction
//! - [`report`]: Row projection, backfill, serialization, and notification

pub mod board;
pub mod report;

//! Stage report projection and delivery.
//!
//! This context turns finished timelines into the fixed tabular report:
//! the column projector maps timeline entries onto per-stage date fields,
//! the backfiller propagates dates backward across skipped stages, and the
//! pipeline service drives serialization and notification through ports.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

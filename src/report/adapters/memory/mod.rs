//! In-memory adapters for report ports.

mod notifier;
mod sink;

pub use notifier::InMemoryNotifier;
pub use sink::{CapturedReport, InMemoryRecordSink};

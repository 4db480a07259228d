//! Port contracts for report serialization and notification.

pub mod notifier;
pub mod sink;

pub use notifier::{Notifier, NotifierError, NotifierResult};
pub use sink::{RecordSink, RecordSinkError, RecordSinkResult, ReportArtifact};

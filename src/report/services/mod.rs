//! Application services for report orchestration.

mod pipeline;

pub use pipeline::{ReportSummary, StageReportError, StageReportService};

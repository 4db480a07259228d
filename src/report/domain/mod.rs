//! Domain types for stage report projection.

mod backfill;
mod projector;
mod row;

pub use backfill::backfill;
pub use projector::ColumnProjector;
pub use row::{REPORT_HEADER, StageRow};

//! Domain types for board event filtering and timeline reconstruction.

mod config;
mod error;
mod event;
mod filter;
mod issue;
mod operation;
mod stage;
mod timeline;

pub use config::BoardConfig;
pub use error::BoardConfigError;
pub use event::{ProjectCard, RawEvent, RawEventKind};
pub use filter::EventFilter;
pub use issue::Issue;
pub use operation::BoardOperation;
pub use stage::{Stage, StageCatalog, StageRule};
pub use timeline::{ColumnEntry, Timeline, TimelineBuilder};

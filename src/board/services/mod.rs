//! Application services for board data retrieval.

mod pager;

pub use pager::IssuePager;

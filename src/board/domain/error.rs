//! Error types for board configuration validation.

use super::Stage;
use thiserror::Error;

/// Errors returned while constructing board configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardConfigError {
    /// A stage label is empty after trimming.
    #[error("stage label for {0:?} must not be empty")]
    EmptyStageLabel(Stage),

    /// Two stages share the same column label.
    #[error("duplicate stage label '{0}'")]
    DuplicateStageLabel(String),

    /// The page size is zero; the source could never return a full page.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

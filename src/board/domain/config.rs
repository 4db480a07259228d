//! Frozen per-run board configuration.

use super::{BoardConfigError, StageCatalog};

/// Configuration injected into the event filter, timeline builder, and
/// issue pager for one run.
///
/// An explicit value, constructed once and passed by reference; there is no
/// process-wide configuration singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    project_id: u64,
    ignored_columns: Vec<String>,
    stages: StageCatalog,
    min_issue_number: u64,
    page_size: usize,
}

impl BoardConfig {
    /// Creates a validated board configuration.
    ///
    /// `ignored_columns` are pre-pipeline staging areas: entering one means
    /// the issue is no longer on the tracked board. `min_issue_number` is
    /// the cooperative cancellation threshold: issues below it are never
    /// requested or processed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(
        project_id: u64,
        ignored_columns: impl IntoIterator<Item = String>,
        stages: StageCatalog,
        min_issue_number: u64,
        page_size: usize,
    ) -> Result<Self, BoardConfigError> {
        if page_size == 0 {
            return Err(BoardConfigError::ZeroPageSize);
        }
        Ok(Self {
            project_id,
            ignored_columns: ignored_columns.into_iter().collect(),
            stages,
            min_issue_number,
            page_size,
        })
    }

    /// Returns the target project board identifier.
    #[must_use]
    pub const fn project_id(&self) -> u64 {
        self.project_id
    }

    /// Returns the configured stage catalog.
    #[must_use]
    pub const fn stages(&self) -> &StageCatalog {
        &self.stages
    }

    /// Returns the issue-number threshold below which iteration stops.
    #[must_use]
    pub const fn min_issue_number(&self) -> u64 {
        self.min_issue_number
    }

    /// Returns the source page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a column is an untracked pre-pipeline staging area.
    #[must_use]
    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignored_columns.iter().any(|ignored| ignored == column)
    }
}

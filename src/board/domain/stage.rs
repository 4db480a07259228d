//! Canonical pipeline stages and the column match-rule table.

use super::BoardConfigError;
use serde::{Deserialize, Serialize};

/// Identity of one of the five canonical pipeline stages.
///
/// The declaration order is the pipeline order; it defines "before" and
/// "after" for regression handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Work accepted onto the board but not started.
    Backlog,
    /// Work in active development.
    Development,
    /// Work approved to move to the test environment.
    ApprovedForTest,
    /// Work deployed to the test environment.
    DeployedToTest,
    /// Work approved for production.
    ApprovedForProd,
}

impl Stage {
    /// All stages in canonical pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Development,
        Self::ApprovedForTest,
        Self::DeployedToTest,
        Self::ApprovedForProd,
    ];

    /// Zero-based position in the canonical pipeline order.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::Development => 1,
            Self::ApprovedForTest => 2,
            Self::DeployedToTest => 3,
            Self::ApprovedForProd => 4,
        }
    }

    /// Returns the final pipeline stage.
    #[must_use]
    pub const fn last() -> Self {
        Self::ApprovedForProd
    }

    /// Column match rule used when projecting timeline entries onto row
    /// fields.
    ///
    /// The early stages match any column whose name contains a fixed
    /// substring; the later stages require an exact match against the
    /// configured column label. Keeping the distinction in one table makes
    /// it visible and testable instead of burying it in conditionals.
    #[must_use]
    pub const fn rule(self) -> StageRule {
        match self {
            Self::Backlog => StageRule::Substring("backlog"),
            Self::Development => StageRule::Substring("development"),
            Self::ApprovedForTest | Self::DeployedToTest | Self::ApprovedForProd => {
                StageRule::ExactLabel
            }
        }
    }
}

/// How a timeline column name is matched against a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageRule {
    /// The column name contains the given substring (case-insensitive).
    Substring(&'static str),
    /// The column name equals the configured label for the stage.
    ExactLabel,
}

/// The configured board column labels for the five canonical stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCatalog {
    backlog: String,
    development: String,
    approved_for_test: String,
    deployed_to_test: String,
    approved_for_prod: String,
}

impl StageCatalog {
    /// Creates a catalog from the five column labels in pipeline order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::EmptyStageLabel`] when a label is blank
    /// and [`BoardConfigError::DuplicateStageLabel`] when two stages share a
    /// label.
    pub fn new(
        backlog: impl Into<String>,
        development: impl Into<String>,
        approved_for_test: impl Into<String>,
        deployed_to_test: impl Into<String>,
        approved_for_prod: impl Into<String>,
    ) -> Result<Self, BoardConfigError> {
        let catalog = Self {
            backlog: backlog.into(),
            development: development.into(),
            approved_for_test: approved_for_test.into(),
            deployed_to_test: deployed_to_test.into(),
            approved_for_prod: approved_for_prod.into(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Creates the catalog with the conventional board labels.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            backlog: "Backlog".to_owned(),
            development: "Development".to_owned(),
            approved_for_test: "Approved for test".to_owned(),
            deployed_to_test: "Deployed to test".to_owned(),
            approved_for_prod: "Approved for prod".to_owned(),
        }
    }

    fn validate(&self) -> Result<(), BoardConfigError> {
        let mut seen: Vec<&str> = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let label = self.label(stage);
            if label.trim().is_empty() {
                return Err(BoardConfigError::EmptyStageLabel(stage));
            }
            if seen.contains(&label) {
                return Err(BoardConfigError::DuplicateStageLabel(label.to_owned()));
            }
            seen.push(label);
        }
        Ok(())
    }

    /// Returns the configured column label for a stage.
    #[must_use]
    pub fn label(&self, stage: Stage) -> &str {
        match stage {
            Stage::Backlog => &self.backlog,
            Stage::Development => &self.development,
            Stage::ApprovedForTest => &self.approved_for_test,
            Stage::DeployedToTest => &self.deployed_to_test,
            Stage::ApprovedForProd => &self.approved_for_prod,
        }
    }

    /// Returns the label of the final pipeline stage.
    #[must_use]
    pub fn last_label(&self) -> &str {
        self.label(Stage::last())
    }

    /// Resolves a column name to its canonical stage by exact label match.
    ///
    /// Returns `None` for columns outside the catalog, such as untracked
    /// staging areas.
    #[must_use]
    pub fn stage_of(&self, column: &str) -> Option<Stage> {
        Stage::ALL
            .into_iter()
            .find(|stage| self.label(*stage) == column)
    }

    /// Tests a column name against a stage's match rule.
    #[must_use]
    pub fn matches(&self, stage: Stage, column: &str) -> bool {
        match stage.rule() {
            StageRule::Substring(needle) => column.to_ascii_lowercase().contains(needle),
            StageRule::ExactLabel => column == self.label(stage),
        }
    }

    /// Labels of the canonical stages strictly after `from` up to and
    /// including `through`, in pipeline order.
    ///
    /// `from` is `None` when the starting column has no catalog position;
    /// the range then begins at the first stage.
    pub fn labels_between(
        &self,
        from: Option<Stage>,
        through: Stage,
    ) -> impl Iterator<Item = &str> {
        let lower = from.map(Stage::position);
        Stage::ALL
            .into_iter()
            .filter(move |stage| {
                stage.position() <= through.position()
                    && lower.is_none_or(|bound| stage.position() > bound)
            })
            .map(|stage| self.label(stage))
    }
}

//! The fixed-shape output row of the stage report.

use crate::board::domain::Stage;
use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the stage report, in output order.
pub const REPORT_HEADER: [&str; 8] = [
    "Number",
    "Title",
    "Label",
    "Backlog",
    "Development",
    "ApprovedForTest",
    "DeployedToTest",
    "ApprovedForProd",
];

/// One output record: issue identity plus one optional date per stage.
///
/// Created by the column projector, filled in by the backfiller, then
/// treated as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRow {
    number: u64,
    title: String,
    label: Option<String>,
    backlog: Option<NaiveDate>,
    development: Option<NaiveDate>,
    approved_for_test: Option<NaiveDate>,
    deployed_to_test: Option<NaiveDate>,
    approved_for_prod: Option<NaiveDate>,
}

impl StageRow {
    /// Creates a row with identity fields set and all stage dates empty.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>, label: Option<String>) -> Self {
        Self {
            number,
            title: title.into(),
            label,
            backlog: None,
            development: None,
            approved_for_test: None,
            deployed_to_test: None,
            approved_for_prod: None,
        }
    }

    /// Returns the issue number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the recorded date for a stage, if any.
    #[must_use]
    pub const fn stage_date(&self, stage: Stage) -> Option<NaiveDate> {
        match stage {
            Stage::Backlog => self.backlog,
            Stage::Development => self.development,
            Stage::ApprovedForTest => self.approved_for_test,
            Stage::DeployedToTest => self.deployed_to_test,
            Stage::ApprovedForProd => self.approved_for_prod,
        }
    }

    /// Sets the date for a stage, overwriting any earlier value.
    pub const fn set_stage_date(&mut self, stage: Stage, date: NaiveDate) {
        let field = match stage {
            Stage::Backlog => &mut self.backlog,
            Stage::Development => &mut self.development,
            Stage::ApprovedForTest => &mut self.approved_for_test,
            Stage::DeployedToTest => &mut self.deployed_to_test,
            Stage::ApprovedForProd => &mut self.approved_for_prod,
        };
        *field = Some(date);
    }

    /// Renders the row as output cells in [`REPORT_HEADER`] order.
    ///
    /// Dates use ISO `YYYY-MM-DD`; empty fields render as empty strings.
    #[must_use]
    pub fn cells(&self) -> [String; 8] {
        [
            self.number.to_string(),
            self.title.clone(),
            self.label.clone().unwrap_or_default(),
            format_date(self.backlog),
            format_date(self.development),
            format_date(self.approved_for_test),
            format_date(self.deployed_to_test),
            format_date(self.approved_for_prod),
        ]
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::ui::theme;

/// Final outcome of a test case as recorded in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    #[default]
    Expected,
    Unexpected,
    Flaky,
    Skipped,
}

impl TestOutcome {
    pub fn icon(&self) -> &'static str {
        match self {
            TestOutcome::Expected => "✔",
            TestOutcome::Unexpected => "✘",
            TestOutcome::Flaky => "⟳",
            TestOutcome::Skipped => "⊘",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TestOutcome::Expected => theme::GREEN,
            TestOutcome::Unexpected => theme::RED,
            TestOutcome::Flaky => theme::YELLOW,
            TestOutcome::Skipped => theme::OVERLAY0,
        }
    }

    /// Label used in filter tokens (`s:<label>`) and in the detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            TestOutcome::Expected => "passed",
            TestOutcome::Unexpected => "failed",
            TestOutcome::Flaky => "flaky",
            TestOutcome::Skipped => "skipped",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "passed" => Some(TestOutcome::Expected),
            "failed" => Some(TestOutcome::Unexpected),
            "flaky" => Some(TestOutcome::Flaky),
            "skipped" => Some(TestOutcome::Skipped),
            _ => None,
        }
    }
}

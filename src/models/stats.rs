use serde::{Deserialize, Serialize};

use super::report::TestCaseSummary;
use super::status::TestOutcome;

/// Aggregate counts for a completed run.
///
/// The counters are trusted as given: nothing checks that
/// `expected + unexpected + flaky + skipped <= total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunStats {
    pub total: u64,
    pub expected: u64,
    pub unexpected: u64,
    pub flaky: u64,
    pub skipped: u64,
    pub ok: bool,
    /// Elapsed wall time in milliseconds.
    pub duration: u64,
}

impl RunStats {
    /// Recompute stats from individual test summaries. Counters saturate
    /// instead of overflowing on hostile durations.
    pub fn from_tests<'a>(tests: impl IntoIterator<Item = &'a TestCaseSummary>) -> Self {
        let mut stats = RunStats::default();
        for test in tests {
            stats.total = stats.total.saturating_add(1);
            stats.duration = stats.duration.saturating_add(test.duration);
            let counter = match test.outcome {
                TestOutcome::Expected => &mut stats.expected,
                TestOutcome::Unexpected => &mut stats.unexpected,
                TestOutcome::Flaky => &mut stats.flaky,
                TestOutcome::Skipped => &mut stats.skipped,
            };
            *counter = counter.saturating_add(1);
        }
        stats.ok = stats.unexpected == 0;
        stats
    }

    /// Duration formatted the way the status bar shows it, e.g. `1m 40s`.
    pub fn duration_display(&self) -> String {
        let secs = self.duration / 1000;
        if secs >= 60 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{:.1}s", self.duration as f64 / 1000.0)
        }
    }
}

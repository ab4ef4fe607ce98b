//! Filter text parsing and matching.
//!
//! Filter text is a whitespace-separated list of tokens:
//! - `s:<status>` keeps tests with that outcome (`passed`, `failed`, `flaky`, `skipped`)
//! - `p:<project>` keeps tests from that project
//! - `@tag` keeps tests carrying the tag
//! - anything else must appear in the title, describe path, file or project

use crate::models::{FileReport, RunStats, TestCaseSummary, TestOutcome};

/// One of the five header tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Passed,
    Failed,
    Flaky,
    Skipped,
}

impl StatusFilter {
    /// Tabs in display order.
    pub const TABS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Passed,
        StatusFilter::Failed,
        StatusFilter::Flaky,
        StatusFilter::Skipped,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Passed => "Passed",
            StatusFilter::Failed => "Failed",
            StatusFilter::Flaky => "Flaky",
            StatusFilter::Skipped => "Skipped",
        }
    }

    /// Filter text requested when the tab is activated.
    pub fn token(&self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Passed => "s:passed",
            StatusFilter::Failed => "s:failed",
            StatusFilter::Flaky => "s:flaky",
            StatusFilter::Skipped => "s:skipped",
        }
    }

    pub fn count(&self, stats: &RunStats) -> u64 {
        match self {
            StatusFilter::All => stats.total,
            StatusFilter::Passed => stats.expected,
            StatusFilter::Failed => stats.unexpected,
            StatusFilter::Flaky => stats.flaky,
            StatusFilter::Skipped => stats.skipped,
        }
    }

    pub fn outcome(&self) -> Option<TestOutcome> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Passed => Some(TestOutcome::Expected),
            StatusFilter::Failed => Some(TestOutcome::Unexpected),
            StatusFilter::Flaky => Some(TestOutcome::Flaky),
            StatusFilter::Skipped => Some(TestOutcome::Skipped),
        }
    }

    fn from_outcome(outcome: TestOutcome) -> Self {
        match outcome {
            TestOutcome::Expected => StatusFilter::Passed,
            TestOutcome::Unexpected => StatusFilter::Failed,
            TestOutcome::Flaky => StatusFilter::Flaky,
            TestOutcome::Skipped => StatusFilter::Skipped,
        }
    }

    /// Tab after this one, wrapping around.
    pub fn next(&self) -> Self {
        let i = Self::TABS.iter().position(|t| t == self).unwrap_or(0);
        Self::TABS[(i + 1) % Self::TABS.len()]
    }

    pub fn previous(&self) -> Self {
        let i = Self::TABS.iter().position(|t| t == self).unwrap_or(0);
        Self::TABS[(i + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

/// Parsed filter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub statuses: Vec<TestOutcome>,
    pub projects: Vec<String>,
    pub tags: Vec<String>,
    pub text: Vec<String>,
}

impl Filter {
    pub fn parse(filter_text: &str) -> Self {
        let mut filter = Filter::default();
        for token in filter_text.split_whitespace() {
            let lower = token.to_lowercase();
            if let Some(status) = lower.strip_prefix("s:") {
                // Unknown statuses are dropped rather than matching nothing.
                if let Some(outcome) = TestOutcome::from_label(status)
                    && !filter.statuses.contains(&outcome)
                {
                    filter.statuses.push(outcome);
                }
            } else if let Some(project) = lower.strip_prefix("p:") {
                filter.projects.push(project.to_string());
            } else if lower.starts_with('@') && lower.len() > 1 {
                filter.tags.push(lower);
            } else {
                filter.text.push(lower);
            }
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
            && self.projects.is_empty()
            && self.tags.is_empty()
            && self.text.is_empty()
    }

    pub fn matches(&self, file: &FileReport, test: &TestCaseSummary) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&test.outcome) {
            return false;
        }

        if !self.projects.is_empty() {
            let project = test.project_name.to_lowercase();
            if !self.projects.iter().any(|p| *p == project) {
                return false;
            }
        }

        if !self.tags.is_empty() {
            let tags: Vec<String> = test.tags.iter().map(|t| t.to_lowercase()).collect();
            if !self.tags.iter().all(|t| tags.contains(t)) {
                return false;
            }
        }

        if !self.text.is_empty() {
            let haystack = format!(
                "{} {} {} {}",
                test.path.join(" "),
                test.title,
                file.file_name,
                test.project_name
            )
            .to_lowercase();
            if !self.text.iter().all(|t| haystack.contains(t.as_str())) {
                return false;
            }
        }

        true
    }

    /// Header tab to highlight: `All` when no status is selected, the status
    /// tab when exactly one is, otherwise none.
    pub fn active_tab(&self) -> Option<StatusFilter> {
        match self.statuses.as_slice() {
            [] => Some(StatusFilter::All),
            [single] => Some(StatusFilter::from_outcome(*single)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> FileReport {
        FileReport {
            file_name: "checkout.spec.ts".into(),
            ..Default::default()
        }
    }

    fn test_case(title: &str, outcome: TestOutcome) -> TestCaseSummary {
        TestCaseSummary {
            title: title.into(),
            path: vec!["cart".into()],
            project_name: "Chromium".into(),
            outcome,
            tags: vec!["@slow".into()],
            ..Default::default()
        }
    }

    #[test]
    fn tab_tokens() {
        let tokens: Vec<&str> = StatusFilter::TABS.iter().map(|t| t.token()).collect();
        assert_eq!(tokens, vec!["", "s:passed", "s:failed", "s:flaky", "s:skipped"]);
    }

    #[test]
    fn tab_counts_follow_stats_fields() {
        let stats = RunStats {
            total: 100,
            expected: 42,
            unexpected: 31,
            flaky: 17,
            skipped: 10,
            ok: false,
            duration: 100_000,
        };
        let counts: Vec<u64> = StatusFilter::TABS.iter().map(|t| t.count(&stats)).collect();
        assert_eq!(counts, vec![100, 42, 31, 17, 10]);
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(StatusFilter::Skipped.next(), StatusFilter::All);
        assert_eq!(StatusFilter::All.previous(), StatusFilter::Skipped);
        assert_eq!(StatusFilter::Passed.next(), StatusFilter::Failed);
    }

    #[test]
    fn parses_token_kinds() {
        let filter = Filter::parse("s:failed p:chromium @slow  total");
        assert_eq!(filter.statuses, vec![TestOutcome::Unexpected]);
        assert_eq!(filter.projects, vec!["chromium".to_string()]);
        assert_eq!(filter.tags, vec!["@slow".to_string()]);
        assert_eq!(filter.text, vec!["total".to_string()]);
    }

    #[test]
    fn empty_text_matches_everything() {
        let filter = Filter::parse("   ");
        assert!(filter.is_empty());
        assert!(filter.matches(&file(), &test_case("anything", TestOutcome::Skipped)));
    }

    #[test]
    fn unknown_status_is_ignored() {
        let filter = Filter::parse("s:bogus");
        assert!(filter.statuses.is_empty());
        assert!(filter.matches(&file(), &test_case("x", TestOutcome::Flaky)));
    }

    #[test]
    fn statuses_are_ored() {
        let filter = Filter::parse("s:passed s:flaky");
        assert!(filter.matches(&file(), &test_case("a", TestOutcome::Expected)));
        assert!(filter.matches(&file(), &test_case("b", TestOutcome::Flaky)));
        assert!(!filter.matches(&file(), &test_case("c", TestOutcome::Unexpected)));
    }

    #[test]
    fn text_terms_search_path_file_and_project() {
        let t = test_case("applies coupon", TestOutcome::Expected);
        assert!(Filter::parse("cart coupon").matches(&file(), &t));
        assert!(Filter::parse("checkout").matches(&file(), &t));
        assert!(Filter::parse("CHROMIUM").matches(&file(), &t));
        assert!(!Filter::parse("coupon refund").matches(&file(), &t));
    }

    #[test]
    fn project_and_tag_filters() {
        let t = test_case("applies coupon", TestOutcome::Expected);
        assert!(Filter::parse("p:chromium @slow").matches(&file(), &t));
        assert!(!Filter::parse("p:firefox").matches(&file(), &t));
        assert!(!Filter::parse("@fast").matches(&file(), &t));
    }

    #[test]
    fn active_tab_tracks_single_status() {
        assert_eq!(Filter::parse("").active_tab(), Some(StatusFilter::All));
        assert_eq!(Filter::parse("login").active_tab(), Some(StatusFilter::All));
        assert_eq!(
            Filter::parse("s:skipped").active_tab(),
            Some(StatusFilter::Skipped)
        );
        assert_eq!(Filter::parse("s:passed s:failed").active_tab(), None);
    }
}

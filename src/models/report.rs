use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::stats::RunStats;
use super::status::TestOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseSummary {
    pub test_id: String,
    pub title: String,
    /// Describe blocks enclosing the test, outermost first.
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub project_name: String,
    pub location: Option<Location>,
    pub outcome: TestOutcome,
    /// Milliseconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TestCaseSummary {
    /// Describe path and title joined for display, e.g. `login › rejects bad password`.
    pub fn full_title(&self) -> String {
        let mut parts: Vec<&str> = self.path.iter().map(String::as_str).collect();
        parts.push(&self.title);
        parts.join(" › ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file_id: String,
    pub file_name: String,
    pub tests: Vec<TestCaseSummary>,
    pub stats: RunStats,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub stats: RunStats,
    pub files: Vec<FileReport>,
    pub project_names: Vec<String>,
}

/// On-disk shape; stats may be omitted and are then recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportFile {
    stats: Option<RunStats>,
    #[serde(default)]
    files: Vec<FileEntry>,
    #[serde(default)]
    project_names: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    #[serde(default)]
    file_id: String,
    file_name: String,
    #[serde(default)]
    tests: Vec<TestCaseSummary>,
    stats: Option<RunStats>,
}

impl Report {
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: ReportFile =
            serde_json::from_str(content).context("failed to parse report JSON")?;

        let files: Vec<FileReport> = raw
            .files
            .into_iter()
            .map(|entry| {
                let stats = entry
                    .stats
                    .unwrap_or_else(|| RunStats::from_tests(&entry.tests));
                FileReport {
                    file_id: entry.file_id,
                    file_name: entry.file_name,
                    tests: entry.tests,
                    stats,
                }
            })
            .collect();

        let stats = raw
            .stats
            .unwrap_or_else(|| RunStats::from_tests(files.iter().flat_map(|f| &f.tests)));

        let mut project_names = raw.project_names;
        if project_names.is_empty() {
            for test in files.iter().flat_map(|f| &f.tests) {
                if !test.project_name.is_empty() && !project_names.contains(&test.project_name) {
                    project_names.push(test.project_name.clone());
                }
            }
        }

        Ok(Self {
            stats,
            files,
            project_names,
        })
    }

    /// All tests in file order, paired with the file they belong to.
    pub fn tests(&self) -> impl Iterator<Item = (&FileReport, &TestCaseSummary)> {
        self.files
            .iter()
            .flat_map(|file| file.tests.iter().map(move |test| (file, test)))
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "lens-report.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Where to find the report when none is given on the command line.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Report file or HTML-report output directory, relative to the working directory.
    /// Example: "playwright-report"
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("playwright-report")
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Filter text applied at startup, e.g. "s:failed".
    #[serde(default)]
    pub default: String,
}

impl Config {
    /// Load `lens-report.toml` from `dir`, falling back to defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
            Self::default()
        })
    }
}

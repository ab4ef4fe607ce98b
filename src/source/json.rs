use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::ReportSource;
use crate::models::Report;

pub const REPORT_FILE_NAME: &str = "report.json";

/// A report stored as a JSON file on disk.
pub struct JsonFileSource {
    path: PathBuf,
    display: String,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        let display = path.to_string_lossy().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl ReportSource for JsonFileSource {
    async fn load(&self) -> Result<Report> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Report::from_json(&content).with_context(|| format!("invalid report {}", self.display))
    }

    fn name(&self) -> &str {
        &self.display
    }
}

pub mod json;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::app::ReportEvent;
use crate::models::Report;

/// Trait for places a report can be loaded from.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Load and parse the report.
    async fn load(&self) -> Result<Report>;

    /// Display name for this source (e.g., the file path).
    fn name(&self) -> &str;
}

/// Construct the source for a report path. A directory is treated as an
/// HTML-report output folder containing `report.json`.
pub fn detect(path: &Path) -> Arc<dyn ReportSource> {
    let file: PathBuf = if path.is_dir() {
        path.join(json::REPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    };
    Arc::new(json::JsonFileSource::new(file))
}

/// Load the report in the background and deliver the outcome as an event.
pub fn spawn_load(source: Arc<dyn ReportSource>, tx: mpsc::UnboundedSender<ReportEvent>) {
    tokio::spawn(async move {
        let event = match source.load().await {
            Ok(report) => {
                tracing::info!(
                    source = source.name(),
                    total = report.stats.total,
                    "report loaded"
                );
                ReportEvent::Loaded(Box::new(report))
            }
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "report load failed");
                ReportEvent::LoadFailed {
                    message: format!("{:#}", e),
                }
            }
        };
        let _ = tx.send(event);
    });
}

pub mod report;
pub mod stats;
pub mod status;

pub use report::{FileReport, Report, TestCaseSummary};
pub use stats::RunStats;
pub use status::TestOutcome;

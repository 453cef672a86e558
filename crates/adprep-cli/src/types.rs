//! Result types for a preparation run.

use std::path::PathBuf;

use adprep_model::Dataset;

/// Outcome of one dataset's pipeline.
#[derive(Debug)]
pub struct DatasetSummary {
    pub dataset: Dataset,
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

/// A dataset whose pipeline aborted, with a human-readable reason.
#[derive(Debug)]
pub struct DatasetFailure {
    pub dataset: Dataset,
    pub message: String,
}

/// Outcome of a full run across all datasets.
#[derive(Debug, Default)]
pub struct RunResult {
    pub prepared: Vec<DatasetSummary>,
    pub failures: Vec<DatasetFailure>,
}

impl RunResult {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

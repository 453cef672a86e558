//! Per-dataset normalization pipelines.
//!
//! Each dataset runs the same conceptual stages in order:
//!
//! 1. **Locate**: find the raw file(s) under the configured root
//! 2. **Normalize**: rename or derive the canonical `is_anomaly` column
//!    (the Yahoo path merges its series files first)
//! 3. **Emit**: write the canonical CSV
//!
//! Pipelines are independent: a failure is recorded and logged, and the
//! remaining datasets still run. No output file is written for a failed
//! dataset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use adprep_ingest::{
    find_file_recursive, list_matching_files, read_csv_table, read_headerless_table,
};
use adprep_model::{Dataset, PrepError, Table};
use adprep_report::write_csv;
use adprep_transform::{KDD_COLUMNS, concat_tables, normalize_kdd, normalize_nab, normalize_yahoo};

use crate::types::{DatasetFailure, DatasetSummary, RunResult};

/// Yahoo S5 series files conventionally live one level down.
const YAHOO_BENCHMARK_SUBFOLDER: &str = "A1Benchmark";

/// Explicit run configuration: one input root per dataset plus the output
/// directory. Built by the CLI; nothing here is ambient process state.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    pub nab_root: PathBuf,
    pub yahoo_root: PathBuf,
    pub kdd_root: PathBuf,
    pub output_dir: PathBuf,
}

impl PrepConfig {
    /// Conventional layout: each dataset under its distribution subfolder
    /// of `source_dir`, outputs under `source_dir/datasets`.
    pub fn from_source_dir(source_dir: &Path) -> Self {
        Self {
            nab_root: source_dir.join(Dataset::Nab.source_subdir()),
            yahoo_root: source_dir.join(Dataset::YahooS5.source_subdir()),
            kdd_root: source_dir.join(Dataset::Kdd99.source_subdir()),
            output_dir: source_dir.join("datasets"),
        }
    }

    pub fn dataset_root(&self, dataset: Dataset) -> &Path {
        match dataset {
            Dataset::Nab => &self.nab_root,
            Dataset::YahooS5 => &self.yahoo_root,
            Dataset::Kdd99 => &self.kdd_root,
        }
    }

    pub fn output_path(&self, dataset: Dataset) -> PathBuf {
        self.output_dir.join(dataset.output_file())
    }
}

/// Runs all three pipelines sequentially, collecting per-dataset outcomes.
///
/// Only the output directory creation can fail the run as a whole; every
/// dataset-level error lands in [`RunResult::failures`].
pub fn run_all(config: &PrepConfig) -> Result<RunResult> {
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output dir: {}", config.output_dir.display()))?;

    let mut result = RunResult::default();
    for dataset in Dataset::ALL {
        let span = info_span!("dataset", name = %dataset);
        let _guard = span.enter();

        let root = config.dataset_root(dataset);
        let output = config.output_path(dataset);
        let outcome = match dataset {
            Dataset::Nab => prepare_nab(root, &output),
            Dataset::YahooS5 => prepare_yahoo(root, &output),
            Dataset::Kdd99 => prepare_kdd(root, &output),
        };
        match outcome {
            Ok(summary) => {
                info!(
                    "wrote {} ({} rows, {} columns)",
                    summary.output.display(),
                    summary.rows,
                    summary.columns
                );
                result.prepared.push(summary);
            }
            Err(err) => {
                error!("skipped: {err:#}");
                result.failures.push(DatasetFailure {
                    dataset,
                    message: format!("{err:#}"),
                });
            }
        }
    }
    Ok(result)
}

/// NAB: find the `Twitter_volume_AMZN.csv` series anywhere under the root,
/// rename its label column, emit.
pub fn prepare_nab(root: &Path, output: &Path) -> Result<DatasetSummary> {
    let path = find_file_recursive(root, Dataset::Nab.source_pattern())?;
    let table = read_csv_table(&path)?;
    let table = normalize_nab(table);
    write_csv(&table, output)?;
    Ok(summarize(Dataset::Nab, &table, output))
}

/// Yahoo S5: glob the `real_*.csv` series (under `A1Benchmark` when that
/// subfolder exists), merge in discovery order, rename, emit.
pub fn prepare_yahoo(root: &Path, output: &Path) -> Result<DatasetSummary> {
    let benchmark = root.join(YAHOO_BENCHMARK_SUBFOLDER);
    let dir = if benchmark.is_dir() {
        benchmark
    } else {
        root.to_path_buf()
    };

    let files = list_matching_files(&dir, Dataset::YahooS5.source_pattern())?;
    if files.is_empty() {
        return Err(PrepError::NoFilesFound {
            path: dir,
            pattern: Dataset::YahooS5.source_pattern().to_string(),
        }
        .into());
    }
    info!("merging {} series file(s)", files.len());

    let mut tables = Vec::with_capacity(files.len());
    for file in &files {
        tables.push(read_csv_table(file)?);
    }
    let table = normalize_yahoo(concat_tables(tables)?);
    write_csv(&table, output)?;
    Ok(summarize(Dataset::YahooS5, &table, output))
}

/// KDD'99: read the single headerless file with the fixed positional
/// schema, derive the binary label, project to numeric columns, emit.
pub fn prepare_kdd(root: &Path, output: &Path) -> Result<DatasetSummary> {
    if !root.is_dir() {
        return Err(PrepError::SourceMissing {
            path: root.to_path_buf(),
        }
        .into());
    }
    let path = root.join(Dataset::Kdd99.source_pattern());
    if !path.is_file() {
        return Err(PrepError::NoFilesFound {
            path: root.to_path_buf(),
            pattern: Dataset::Kdd99.source_pattern().to_string(),
        }
        .into());
    }

    let table = read_headerless_table(&path, &KDD_COLUMNS)?;
    let table = normalize_kdd(table)?;
    write_csv(&table, output)?;
    Ok(summarize(Dataset::Kdd99, &table, output))
}

fn summarize(dataset: Dataset, table: &Table, output: &Path) -> DatasetSummary {
    DatasetSummary {
        dataset,
        rows: table.n_rows(),
        columns: table.n_columns(),
        output: output.to_path_buf(),
    }
}

//! Canonical CSV output.
//!
//! The emitter is the only side-effecting step in the pipeline: one header
//! row in table column order, one record per row, no index column. An
//! existing file at the destination is overwritten, so each run fully
//! regenerates its outputs.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::debug;

use adprep_model::Table;

/// Writes `table` to `path` as a headered CSV file, replacing any existing
/// file.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create output: {}", path.display()))?;

    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;

    debug!("wrote {} rows to {}", table.n_rows(), path.display());
    Ok(())
}

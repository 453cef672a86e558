//! CSV ingestion into [`Table`].
//!
//! Two entry points: [`read_csv_table`] for files with a header row, and
//! [`read_headerless_table`] for raw files whose columns are named
//! positionally from external schema metadata (the KDD'99 distribution
//! ships without headers).

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use adprep_model::Table;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reads a headered CSV file.
///
/// Rows are padded with empty cells (or truncated) to the header width, so
/// every row of the resulting table has the same number of cells.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = Vec::with_capacity(table.n_columns());
        for idx in 0..table.n_columns() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.rows.push(row);
    }

    debug!("{}: {} rows", path.display(), table.n_rows());
    Ok(table)
}

/// Reads a headerless, comma-delimited file, assigning `column_names`
/// positionally: cell *i* of each record becomes column `column_names[i]`.
pub fn read_headerless_table(path: &Path, column_names: &[&str]) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = column_names.iter().map(|name| (*name).to_string()).collect();
    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.n_columns());
        for idx in 0..table.n_columns() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        table.rows.push(row);
    }

    debug!("{}: {} rows", path.display(), table.n_rows());
    Ok(table)
}

use serde::{Deserialize, Serialize};

/// Canonical name of the binary label column shared by all output datasets.
pub const ANOMALY_COLUMN: &str = "is_anomaly";

/// An in-memory tabular dataset.
///
/// Cells stay strings end to end; the canonical output format is text CSV
/// and numeric-ness is a per-column property decided by the transforms, not
/// a cell type. Every row has exactly `headers.len()` cells (readers pad or
/// truncate at ingest time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Index of the column with the given header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Renames the first column named `from` to `to`.
    ///
    /// Returns `false` (leaving the table untouched) when no column is
    /// named `from`.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(index) => {
                self.headers[index] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }
}

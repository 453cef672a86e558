//! Yahoo S5 time-series normalization.

use adprep_model::{ANOMALY_COLUMN, Table};

/// Renames the Yahoo S5 `anomaly` column to `is_anomaly`.
///
/// Applied once to the merged table; the rule is uniform across files, so
/// applying it before or after the merge would give the same result.
pub fn normalize_yahoo(mut table: Table) -> Table {
    table.rename_column("anomaly", ANOMALY_COLUMN);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_anomaly() {
        let table = Table {
            headers: vec!["timestamp".into(), "value".into(), "anomaly".into()],
            rows: vec![vec!["1".into(), "0.5".into(), "0".into()]],
        };

        let normalized = normalize_yahoo(table);
        assert_eq!(normalized.headers, vec!["timestamp", "value", "is_anomaly"]);
        assert_eq!(normalized.rows[0], vec!["1", "0.5", "0"]);
    }
}

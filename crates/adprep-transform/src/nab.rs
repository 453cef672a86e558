//! NAB streaming-metrics normalization.

use tracing::warn;

use adprep_model::{ANOMALY_COLUMN, Table};

/// Renames the NAB `label` column to `is_anomaly`.
///
/// NAB labels are already binary, so the rename is the whole normalization.
/// When no `label` column exists (the raw benchmark files ship unlabeled;
/// labels come from a combined distribution) the table passes through
/// unchanged, with a warning so the missing label is not silent downstream.
pub fn normalize_nab(mut table: Table) -> Table {
    if !table.rename_column("label", ANOMALY_COLUMN) {
        warn!(
            "no `label` column found; output will not carry `{}`",
            ANOMALY_COLUMN
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_label() {
        let table = Table {
            headers: vec!["timestamp".into(), "value".into(), "label".into()],
            rows: vec![
                vec!["t1".into(), "5.0".into(), "0".into()],
                vec!["t2".into(), "9.0".into(), "1".into()],
            ],
        };

        let normalized = normalize_nab(table);
        assert_eq!(normalized.headers, vec!["timestamp", "value", "is_anomaly"]);
        // Header-only change: values are untouched
        assert_eq!(normalized.rows[0], vec!["t1", "5.0", "0"]);
        assert_eq!(normalized.rows[1], vec!["t2", "9.0", "1"]);
    }

    #[test]
    fn test_passthrough_without_label() {
        let table = Table {
            headers: vec!["timestamp".into(), "value".into()],
            rows: vec![vec!["t1".into(), "5.0".into()]],
        };

        let normalized = normalize_nab(table.clone());
        assert_eq!(normalized, table);
    }
}

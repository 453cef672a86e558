//! KDD Cup '99 network-intrusion normalization.

use anyhow::{Context, Result};
use tracing::debug;

use adprep_model::{ANOMALY_COLUMN, Table};

use crate::numeric::is_numeric_value;

/// Positional schema of the KDD Cup '99 distribution: 41 feature names plus
/// the trailing `label`. The order is fixed external metadata from the
/// published task description; reordering it breaks compatibility with the
/// raw files.
pub const KDD_COLUMNS: [&str; 42] = [
    "duration",
    "protocol_type",
    "service",
    "flag",
    "src_bytes",
    "dst_bytes",
    "land",
    "wrong_fragment",
    "urgent",
    "hot",
    "num_failed_logins",
    "logged_in",
    "num_compromised",
    "root_shell",
    "su_attempted",
    "num_root",
    "num_file_creations",
    "num_shells",
    "num_access_files",
    "num_outbound_cmds",
    "is_host_login",
    "is_guest_login",
    "count",
    "srv_count",
    "serror_rate",
    "srv_serror_rate",
    "rerror_rate",
    "srv_rerror_rate",
    "same_srv_rate",
    "diff_srv_rate",
    "srv_diff_host_rate",
    "dst_host_count",
    "dst_host_srv_count",
    "dst_host_same_srv_rate",
    "dst_host_diff_srv_rate",
    "dst_host_same_src_port_rate",
    "dst_host_srv_diff_host_rate",
    "dst_host_serror_rate",
    "dst_host_srv_serror_rate",
    "dst_host_rerror_rate",
    "dst_host_srv_rerror_rate",
    "label",
];

/// Raw label value marking benign traffic. The trailing period is part of
/// the distribution's convention; `"normal"` without it does not match.
const NORMAL_LABEL: &str = "normal.";

/// Derives the binary `is_anomaly` column and projects to numeric features.
///
/// `is_anomaly` is `0` exactly when the raw `label` equals `"normal."` and
/// `1` for every other label string. The output keeps, in their original
/// order, only the columns whose values are all numeric — which drops
/// `protocol_type`, `service`, `flag` and the raw `label` — and appends
/// `is_anomaly` last.
pub fn normalize_kdd(table: Table) -> Result<Table> {
    let label_index = table
        .column_index("label")
        .context("positional schema has no `label` column")?;

    let numeric_indices: Vec<usize> = (0..table.n_columns())
        .filter(|&idx| idx != label_index)
        .filter(|&idx| table.column_values(idx).all(is_numeric_value))
        .collect();
    debug!(
        "{} of {} columns are numeric",
        numeric_indices.len(),
        table.n_columns()
    );

    let mut headers: Vec<String> = numeric_indices
        .iter()
        .map(|&idx| table.headers[idx].clone())
        .collect();
    headers.push(ANOMALY_COLUMN.to_string());

    let mut normalized = Table::new(headers);
    for row in &table.rows {
        let mut projected: Vec<String> = numeric_indices
            .iter()
            .map(|&idx| row[idx].clone())
            .collect();
        let is_anomaly = if row[label_index] == NORMAL_LABEL {
            "0"
        } else {
            "1"
        };
        projected.push(is_anomaly.to_string());
        normalized.rows.push(projected);
    }

    Ok(normalized)
}

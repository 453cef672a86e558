//! Same-schema table concatenation.

use anyhow::{Result, bail};

use adprep_model::Table;

/// Concatenates tables in the given order into one table.
///
/// Row order within each input is preserved and inputs are appended in
/// sequence; nothing is deduplicated. All inputs must carry the first
/// table's exact header list — the Yahoo S5 series files share one schema,
/// so a mismatch means the source folder holds something unexpected.
pub fn concat_tables(tables: Vec<Table>) -> Result<Table> {
    let mut iter = tables.into_iter();
    let Some(mut merged) = iter.next() else {
        bail!("no tables to merge");
    };

    for table in iter {
        if table.headers != merged.headers {
            bail!(
                "schema mismatch while merging: expected columns {:?}, found {:?}",
                merged.headers,
                table.headers
            );
        }
        merged.rows.extend(table.rows);
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[&str]) -> Table {
        Table {
            headers: vec!["timestamp".into(), "value".into(), "anomaly".into()],
            rows: values
                .iter()
                .enumerate()
                .map(|(i, v)| vec![(i + 1).to_string(), (*v).to_string(), "0".into()])
                .collect(),
        }
    }

    #[test]
    fn test_concat_preserves_order() {
        let first = series(&["1.0", "2.0"]);
        let second = series(&["3.0"]);

        let merged = concat_tables(vec![first, second]).unwrap();
        assert_eq!(merged.n_rows(), 3);
        let values: Vec<&str> = merged.column_values(1).collect();
        assert_eq!(values, vec!["1.0", "2.0", "3.0"]);
    }

    #[test]
    fn test_concat_keeps_duplicates() {
        let first = series(&["1.0"]);
        let second = series(&["1.0"]);

        let merged = concat_tables(vec![first, second]).unwrap();
        assert_eq!(merged.n_rows(), 2);
    }

    #[test]
    fn test_concat_rejects_schema_mismatch() {
        let first = series(&["1.0"]);
        let mut second = series(&["2.0"]);
        second.headers[2] = "label".into();

        assert!(concat_tables(vec![first, second]).is_err());
    }

    #[test]
    fn test_concat_rejects_empty_input() {
        assert!(concat_tables(Vec::new()).is_err());
    }

    #[test]
    fn test_concat_single_table_is_identity() {
        let only = series(&["1.0", "2.0"]);
        let merged = concat_tables(vec![only.clone()]).unwrap();
        assert_eq!(merged, only);
    }
}

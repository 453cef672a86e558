//! Numeric column detection.

/// True when a cell parses as a number. Empty cells count as numeric so a
/// sparsely filled numeric column is not misclassified as categorical.
pub fn is_numeric_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_value() {
        assert!(is_numeric_value("0"));
        assert!(is_numeric_value("-12.5"));
        assert!(is_numeric_value("1e-3"));
        assert!(is_numeric_value(""));
        assert!(is_numeric_value("  3 "));
        assert!(!is_numeric_value("tcp"));
        assert!(!is_numeric_value("normal."));
    }
}

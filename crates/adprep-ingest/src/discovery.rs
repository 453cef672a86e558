//! Source file discovery.
//!
//! Benchmark archives unpack with unpredictable nesting, so the NAB pipeline
//! searches recursively for one exactly-named file, while the Yahoo pipeline
//! globs the immediate children of a known folder. Missing roots and empty
//! matches are expected, user-correctable conditions and surface as typed
//! errors rather than panics.

use std::path::{Path, PathBuf};

use tracing::debug;

use adprep_model::{PrepError, Result};

/// Searches `root` recursively for a file whose name equals `exact_name`.
///
/// Visits each directory's files before its subdirectories and returns the
/// first match in directory-listing order.
pub fn find_file_recursive(root: &Path, exact_name: &str) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(PrepError::SourceMissing {
            path: root.to_path_buf(),
        });
    }
    match walk(root, exact_name)? {
        Some(path) => {
            debug!("found {} at {}", exact_name, path.display());
            Ok(path)
        }
        None => Err(PrepError::NoFilesFound {
            path: root.to_path_buf(),
            pattern: exact_name.to_string(),
        }),
    }
}

fn walk(dir: &Path, exact_name: &str) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PrepError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut subdirs = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| PrepError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == exact_name);
        if matches {
            return Ok(Some(path));
        }
    }

    for subdir in subdirs {
        if let Some(found) = walk(&subdir, exact_name)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Lists the immediate children of `dir` whose filename matches `pattern`.
///
/// `pattern` is a glob with at most one `*` wildcard (e.g. `real_*.csv`).
/// Files are returned in directory-listing order; downstream merging is
/// defined over this discovery order, so the result is deliberately not
/// sorted. Zero matches is a valid result — the caller decides whether it
/// is fatal.
pub fn list_matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PrepError::SourceMissing {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| PrepError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| PrepError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if matches_pattern(name, pattern) {
            files.push(path);
        }
    }

    debug!(
        "{} file(s) matching `{}` in {}",
        files.len(),
        pattern,
        dir.display()
    );
    Ok(files)
}

/// Matches a filename against a pattern containing at most one `*`.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => name == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_source_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("realTweets");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Twitter_volume_AMZN.csv"), "timestamp,value\n").unwrap();
        std::fs::write(nested.join("Twitter_volume_GOOG.csv"), "timestamp,value\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "readme").unwrap();
        dir
    }

    #[test]
    fn test_find_file_recursive_nested() {
        let dir = create_source_tree();
        let found = dir
            .path()
            .join("data")
            .join("realTweets")
            .join("Twitter_volume_AMZN.csv");
        let path = find_file_recursive(dir.path(), "Twitter_volume_AMZN.csv").unwrap();
        assert_eq!(path, found);
    }

    #[test]
    fn test_find_file_recursive_missing_root() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        let error = find_file_recursive(&gone, "Twitter_volume_AMZN.csv").unwrap_err();
        assert!(matches!(error, PrepError::SourceMissing { .. }));
    }

    #[test]
    fn test_find_file_recursive_no_match() {
        let dir = create_source_tree();
        let error = find_file_recursive(dir.path(), "Twitter_volume_AAPL.csv").unwrap_err();
        assert!(matches!(error, PrepError::NoFilesFound { .. }));
    }

    #[test]
    fn test_list_matching_files_glob() {
        let dir = TempDir::new().unwrap();
        for name in ["real_1.csv", "real_2.csv", "synthetic_1.csv", "real_notes.txt"] {
            std::fs::write(dir.path().join(name), "anomaly\n0\n").unwrap();
        }
        let files = list_matching_files(dir.path(), "real_*.csv").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| {
            let name = p.file_name().unwrap().to_str().unwrap();
            name.starts_with("real_") && name.ends_with(".csv")
        }));
    }

    #[test]
    fn test_list_matching_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("real_subdir.csv")).unwrap();
        std::fs::write(dir.path().join("real_1.csv"), "anomaly\n").unwrap();
        let files = list_matching_files(dir.path(), "real_*.csv").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_list_matching_files_empty_is_ok() {
        let dir = TempDir::new().unwrap();
        let files = list_matching_files(dir.path(), "real_*.csv").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_matching_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("A1Benchmark");
        let error = list_matching_files(&gone, "real_*.csv").unwrap_err();
        assert!(matches!(error, PrepError::SourceMissing { .. }));
    }

    #[test]
    fn test_matches_pattern() {
        assert!(matches_pattern("real_1.csv", "real_*.csv"));
        assert!(matches_pattern("real_.csv", "real_*.csv"));
        assert!(!matches_pattern("real.csv", "real_*.csv"));
        assert!(!matches_pattern("real_1.csv.bak", "real_*.csv"));
        assert!(matches_pattern("kddcup.data_10_percent", "kddcup.data_10_percent"));
        assert!(!matches_pattern("kddcup.data", "kddcup.data_10_percent"));
    }
}

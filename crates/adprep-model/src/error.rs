use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating source data.
///
/// Both variants describe user-correctable conditions (a download missing or
/// unpacked somewhere unexpected), so a failing dataset aborts only its own
/// pipeline and is reported with the offending path.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("source directory not found: {path}")]
    SourceMissing { path: PathBuf },

    #[error("no files matching `{pattern}` under {path}")]
    NoFilesFound { path: PathBuf, pattern: String },

    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PrepError>;

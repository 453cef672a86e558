//! Shared data model for the anomaly benchmark preparation pipeline.
//!
//! Everything downstream operates on [`Table`]: an in-memory, string-typed
//! CSV table with a canonical binary label column named
//! [`ANOMALY_COLUMN`](table::ANOMALY_COLUMN).

pub mod dataset;
pub mod error;
pub mod table;

pub use dataset::Dataset;
pub use error::{PrepError, Result};
pub use table::{ANOMALY_COLUMN, Table};

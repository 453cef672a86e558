//! Schema normalization for the three benchmark datasets.
//!
//! Each dataset gets its own pure rule over [`adprep_model::Table`]:
//!
//! - NAB: rename `label` to `is_anomaly` (already binary).
//! - Yahoo S5: merge all series files, rename `anomaly` to `is_anomaly`.
//! - KDD'99: assign the fixed positional schema, derive a binary label from
//!   the `label` string, keep only numeric columns.

pub mod kdd;
pub mod merge;
pub mod nab;
pub mod numeric;
pub mod yahoo;

pub use kdd::{KDD_COLUMNS, normalize_kdd};
pub use merge::concat_tables;
pub use nab::normalize_nab;
pub use numeric::is_numeric_value;
pub use yahoo::normalize_yahoo;

//! Library surface of the `adprep` binary: pipeline driver, run results,
//! and logging setup. Kept in a lib so integration tests can drive the
//! pipelines directly.

pub mod logging;
pub mod pipeline;
pub mod types;

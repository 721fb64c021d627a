//! Data model shared by the order-sift crates.

pub mod error;
pub mod object;
pub mod options;
pub mod processing;
pub mod summary;
pub mod table;

pub use error::ModelError;
pub use object::ObjectRef;
pub use options::{
    DEFAULT_INPUT_PREFIX, DEFAULT_OUTPUT_PREFIX, DEFAULT_RETENTION_DAYS, OutputNaming,
    SiftOptions, normalize_prefix,
};
pub use processing::{InvocationOutcome, InvocationResponse, RunReport};
pub use summary::{RowOutcome, RowTally, RunCounts, RunSummary};
pub use table::{HeaderSet, Record, Table};

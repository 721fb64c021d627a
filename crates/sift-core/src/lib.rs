//! Retention filtering for order CSV files.
//!
//! A run reads one object, drops rows whose status is terminal (`pending` or
//! `cancelled`) and whose order date is older than the retention window, and
//! writes the remaining rows under the output prefix. Rows with an order date
//! in no accepted format are skipped and counted separately.

pub mod columns;
pub mod datetime;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod retention;

pub use columns::{FieldResolution, ORDER_DATE_ALIASES, ResolvedColumn, STATUS_ALIASES};
pub use datetime::{
    DATE_FORMATS, DateFormat, DateParseError, parse_order_date, parse_with_format,
};
pub use error::{FailureKind, Result, SiftError};
pub use handler::Handler;
pub use pipeline::{FilterPipeline, FilterRun, PipelineOutcome, REDACTED_VALUE};
pub use retention::{
    RetentionPolicy, RetentionWindow, TERMINAL_STATUSES, is_terminal_status, normalize_status,
};

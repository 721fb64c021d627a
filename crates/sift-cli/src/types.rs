use std::path::PathBuf;

use chrono::NaiveDateTime;

use sift_model::{InvocationResponse, RunSummary, SiftOptions};
use sift_output::LineEnding;

/// Inputs of `sift handle`.
#[derive(Debug, Clone)]
pub struct HandleRequest {
    /// Notification payload file; `-` reads stdin.
    pub event: PathBuf,
    /// Directory holding one subdirectory per bucket.
    pub store_root: PathBuf,
    pub options: SiftOptions,
    /// Fixed evaluation instant instead of the current UTC time.
    pub as_of: Option<NaiveDateTime>,
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone)]
pub struct HandleResult {
    pub response: InvocationResponse,
    /// Present only when an output object was written.
    pub summary: Option<RunSummary>,
}

/// Inputs of `sift filter`.
#[derive(Debug, Clone)]
pub struct FilterRequest {
    pub input: PathBuf,
    /// Destination file; stdout when absent.
    pub output: Option<PathBuf>,
    pub retention_days: u32,
    pub as_of: Option<NaiveDateTime>,
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone)]
pub struct FilterResult {
    pub summary: RunSummary,
    /// False for a zero-length input, where nothing is written.
    pub written: bool,
}

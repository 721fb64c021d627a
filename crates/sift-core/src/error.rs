//! Fatal errors of a filtering run.

use thiserror::Error;

use sift_ingest::IngestError;
use sift_model::ObjectRef;
use sift_output::OutputError;

/// Broad class of a fatal error, for callers deciding how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input is unusable as delivered: bad event, no header, missing columns.
    Structural,
    /// Reading, decoding, encoding or writing data failed.
    Storage,
}

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("CSV has no header row: {location}")]
    MissingHeader { location: String },

    #[error("missing required columns ({}) in {location}; found headers={found:?}", .missing.join(", "))]
    MissingColumns {
        location: String,
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("output {output} would overwrite its own input")]
    OutputOverwritesInput { output: ObjectRef },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl SiftError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingHeader { .. }
            | Self::MissingColumns { .. }
            | Self::OutputOverwritesInput { .. } => FailureKind::Structural,
            Self::Ingest(IngestError::BadEvent { .. } | IngestError::BadObjectRef(_)) => {
                FailureKind::Structural
            }
            Self::Ingest(_) | Self::Output(_) => FailureKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;

//! Error types for reading input objects.

use std::path::PathBuf;
use thiserror::Error;

use sift_model::{ModelError, ObjectRef};

/// Errors that can occur while locating, reading, or decoding input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Event Errors ===
    /// Notification payload is not valid JSON or lacks the object reference.
    #[error("bad event structure: {reason}")]
    BadEvent { reason: String },

    /// Notification names an unusable object.
    #[error("bad object reference in event: {0}")]
    BadObjectRef(#[from] ModelError),

    // === Storage Errors ===
    /// Object does not exist.
    #[error("object not found: {object}")]
    ObjectNotFound { object: ObjectRef },

    /// Failed to read an object.
    #[error("error reading {object}: {source}")]
    ObjectRead {
        object: ObjectRef,
        #[source]
        source: object_store::Error,
    },

    /// Failed to write an object.
    #[error("error writing {object}: {source}")]
    ObjectWrite {
        object: ObjectRef,
        #[source]
        source: object_store::Error,
    },

    /// Key is not a valid store path (empty, `.` or `..` segments).
    #[error("unusable object key {key}: {source}")]
    UnsafeKey {
        key: String,
        #[source]
        source: object_store::path::Error,
    },

    /// Local store root could not be opened.
    #[error("cannot open store root {path}: {source}")]
    StoreRoot {
        path: PathBuf,
        #[source]
        source: object_store::Error,
    },

    /// Local file could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Object body is not UTF-8 text.
    #[error("{location} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        location: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Tabular text could not be parsed.
    #[error("failed to parse CSV {location}: {message}")]
    CsvParse { location: String, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

//! Input side of the order filter.
//!
//! This crate turns an object-created notification into decoded tabular
//! data and provides the header lookup used to find required columns.
//!
//! # Features
//!
//! - **Events**: Decode notification payloads into an [`ObjectRef`](sift_model::ObjectRef)
//! - **Storage**: Whole-object reads and writes through [`ObjectStorage`]
//! - **CSV Loading**: UTF-8 decoding and header-row parsing into a [`Table`](sift_model::Table)
//! - **Header Lookup**: Case, space and underscore insensitive column resolution
//!
//! # Example
//!
//! ```ignore
//! use sift_ingest::{NormalizationMap, ObjectStorage, object_from_event, parse_table};
//!
//! let object = object_from_event(&event_json)?;
//! let store = ObjectStorage::local("/var/lib/sift")?;
//! let text = sift_ingest::decode_utf8(store.get(&object)?, &object.to_string())?;
//! let table = parse_table(&text, &object.to_string())?;
//! let lookup = NormalizationMap::from_headers(&table.headers);
//! let status = lookup.resolve(&["status", "order status"]);
//! ```

mod csv;
mod error;
mod event;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    NormalizationMap, canonical_key, decode_utf8, normalize_headers, parse_table, read_text_file,
};

// === Events ===
pub use event::{NotificationEvent, decode_object_key, object_from_event};

// === Storage ===
pub use store::{CSV_CONTENT_TYPE, ObjectStorage};

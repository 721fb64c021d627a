//! CSV reading utilities.

mod header;
mod reader;

pub use header::{NormalizationMap, canonical_key, normalize_headers};
pub use reader::{decode_utf8, parse_table, read_text_file};

//! Output generation for filtered order files.
//!
//! - **CSV**: header row plus kept records, original column order
//! - **Naming**: tagged or mirrored output keys derived from the input key

mod csv_writer;
mod error;
mod naming;

pub use csv_writer::{CsvWriterOptions, LineEnding, write_table, write_table_to};
pub use error::{OutputError, Result};
pub use naming::{is_under_prefix, output_key, output_object, strip_prefix_segments};

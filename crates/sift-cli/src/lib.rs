//! Library side of the `sift` binary.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

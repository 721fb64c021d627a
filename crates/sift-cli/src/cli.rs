//! CLI argument definitions for `sift`.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sift_cli::types::{FilterRequest, HandleRequest};
use sift_core::parse_order_date;
use sift_model::{DEFAULT_INPUT_PREFIX, DEFAULT_OUTPUT_PREFIX, DEFAULT_RETENTION_DAYS, SiftOptions};
use sift_output::LineEnding;

#[derive(Parser)]
#[command(
    name = "sift",
    version,
    about = "Drop stale pending and cancelled orders from CSV exports",
    long_about = "Drop stale pending and cancelled orders from CSV exports.\n\n\
                  Rows whose status is pending or cancelled and whose order date is\n\
                  older than the retention window are removed; every other row is\n\
                  copied unchanged. Rows with an unrecognized order date are skipped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include row values (status, order date) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Handle an object-created notification against a local object store.
    Handle(HandleArgs),

    /// Filter a local CSV file.
    Filter(FilterArgs),
}

#[derive(Args)]
pub struct RetentionArgs {
    /// Age in days beyond which pending and cancelled orders are dropped.
    #[arg(
        long = "days-window",
        env = "DAYS_WINDOW",
        value_name = "DAYS",
        default_value_t = DEFAULT_RETENTION_DAYS
    )]
    pub days_window: u32,

    /// Evaluate the window at this instant instead of now (UTC).
    #[arg(long = "as-of", value_name = "DATETIME", value_parser = parse_as_of)]
    pub as_of: Option<NaiveDateTime>,
}

#[derive(Args)]
pub struct HandleArgs {
    /// Notification payload file (`-` for stdin).
    #[arg(value_name = "EVENT_JSON")]
    pub event: PathBuf,

    /// Directory holding one subdirectory per bucket.
    #[arg(
        long = "store-root",
        env = "SIFT_STORE_ROOT",
        value_name = "DIR",
        default_value = "."
    )]
    pub store_root: PathBuf,

    /// Key prefix of objects to process.
    #[arg(
        long = "raw-prefix",
        env = "RAW_PREFIX",
        value_name = "PREFIX",
        default_value = DEFAULT_INPUT_PREFIX
    )]
    pub raw_prefix: String,

    /// Key prefix filtered objects are written under.
    #[arg(
        long = "processed-prefix",
        env = "PROCESSED_PREFIX",
        value_name = "PREFIX",
        default_value = DEFAULT_OUTPUT_PREFIX
    )]
    pub processed_prefix: String,

    /// Prepend this tag to the file name and drop sub-directories.
    ///
    /// Without a tag the input path below the raw prefix is mirrored under
    /// the processed prefix.
    #[arg(long = "output-tag", env = "OUTPUT_PREFIX_TAG", value_name = "TAG")]
    pub output_tag: Option<String>,

    /// Record terminator of the written object.
    #[arg(long = "line-ending", value_enum, default_value = "crlf")]
    pub line_ending: LineEndingArg,

    #[command(flatten)]
    pub retention: RetentionArgs,
}

#[derive(Args)]
pub struct FilterArgs {
    /// CSV file to filter.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Record terminator of the written file.
    #[arg(long = "line-ending", value_enum, default_value = "crlf")]
    pub line_ending: LineEndingArg,

    #[command(flatten)]
    pub retention: RetentionArgs,
}

impl HandleArgs {
    pub fn to_request(&self) -> HandleRequest {
        let options = SiftOptions::new()
            .with_input_prefix(&self.raw_prefix)
            .with_output_prefix(&self.processed_prefix)
            .with_retention_days(self.retention.days_window)
            .with_output_tag(self.output_tag.clone());
        HandleRequest {
            event: self.event.clone(),
            store_root: self.store_root.clone(),
            options,
            as_of: self.retention.as_of,
            line_ending: self.line_ending.into(),
        }
    }
}

impl FilterArgs {
    pub fn to_request(&self) -> FilterRequest {
        FilterRequest {
            input: self.input.clone(),
            output: self.output.clone(),
            retention_days: self.retention.days_window,
            as_of: self.retention.as_of,
            line_ending: self.line_ending.into(),
        }
    }
}

/// Accepts any order date spelling, e.g. `2025-06-01` or `2025-06-01 12:00:00`.
fn parse_as_of(value: &str) -> Result<NaiveDateTime, String> {
    parse_order_date(value).map_err(|error| error.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LineEndingArg {
    Crlf,
    Lf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Crlf => Self::Crlf,
            LineEndingArg::Lf => Self::Lf,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! Row scan over one decoded input.
//!
//! The pipeline takes the whole text of an input, parses it, resolves the
//! required columns and runs every record through a [`RetentionPolicy`].
//! Kept records are moved into a new table that shares the input header row,
//! so the output preserves the original column order and header spelling.

use tracing::{debug, info_span, trace};

use sift_ingest::parse_table;
use sift_model::{RowOutcome, RowTally, RunCounts, Table};

use crate::columns::FieldResolution;
use crate::error::{Result, SiftError};
use crate::retention::RetentionPolicy;

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRun {
    /// Header row and kept records, in input order.
    pub table: Table,
    pub counts: RunCounts,
    pub fields: FieldResolution,
}

/// Non-fatal result of running the pipeline on one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Zero-length input; nothing to write.
    Empty,
    Filtered(FilterRun),
}

/// Placeholder logged instead of row values unless value logging is enabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Parses, classifies and collects kept rows for one input.
#[derive(Debug, Clone, Copy)]
pub struct FilterPipeline {
    policy: RetentionPolicy,
    log_values: bool,
}

impl FilterPipeline {
    pub fn new(policy: RetentionPolicy) -> Self {
        Self {
            policy,
            log_values: false,
        }
    }

    /// Include raw status and date values in per-row trace events.
    #[must_use]
    pub fn with_log_values(mut self, enable: bool) -> Self {
        self.log_values = enable;
        self
    }

    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Run over decoded text. `location` only labels logs and errors.
    pub fn run_text(&self, text: &str, location: &str) -> Result<PipelineOutcome> {
        if text.is_empty() {
            debug!(location, "empty input");
            return Ok(PipelineOutcome::Empty);
        }
        let table = parse_table(text, location)?;
        self.run_table(table, location).map(PipelineOutcome::Filtered)
    }

    /// Run over an already parsed table.
    pub fn run_table(&self, table: Table, location: &str) -> Result<FilterRun> {
        let span = info_span!("filter", location, cutoff = %self.policy.cutoff());
        let _guard = span.enter();

        if table.headers.is_empty() {
            return Err(SiftError::MissingHeader {
                location: location.to_string(),
            });
        }
        let fields = FieldResolution::resolve(&table.headers, location)?;
        debug!(
            status = %fields.status.header,
            order_date = %fields.order_date.header,
            "resolved columns"
        );

        let Table { headers, records } = table;
        let mut kept = Table::new(headers);
        let mut tally = RowTally::new();

        for record in records {
            let status = record.value(fields.status.index);
            let order_date = record.value(fields.order_date.index);
            let outcome = self.policy.decide(status, order_date);
            trace!(
                row = record.position,
                status = self.redact(status),
                order_date = self.redact(order_date),
                ?outcome,
                "classified"
            );
            if outcome == RowOutcome::BadDate {
                debug!(row = record.position, "unparsable order date, row skipped");
            }
            tally.record(outcome);
            if outcome.is_kept() {
                kept.push_record(record);
            }
        }

        let counts = tally.finish();
        debug!(%counts, "scan complete");
        Ok(FilterRun {
            table: kept,
            counts,
            fields,
        })
    }

    fn redact<'a>(&self, value: &'a str) -> &'a str {
        if self.log_values { value } else { REDACTED_VALUE }
    }
}

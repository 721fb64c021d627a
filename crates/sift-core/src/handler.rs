//! Event-triggered entry point: one notification in, one filtered object out.

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, info_span, warn};

use sift_ingest::{CSV_CONTENT_TYPE, ObjectStorage, decode_utf8, object_from_event};
use sift_model::{InvocationOutcome, ObjectRef, RunReport, SiftOptions};
use sift_output::{CsvWriterOptions, is_under_prefix, output_object, write_table};

use crate::error::{Result, SiftError};
use crate::pipeline::{FilterPipeline, PipelineOutcome};
use crate::retention::{RetentionPolicy, RetentionWindow};

/// Processes object-created notifications against an [`ObjectStorage`].
///
/// The retention cutoff is anchored once per invocation, at the current UTC
/// time unless a fixed instant was supplied with [`Handler::with_now`].
#[derive(Debug)]
pub struct Handler {
    store: ObjectStorage,
    options: SiftOptions,
    writer: CsvWriterOptions,
    now: Option<NaiveDateTime>,
    log_values: bool,
}

impl Handler {
    pub fn new(store: ObjectStorage, options: SiftOptions) -> Self {
        Self {
            store,
            options,
            writer: CsvWriterOptions::default(),
            now: None,
            log_values: false,
        }
    }

    /// Evaluate the retention window against a fixed instant.
    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Serialization settings of the written object (CRLF records by default).
    #[must_use]
    pub fn with_writer_options(mut self, writer: CsvWriterOptions) -> Self {
        self.writer = writer;
        self
    }

    /// Log raw row values in per-row trace events.
    #[must_use]
    pub fn with_log_values(mut self, enable: bool) -> Self {
        self.log_values = enable;
        self
    }

    pub fn store(&self) -> &ObjectStorage {
        &self.store
    }

    /// Decode a notification payload and process the object it names.
    pub fn handle_event(&self, event_json: &str) -> Result<InvocationOutcome> {
        let input = object_from_event(event_json)?;
        self.handle_object(&input)
    }

    /// Filter one stored object and write the result next to it.
    pub fn handle_object(&self, input: &ObjectRef) -> Result<InvocationOutcome> {
        let span = info_span!("invocation", input = %input);
        let _guard = span.enter();

        if !is_under_prefix(&input.key, &self.options.input_prefix) {
            info!(prefix = %self.options.input_prefix, "object outside input prefix, ignored");
            return Ok(InvocationOutcome::Ignored {
                input: input.clone(),
                prefix: self.options.input_prefix.clone(),
            });
        }

        let location = input.to_string();
        let body = self.store.get(input)?;
        debug!(bytes = body.len(), "object read");
        let text = decode_utf8(body, &location)?;

        let run = match self.pipeline().run_text(&text, &location)? {
            PipelineOutcome::Empty => {
                info!("empty object, nothing written");
                return Ok(InvocationOutcome::Empty {
                    input: input.clone(),
                });
            }
            PipelineOutcome::Filtered(run) => run,
        };

        let output = output_object(input, &self.options);
        if output == *input {
            return Err(SiftError::OutputOverwritesInput { output });
        }
        let encoded = write_table(&run.table, &self.writer)?;
        self.store.put(&output, &encoded, CSV_CONTENT_TYPE)?;

        if run.counts.bad_date > 0 {
            warn!(rows = run.counts.bad_date, "rows skipped for unparsable order dates");
        }
        info!(output = %output, counts = %run.counts, "filtered object written");
        Ok(InvocationOutcome::Processed(RunReport::new(
            input, &output, run.counts,
        )))
    }

    fn pipeline(&self) -> FilterPipeline {
        let now = self.now.unwrap_or_else(|| Utc::now().naive_utc());
        let window = RetentionWindow::days(self.options.retention_days);
        FilterPipeline::new(RetentionPolicy::new(window, now)).with_log_values(self.log_values)
    }
}

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use tracing::{info, info_span};

use sift_core::{FilterPipeline, Handler, PipelineOutcome, RetentionPolicy, RetentionWindow};
use sift_ingest::{ObjectStorage, read_text_file};
use sift_model::{InvocationOutcome, RunCounts, RunSummary};
use sift_output::{CsvWriterOptions, write_table_to};

use crate::logging::log_data_enabled;
use crate::types::{FilterRequest, FilterResult, HandleRequest, HandleResult};

/// Process one notification against a directory-backed store.
pub fn run_handle(request: &HandleRequest) -> Result<HandleResult> {
    let event = read_event(&request.event)?;
    let store = ObjectStorage::local(&request.store_root).context("open object store")?;
    let mut handler = Handler::new(store, request.options.clone())
        .with_writer_options(CsvWriterOptions::default().with_line_ending(request.line_ending))
        .with_log_values(log_data_enabled());
    if let Some(now) = request.as_of {
        handler = handler.with_now(now);
    }

    let outcome = handler.handle_event(&event).context("handle event")?;
    let summary = match &outcome {
        InvocationOutcome::Processed(report) => Some(report.summary()),
        InvocationOutcome::Ignored { .. } | InvocationOutcome::Empty { .. } => None,
    };
    let response = outcome.into_response().context("encode response")?;
    Ok(HandleResult { response, summary })
}

/// Filter a local CSV file into `request.output` or stdout.
pub fn run_filter(request: &FilterRequest) -> Result<FilterResult> {
    let location = request.input.display().to_string();
    let span = info_span!("filter_file", input = %location);
    let _guard = span.enter();

    let text = read_text_file(&request.input)?;
    let now = request.as_of.unwrap_or_else(|| Utc::now().naive_utc());
    let pipeline = pipeline(request.retention_days, now);

    let run = match pipeline.run_text(&text, &location)? {
        PipelineOutcome::Empty => {
            info!("empty input, nothing written");
            return Ok(FilterResult {
                summary: RunSummary {
                    input: location,
                    output: "-".to_string(),
                    counts: RunCounts::default(),
                },
                written: false,
            });
        }
        PipelineOutcome::Filtered(run) => run,
    };

    let options = CsvWriterOptions::default().with_line_ending(request.line_ending);
    let output = match &request.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            write_table_to(&mut sink, &run.table, &options)
                .with_context(|| format!("write {}", path.display()))?;
            sink.flush()
                .with_context(|| format!("write {}", path.display()))?;
            path.display().to_string()
        }
        None => {
            let stdout = io::stdout();
            write_table_to(stdout.lock(), &run.table, &options).context("write stdout")?;
            "<stdout>".to_string()
        }
    };
    info!(output = %output, counts = %run.counts, "filtered file written");

    Ok(FilterResult {
        summary: RunSummary {
            input: location,
            output,
            counts: run.counts,
        },
        written: true,
    })
}

fn pipeline(retention_days: u32, now: NaiveDateTime) -> FilterPipeline {
    let policy = RetentionPolicy::new(RetentionWindow::days(retention_days), now);
    FilterPipeline::new(policy).with_log_values(log_data_enabled())
}

fn read_event(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut event = String::new();
        io::stdin()
            .read_to_string(&mut event)
            .context("read event from stdin")?;
        return Ok(event);
    }
    std::fs::read_to_string(path).with_context(|| format!("read event {}", path.display()))
}

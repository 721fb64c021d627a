use serde::{Deserialize, Serialize};

use crate::{ObjectRef, RunCounts, RunSummary};

/// Non-fatal result of one invocation.
///
/// Fatal conditions (structural or storage failures) are reported as errors
/// by the handler and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Key is outside the watched input prefix; nothing was read or written.
    Ignored { input: ObjectRef, prefix: String },
    /// Input had no lines; nothing was written.
    Empty { input: ObjectRef },
    /// Input was filtered and the output object written.
    Processed(RunReport),
}

/// Report for a processed object, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub bucket: String,
    pub input_key: String,
    pub output_key: String,
    pub total: usize,
    /// Rows written to the output (kept rows).
    pub processed: usize,
    pub filtered_out: usize,
    pub skipped_bad_date: usize,
}

impl RunReport {
    pub fn new(input: &ObjectRef, output: &ObjectRef, counts: RunCounts) -> Self {
        Self {
            bucket: input.bucket.clone(),
            input_key: input.key.clone(),
            output_key: output.key.clone(),
            total: counts.total,
            processed: counts.kept,
            filtered_out: counts.filtered_out,
            skipped_bad_date: counts.bad_date,
        }
    }

    pub fn counts(&self) -> RunCounts {
        RunCounts {
            total: self.total,
            kept: self.processed,
            filtered_out: self.filtered_out,
            bad_date: self.skipped_bad_date,
        }
    }

    /// Location-labelled summary for display.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            input: format!("s3://{}/{}", self.bucket, self.input_key),
            output: format!("s3://{}/{}", self.bucket, self.output_key),
            counts: self.counts(),
        }
    }
}

/// Payload returned to the triggering caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationOutcome {
    /// Convert into the caller-facing payload.
    pub fn into_response(self) -> Result<InvocationResponse, serde_json::Error> {
        let body = match self {
            Self::Ignored { prefix, .. } => format!("Not a {prefix}/ object, ignored."),
            Self::Empty { .. } => "Empty file; nothing to process.".to_string(),
            Self::Processed(report) => serde_json::to_string(&report)?,
        };
        Ok(InvocationResponse {
            status_code: 200,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ObjectRef {
        ObjectRef::new("orders", "raw/orders.csv").unwrap()
    }

    #[test]
    fn ignored_and_empty_bodies() {
        let ignored = InvocationOutcome::Ignored {
            input: input(),
            prefix: "raw".into(),
        }
        .into_response()
        .unwrap();
        assert_eq!(ignored.status_code, 200);
        assert_eq!(ignored.body, "Not a raw/ object, ignored.");

        let empty = InvocationOutcome::Empty { input: input() }
            .into_response()
            .unwrap();
        assert_eq!(empty.body, "Empty file; nothing to process.");
    }

    #[test]
    fn processed_body_is_report_json() {
        let output = input().with_key("processed/orders.csv");
        let counts = RunCounts {
            total: 5,
            kept: 3,
            filtered_out: 1,
            bad_date: 1,
        };
        let report = RunReport::new(&input(), &output, counts);
        assert_eq!(report.counts(), counts);

        let response = InvocationOutcome::Processed(report).into_response().unwrap();
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["bucket"], "orders");
        assert_eq!(body["input_key"], "raw/orders.csv");
        assert_eq!(body["output_key"], "processed/orders.csv");
        assert_eq!(body["processed"], 3);
        assert_eq!(body["filtered_out"], 1);
        assert_eq!(body["skipped_bad_date"], 1);
        assert_eq!(body["total"], 5);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
    }

    #[test]
    fn report_summary_labels_locations() {
        let output = input().with_key("processed/orders.csv");
        let summary = RunReport::new(&input(), &output, RunCounts::default()).summary();
        assert_eq!(summary.input, "s3://orders/raw/orders.csv");
        assert_eq!(summary.output, "s3://orders/processed/orders.csv");
    }
}

//! End-to-end invocations against filesystem and in-memory stores.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use object_store::memory::InMemory;
use tempfile::TempDir;

use sift_core::{FailureKind, Handler, SiftError};
use sift_ingest::{CSV_CONTENT_TYPE, IngestError, ObjectStorage};
use sift_model::{InvocationOutcome, ObjectRef, SiftOptions};

const ORDERS: &str = "\
Order ID,Customer,Order Status,ORDER_DATE
1,Ada,Pending,2025-01-15
2,Grace,Pending,2025-06-01
3,Linus,Shipped,not-a-date
4,\"Hopper, G\",Cancelled,05/02/2025
5,Ken,Delivered,2020-01-01
";

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn event(bucket: &str, key: &str) -> String {
    serde_json::json!({
        "Records": [{
            "eventSource": "aws:s3",
            "s3": {
                "bucket": { "name": bucket },
                "object": { "key": key, "size": 128 }
            }
        }]
    })
    .to_string()
}

fn object(key: &str) -> ObjectRef {
    ObjectRef::new("orders", key).unwrap()
}

fn memory_handler(options: SiftOptions) -> Handler {
    let store = ObjectStorage::new(Arc::new(InMemory::new()));
    Handler::new(store, options).with_now(now())
}

fn seed(handler: &Handler, key: &str, body: impl AsRef<[u8]>) {
    handler
        .store()
        .put(&object(key), body.as_ref(), CSV_CONTENT_TYPE)
        .unwrap();
}

fn stored(handler: &Handler, key: &str) -> Option<Vec<u8>> {
    match handler.store().get(&object(key)) {
        Ok(body) => Some(body),
        Err(IngestError::ObjectNotFound { .. }) => None,
        Err(other) => panic!("unexpected store error: {other}"),
    }
}

#[test]
fn processes_event_and_writes_filtered_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("orders/raw")).unwrap();
    std::fs::write(dir.path().join("orders/raw/June Orders.csv"), ORDERS).unwrap();
    let store = ObjectStorage::local(dir.path()).unwrap();

    let handler = Handler::new(store, SiftOptions::default()).with_now(now());
    let outcome = handler
        .handle_event(&event("orders", "raw/June+Orders.csv"))
        .unwrap();

    let response = outcome.into_response().unwrap();
    assert_eq!(response.status_code, 200);
    insta::assert_snapshot!(response.body, @r#"{"bucket":"orders","input_key":"raw/June Orders.csv","output_key":"processed/June Orders.csv","total":5,"processed":2,"filtered_out":2,"skipped_bad_date":1}"#);

    let written = std::fs::read_to_string(dir.path().join("orders/processed/June Orders.csv")).unwrap();
    assert_eq!(
        written,
        "Order ID,Customer,Order Status,ORDER_DATE\r\n\
         2,Grace,Pending,2025-06-01\r\n\
         5,Ken,Delivered,2020-01-01\r\n"
    );
}

#[test]
fn tagged_output_name() {
    let handler = memory_handler(SiftOptions::new().with_output_tag(Some("filtered_".into())));
    seed(&handler, "raw/2025/06/orders.csv", ORDERS);

    let outcome = handler.handle_object(&object("raw/2025/06/orders.csv")).unwrap();
    let InvocationOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    assert_eq!(report.output_key, "processed/filtered_orders.csv");
    assert!(stored(&handler, "processed/filtered_orders.csv").is_some());
}

#[test]
fn header_is_written_when_every_row_is_dropped() {
    let handler = memory_handler(SiftOptions::default());
    seed(
        &handler,
        "raw/a.csv",
        "status,Order Date,id\ncancelled,2020-01-01,1\npending,junk,2\n",
    );
    let outcome = handler.handle_object(&object("raw/a.csv")).unwrap();
    let InvocationOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    assert_eq!(report.processed, 0);
    assert_eq!(report.filtered_out, 1);
    assert_eq!(report.skipped_bad_date, 1);
    assert_eq!(
        stored(&handler, "processed/a.csv").unwrap(),
        b"status,Order Date,id\r\n"
    );
}

#[test]
fn ignored_and_empty_responses() {
    let handler = memory_handler(SiftOptions::default());
    let response = handler
        .handle_event(&event("orders", "incoming/a.csv"))
        .unwrap()
        .into_response()
        .unwrap();
    assert_eq!(response.body, "Not a raw/ object, ignored.");

    seed(&handler, "raw/empty.csv", "");
    let response = handler
        .handle_event(&event("orders", "raw/empty.csv"))
        .unwrap()
        .into_response()
        .unwrap();
    assert_eq!(response.body, "Empty file; nothing to process.");
    assert!(stored(&handler, "processed/empty.csv").is_none());
}

#[test]
fn missing_columns_write_nothing() {
    let handler = memory_handler(SiftOptions::default());
    seed(&handler, "raw/a.csv", "id,state,when\n1,pending,2020-01-01\n");
    let err = handler.handle_object(&object("raw/a.csv")).unwrap_err();
    assert!(matches!(err, SiftError::MissingColumns { .. }));
    assert_eq!(err.kind(), FailureKind::Structural);
    assert!(stored(&handler, "processed/a.csv").is_none());
}

#[test]
fn bom_and_invalid_utf8() {
    let handler = memory_handler(SiftOptions::default());
    seed(&handler, "raw/bom.csv", "\u{feff}Status,Date\nshipped,2025-01-01\n");
    let outcome = handler.handle_object(&object("raw/bom.csv")).unwrap();
    assert!(matches!(outcome, InvocationOutcome::Processed(ref r) if r.processed == 1));

    seed(&handler, "raw/latin1.csv", [b'S', 0xE9, b'\n']);
    let err = handler.handle_object(&object("raw/latin1.csv")).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Storage);
}

#[test]
fn malformed_event_is_structural() {
    let handler = memory_handler(SiftOptions::default());
    let err = handler.handle_event("{\"Records\": []}").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Structural);
}

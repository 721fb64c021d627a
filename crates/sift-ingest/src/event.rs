//! Object-created notification events.
//!
//! Only the fields needed to locate the new object are modeled; everything
//! else in the payload is ignored.

use serde::Deserialize;
use tracing::warn;
use url::form_urlencoded;

use sift_model::ObjectRef;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRecord {
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageEntity {
    pub bucket: BucketEntity,
    pub object: ObjectEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketEntity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntity {
    /// Form-URL-encoded object key, as delivered in the notification.
    pub key: String,
}

impl NotificationEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IngestError::BadEvent {
            reason: e.to_string(),
        })
    }

    /// Reference to the object named by the first record.
    ///
    /// One invocation handles one object; extra records are reported and
    /// left to their own notifications.
    pub fn object_ref(&self) -> Result<ObjectRef> {
        let Some(first) = self.records.first() else {
            return Err(IngestError::BadEvent {
                reason: "event has no Records".to_string(),
            });
        };
        if self.records.len() > 1 {
            warn!(
                record_count = self.records.len(),
                "event carries multiple records; only the first is processed"
            );
        }
        let key = decode_object_key(&first.s3.object.key);
        Ok(ObjectRef::new(first.s3.bucket.name.clone(), key)?)
    }
}

/// Parse a notification payload and return the object it refers to.
pub fn object_from_event(json: &str) -> Result<ObjectRef> {
    NotificationEvent::from_json(json)?.object_ref()
}

/// Decode a form-URL-encoded key: `+` becomes a space and `%XX` escapes
/// are resolved. Literal `&` and `=` are kept as part of the key.
pub fn decode_object_key(raw: &str) -> String {
    let escaped = raw.replace('&', "%26").replace('=', "%3D");
    form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

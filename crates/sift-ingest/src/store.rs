//! Object storage access.
//!
//! Objects live in an [`object_store`] backend: [`LocalFileSystem`] rooted at
//! a directory for the CLI, any other implementation (such as
//! [`InMemory`](object_store::memory::InMemory)) when embedding. An
//! [`ObjectRef`] maps to the store path `<bucket>/<key>`.
//!
//! The filter reads and writes whole objects one at a time, so each async
//! call is driven to completion on the calling thread.

use std::path::Path as FsPath;
use std::sync::Arc;

use futures::executor::block_on;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use tracing::trace;

use sift_model::ObjectRef;

use crate::error::{IngestError, Result};

/// Content type used for CSV objects.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Whole-object reads and writes against an [`ObjectStore`].
#[derive(Debug, Clone)]
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    /// Whether the backend records object attributes such as content type.
    keeps_attributes: bool,
}

impl ObjectStorage {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            keeps_attributes: true,
        }
    }

    /// Store rooted at an existing local directory: `<root>/<bucket>/<key>`.
    ///
    /// Plain files carry no attributes, so content types are not recorded.
    pub fn local(root: impl AsRef<FsPath>) -> Result<Self> {
        let root = root.as_ref();
        let store =
            LocalFileSystem::new_with_prefix(root).map_err(|source| IngestError::StoreRoot {
                path: root.to_path_buf(),
                source,
            })?;
        Ok(Self {
            store: Arc::new(store),
            keeps_attributes: false,
        })
    }

    /// Read the full body of an object.
    pub fn get(&self, object: &ObjectRef) -> Result<Vec<u8>> {
        let location = store_path(object)?;
        let read = async {
            let result = self.store.get(&location).await?;
            result.bytes().await
        };
        let body = block_on(read).map_err(|source| match source {
            object_store::Error::NotFound { .. } => IngestError::ObjectNotFound {
                object: object.clone(),
            },
            source => IngestError::ObjectRead {
                object: object.clone(),
                source,
            },
        })?;
        trace!(path = %location, bytes = body.len(), "read object");
        Ok(body.to_vec())
    }

    /// Create or replace an object.
    pub fn put(&self, object: &ObjectRef, body: &[u8], content_type: &str) -> Result<()> {
        let location = store_path(object)?;
        let mut options = PutOptions::default();
        if self.keeps_attributes {
            let mut attributes = Attributes::new();
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
            options.attributes = attributes;
        }
        let payload = PutPayload::from(body.to_vec());
        block_on(self.store.put_opts(&location, payload, options)).map_err(|source| {
            IngestError::ObjectWrite {
                object: object.clone(),
                source,
            }
        })?;
        trace!(path = %location, bytes = body.len(), content_type, "wrote object");
        Ok(())
    }
}

/// Store path of an object; keys with empty, `.` or `..` segments are refused.
fn store_path(object: &ObjectRef) -> Result<Path> {
    let raw = format!("{}/{}", object.bucket, object.key);
    Path::parse(&raw).map_err(|source| IngestError::UnsafeKey { key: raw, source })
}

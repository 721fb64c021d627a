use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("object reference has an empty bucket name")]
    EmptyBucket,
    #[error("object reference in bucket {bucket} has an empty key")]
    EmptyKey { bucket: String },
}

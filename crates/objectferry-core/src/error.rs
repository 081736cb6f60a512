//! Error types for the copier.
//!
//! Defines [`FerryError`], the error taxonomy surfaced to the invoking
//! runtime. A record that merely fails the source filter is not an error;
//! it is logged and skipped, and the batch continues. Everything else is
//! wrapped with the identifiers involved and re-raised; nothing is silently
//! swallowed, and no retry happens at this layer (redelivery belongs to the
//! trigger mechanism).

/// Boxed error used as the underlying cause of storage-layer failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Copier error type.
#[derive(Debug, thiserror::Error)]
pub enum FerryError {
    /// Configuration is missing or invalid; raised at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The copy primitive failed for one record, aborting the batch.
    #[error(
        "failed to copy s3://{source_bucket}/{source_key} to s3://{destination_bucket}/{destination_key}"
    )]
    Copy {
        /// Bucket the object was being copied from.
        source_bucket: String,
        /// Key of the object being copied.
        source_key: String,
        /// Bucket the object was being copied into.
        destination_bucket: String,
        /// Key the object was being copied to.
        destination_key: String,
        /// Underlying storage-layer failure.
        #[source]
        source: BoxError,
    },

    /// The metadata primitive failed.
    #[error("failed to read metadata for s3://{bucket}/{key}")]
    Metadata {
        /// Bucket of the object whose metadata was requested.
        bucket: String,
        /// Key of the object whose metadata was requested.
        key: String,
        /// Underlying storage-layer failure.
        #[source]
        source: BoxError,
    },

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for copier operations.
pub type FerryResult<T> = Result<T, FerryError>;

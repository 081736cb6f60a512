//! Object store seam.
//!
//! All S3 I/O goes through the [`ObjectStore`] trait: a server-side copy
//! primitive and a metadata lookup. The production implementation,
//! [`S3ObjectStore`], wraps an `aws-sdk-s3` client; tests substitute an
//! in-memory recording store.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::types::TaggingDirective;
use tracing::debug;

use crate::error::BoxError;

/// One copy operation, fully resolved.
///
/// Combines the source coordinates from the notification, the destination
/// coordinates from configuration and key mapping, and the serialized tag
/// set. Built per record and discarded after the copy call.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// Bucket to copy from.
    pub source_bucket: String,
    /// Key to copy from.
    pub source_key: String,
    /// Bucket to copy into.
    pub destination_bucket: String,
    /// Key to copy to.
    pub destination_key: String,
    /// Serialized tag set attached to the destination object.
    pub tagging: String,
}

/// Object metadata returned by the metadata primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectHead {
    /// Object size in bytes.
    pub size: Option<i64>,
    /// Content type of the object.
    pub content_type: Option<String>,
    /// Entity tag of the object.
    pub e_tag: Option<String>,
}

/// Copy and metadata primitives of the external object store.
///
/// Both operations are synchronous calls from the copier's point of view:
/// they run to completion or fail, with no cancellation and no retry at
/// this layer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Perform a server-side copy with the request's tag set attached.
    async fn copy_object(&self, request: &CopyRequest) -> Result<(), BoxError>;

    /// Fetch metadata for one object.
    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectHead, BoxError>;
}

/// [`ObjectStore`] backed by the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Wrap an existing S3 client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from the ambient AWS environment, targeting `region`.
    pub async fn connect(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self::new(Client::new(&shared))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn copy_object(&self, request: &CopyRequest) -> Result<(), BoxError> {
        debug!(
            source_bucket = %request.source_bucket,
            source_key = %request.source_key,
            destination_bucket = %request.destination_bucket,
            destination_key = %request.destination_key,
            "issuing copy_object"
        );

        // The tagging directive must be REPLACE for the x-amz-tagging header
        // to apply to the destination object.
        self.client
            .copy_object()
            .copy_source(format!(
                "{}/{}",
                request.source_bucket, request.source_key
            ))
            .bucket(request.destination_bucket.as_str())
            .key(request.destination_key.as_str())
            .tagging(request.tagging.as_str())
            .tagging_directive(TaggingDirective::Replace)
            .send()
            .await
            .map_err(|e| Box::new(e) as BoxError)?;

        Ok(())
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectHead, BoxError> {
        let resp = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Box::new(e) as BoxError)?;

        Ok(ObjectHead {
            size: resp.content_length(),
            content_type: resp.content_type().map(ToOwned::to_owned),
            e_tag: resp.e_tag().map(ToOwned::to_owned),
        })
    }
}

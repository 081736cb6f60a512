//! Batch processing service.
//!
//! [`FerryService`] ties the pure pieces together: for each record in a
//! notification batch it runs the source filter, derives the destination
//! key, builds the tag set, and invokes the copy primitive. Records that
//! fail the filter are logged and skipped; a failed copy aborts the rest of
//! the batch and surfaces to the caller.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::FerryConfig;
use crate::error::{FerryError, FerryResult};
use crate::event::ObjectCreated;
use crate::store::{CopyRequest, ObjectHead, ObjectStore};
use crate::{filter, mapper, tags};

/// Confirmation value returned after a fully successful batch.
const CONFIRMATION: &str = "Successfully processed S3 event";

/// The copier service.
///
/// Holds the object store and configuration, both constructed once at
/// process startup and reused across invocations. The service itself is
/// stateless between batches.
#[derive(Clone)]
pub struct FerryService {
    store: Arc<dyn ObjectStore>,
    config: Arc<FerryConfig>,
}

impl std::fmt::Debug for FerryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FerryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FerryService {
    /// Create a service from an object store and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, config: Arc<FerryConfig>) -> Self {
        Self { store, config }
    }

    /// Process one notification batch, strictly in record order.
    ///
    /// Non-matching and malformed records are skipped and the batch
    /// continues; the first copy failure aborts the remaining records and
    /// propagates. On full success returns a fixed confirmation string;
    /// there is no per-record result.
    pub async fn process_event(&self, event: &S3Event) -> FerryResult<String> {
        let mut copied = 0usize;

        for record in &event.records {
            let Some(object) = ObjectCreated::from_record(record) else {
                warn!("skipping notification record without bucket or key");
                continue;
            };

            info!(
                bucket = %object.bucket,
                key = %object.key,
                "processing object-created record"
            );

            if !filter::matches_source(&object.bucket, &object.key, &self.config) {
                info!(
                    bucket = %object.bucket,
                    key = %object.key,
                    source_bucket = %self.config.source_bucket,
                    source_prefix = %self.config.source_prefix,
                    "record does not match configured source, skipping"
                );
                continue;
            }

            let destination_key = mapper::destination_key(&object.key, &self.config);
            self.copy_with_tags(&object.bucket, &object.key, &destination_key)
                .await?;
            copied += 1;

            info!(
                source_bucket = %object.bucket,
                source_key = %object.key,
                destination_bucket = %self.config.destination_bucket,
                destination_key = %destination_key,
                "copied object"
            );
        }

        info!(
            records = event.records.len(),
            copied, "finished processing notification batch"
        );

        Ok(CONFIRMATION.to_owned())
    }

    /// Copy one object to the destination bucket with a fresh tag set.
    async fn copy_with_tags(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_key: &str,
    ) -> FerryResult<()> {
        // Timestamp is captured at the moment of copy, not event receipt.
        let tag_set = tags::copy_tags(&self.config, Utc::now());
        let request = CopyRequest {
            source_bucket: source_bucket.to_owned(),
            source_key: source_key.to_owned(),
            destination_bucket: self.config.destination_bucket.clone(),
            destination_key: destination_key.to_owned(),
            tagging: tags::tagging_string(&tag_set),
        };

        self.store
            .copy_object(&request)
            .await
            .map_err(|source| FerryError::Copy {
                source_bucket: request.source_bucket,
                source_key: request.source_key,
                destination_bucket: request.destination_bucket,
                destination_key: request.destination_key,
                source,
            })
    }

    /// Fetch metadata for one object.
    ///
    /// Secondary capability for inspection use; not exercised by the batch
    /// flow.
    pub async fn object_head(&self, bucket: &str, key: &str) -> FerryResult<ObjectHead> {
        self.store
            .head_object(bucket, key)
            .await
            .map_err(|source| FerryError::Metadata {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                source,
            })
    }
}

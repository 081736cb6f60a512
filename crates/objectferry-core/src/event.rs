//! Notification record extraction.
//!
//! The trigger delivers an [`aws_lambda_events::event::s3::S3Event`] whose
//! records nest bucket and key behind several optional fields. This module
//! flattens one record into [`ObjectCreated`], the only two values the
//! copier needs.

use aws_lambda_events::event::s3::S3EventRecord;

/// One object-creation notification, reduced to its source coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectCreated {
    /// Bucket the object was created in.
    pub bucket: String,
    /// Key of the created object, as delivered by the notification.
    pub key: String,
}

impl ObjectCreated {
    /// Extract the source bucket and key from a notification record.
    ///
    /// Returns `None` when either field is absent; such records are
    /// malformed and the caller skips them. The key is taken verbatim from
    /// the notification, without URL-decoding.
    #[must_use]
    pub fn from_record(record: &S3EventRecord) -> Option<Self> {
        let bucket = record.s3.bucket.name.clone()?;
        let key = record.s3.object.key.clone()?;
        Some(Self { bucket, key })
    }
}

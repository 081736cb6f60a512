//! Copy tag set construction.
//!
//! Every copied object carries six descriptive tags: who copied it, when,
//! the buckets involved, the operation type, and the environment. The set is
//! built fresh per copy as an ordered list of pairs so the serialized form
//! is stable, then joined into the `key=value&key=value` wire form the copy
//! primitive expects.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::FerryConfig;

/// Actor name recorded in the `CopiedBy` tag.
pub const COPIED_BY: &str = "ObjectFerry";

/// Build the tag set for one copy operation.
///
/// `copied_at` is the moment of copy, not of event receipt; it is rendered
/// as an ISO-8601 instant (e.g. `2024-01-01T00:00:00Z`).
#[must_use]
pub fn copy_tags(config: &FerryConfig, copied_at: DateTime<Utc>) -> Vec<(&'static str, String)> {
    vec![
        ("CopiedBy", COPIED_BY.to_owned()),
        (
            "CopiedAt",
            copied_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        ("SourceBucket", config.source_bucket.clone()),
        ("DestinationBucket", config.destination_bucket.clone()),
        ("ProcessingType", "Copy".to_owned()),
        ("Environment", "Production".to_owned()),
    ]
}

/// Serialize a tag set into the query-string-like wire form.
///
/// Pairs are joined in list order. Values are NOT escaped: a value containing
/// `&` or `=` would corrupt the encoding. None of the fixed tag values can
/// contain either character today, and the behavior is pinned by a test.
#[must_use]
pub fn tagging_string(tags: &[(&'static str, String)]) -> String {
    tags.iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

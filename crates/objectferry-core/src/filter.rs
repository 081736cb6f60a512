//! Source filter.
//!
//! A pure predicate deciding whether a notification record belongs to this
//! copier: the bucket must equal the configured source bucket exactly, and
//! the key must start with the configured source prefix. An empty prefix
//! matches every key.

use crate::config::FerryConfig;

/// Return `true` when `bucket`/`key` match the configured source.
///
/// Prefix matching is a literal string-prefix test, not path-segment aware:
/// a source prefix of `"data"` matches the key `"database/x"`.
#[must_use]
pub fn matches_source(bucket: &str, key: &str, config: &FerryConfig) -> bool {
    bucket == config.source_bucket && key.starts_with(&config.source_prefix)
}

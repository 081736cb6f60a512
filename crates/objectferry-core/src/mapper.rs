//! Destination key derivation.
//!
//! The destination key is a pure function of the source key and the two
//! configured prefixes; no other state affects the mapping.

use crate::config::FerryConfig;

/// Derive the destination key for a source key.
///
/// With an empty destination prefix the source key is returned unchanged;
/// the source prefix is NOT stripped in that case. Otherwise the source
/// prefix is stripped when present and the destination prefix prepended.
/// The strip is guarded on the key actually carrying the prefix, even though
/// the filter has already checked it.
#[must_use]
pub fn destination_key(source_key: &str, config: &FerryConfig) -> String {
    if config.destination_prefix.is_empty() {
        return source_key.to_owned();
    }

    let remainder = source_key
        .strip_prefix(&config.source_prefix)
        .unwrap_or(source_key);

    format!("{}{remainder}", config.destination_prefix)
}

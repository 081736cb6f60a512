//! Ferry configuration.
//!
//! Provides [`FerryConfig`], the immutable process-wide settings for the
//! copier. Configuration is loaded once at startup from environment
//! variables and never mutated afterwards; the destination key of any object
//! is a pure function of its source key and the two configured prefixes.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{FerryError, FerryResult};

/// Process-wide copier configuration.
///
/// Bucket names have no usable default and must be provided; both prefixes
/// default to empty, which matches every key and maps it unchanged.
/// Configuration can be loaded from environment variables via
/// [`FerryConfig::from_env`].
///
/// # Examples
///
/// ```
/// use objectferry_core::FerryConfig;
///
/// let config = FerryConfig::builder()
///     .source_bucket("bucket-a".into())
///     .destination_bucket("bucket-b".into())
///     .build();
/// assert_eq!(config.region, "us-east-1");
/// assert!(config.source_prefix.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FerryConfig {
    /// AWS region the S3 client targets.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Bucket whose object-created notifications are accepted.
    #[builder(default)]
    pub source_bucket: String,

    /// Bucket objects are copied into.
    #[builder(default)]
    pub destination_bucket: String,

    /// Key prefix a source object must carry to be accepted (empty matches all).
    #[builder(default)]
    pub source_prefix: String,

    /// Prefix prepended to destination keys (empty leaves keys unchanged).
    #[builder(default)]
    pub destination_prefix: String,

    /// Deployed function name, reported for operational tooling.
    #[builder(default = String::from("objectferry"))]
    pub function_name: String,

    /// Invocation timeout in seconds.
    #[builder(default = 300)]
    pub timeout_seconds: u64,

    /// Memory size in megabytes.
    #[builder(default = 512)]
    pub memory_size: u32,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            region: String::from("us-east-1"),
            source_bucket: String::new(),
            destination_bucket: String::new(),
            source_prefix: String::new(),
            destination_prefix: String::new(),
            function_name: String::from("objectferry"),
            timeout_seconds: 300,
            memory_size: 512,
            log_level: String::from("info"),
        }
    }
}

impl FerryConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | `us-east-1` |
    /// | `SOURCE_BUCKET` | *(empty)* |
    /// | `DESTINATION_BUCKET` | *(empty)* |
    /// | `SOURCE_PREFIX` | *(empty)* |
    /// | `DESTINATION_PREFIX` | *(empty)* |
    /// | `FUNCTION_NAME` | `objectferry` |
    /// | `TIMEOUT_SECONDS` | `300` |
    /// | `MEMORY_SIZE` | `512` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// `AWS_REGION` is set by the Lambda execution environment, so the region
    /// rarely needs explicit configuration.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("SOURCE_BUCKET") {
            config.source_bucket = v;
        }
        if let Ok(v) = std::env::var("DESTINATION_BUCKET") {
            config.destination_bucket = v;
        }
        if let Ok(v) = std::env::var("SOURCE_PREFIX") {
            config.source_prefix = v;
        }
        if let Ok(v) = std::env::var("DESTINATION_PREFIX") {
            config.destination_prefix = v;
        }
        if let Ok(v) = std::env::var("FUNCTION_NAME") {
            config.function_name = v;
        }
        if let Ok(v) = std::env::var("TIMEOUT_SECONDS") {
            if let Ok(n) = v.parse::<u64>() {
                config.timeout_seconds = n;
            }
        }
        if let Ok(v) = std::env::var("MEMORY_SIZE") {
            if let Ok(n) = v.parse::<u32>() {
                config.memory_size = n;
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Check that the configuration is usable.
    ///
    /// Both bucket names must be non-empty; everything else has a workable
    /// default. Called once at startup, before the first event is accepted.
    pub fn validate(&self) -> FerryResult<()> {
        if self.source_bucket.is_empty() {
            return Err(FerryError::Config(
                "SOURCE_BUCKET must be set to a non-empty bucket name".to_owned(),
            ));
        }
        if self.destination_bucket.is_empty() {
            return Err(FerryError::Config(
                "DESTINATION_BUCKET must be set to a non-empty bucket name".to_owned(),
            ));
        }
        Ok(())
    }
}

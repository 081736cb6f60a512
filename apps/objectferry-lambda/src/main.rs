//! ObjectFerry Lambda - event-triggered S3 object copier.
//!
//! This binary wires [`objectferry_core::FerryService`] into the Lambda
//! runtime: it receives S3 object-created notification batches and copies
//! matching objects to the configured destination bucket with descriptive
//! tags. On failure the error surfaces to the invoking runtime, which owns
//! any redelivery or dead-letter policy.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SOURCE_BUCKET` | *(required)* | Bucket whose notifications are accepted |
//! | `DESTINATION_BUCKET` | *(required)* | Bucket objects are copied into |
//! | `SOURCE_PREFIX` | *(empty)* | Key prefix a source object must carry |
//! | `DESTINATION_PREFIX` | *(empty)* | Prefix prepended to destination keys |
//! | `AWS_REGION` | `us-east-1` | Region (set by the Lambda environment) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

use objectferry_core::{FerryConfig, FerryService, S3ObjectStore};

/// Version reported in health check output.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config
/// value.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    // The Lambda log sink is a plain byte stream; skip ANSI escapes.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .init();

    Ok(())
}

/// Forward one invocation to the service.
async fn handle(event: LambdaEvent<S3Event>, service: &FerryService) -> Result<String, Error> {
    service
        .process_event(&event.payload)
        .await
        .map_err(Into::into)
}

/// Check that the process can start with the current environment.
///
/// Exits with code 0 when the configuration is usable, 1 otherwise.
fn run_health_check(config: &FerryConfig) -> i32 {
    match config.validate() {
        Ok(()) => {
            println!(
                "{}",
                serde_json::json!({
                    "status": "running",
                    "function": config.function_name,
                    "version": VERSION,
                })
            );
            0
        }
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::json!({ "status": "unconfigured", "error": e.to_string() })
            );
            1
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = FerryConfig::from_env();

    // Handle --health-check flag for operational monitoring.
    if std::env::args().any(|a| a == "--health-check") {
        std::process::exit(run_health_check(&config));
    }

    init_tracing(&config.log_level)?;
    config.validate()?;

    info!(
        region = %config.region,
        source_bucket = %config.source_bucket,
        destination_bucket = %config.destination_bucket,
        source_prefix = %config.source_prefix,
        destination_prefix = %config.destination_prefix,
        function_name = %config.function_name,
        version = VERSION,
        "starting ObjectFerry",
    );

    // Client and configuration are built once here and reused across
    // invocations for the lifetime of the execution environment.
    let store = S3ObjectStore::connect(&config.region).await;
    let service = FerryService::new(Arc::new(store), Arc::new(config));

    run(service_fn(|event| handle(event, &service))).await
}

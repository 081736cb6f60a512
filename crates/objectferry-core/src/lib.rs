//! Event-triggered S3 object copier.
//!
//! This crate implements the core of ObjectFerry: it consumes S3
//! object-created notification batches, filters records against a configured
//! source bucket and key prefix, derives a destination key, and copies each
//! matching object to a destination bucket with a descriptive tag set
//! attached.
//!
//! # Architecture
//!
//! ```text
//! S3Event (aws_lambda_events)
//!        |
//!        v
//! FerryService (batch orchestration)
//!        |
//!   filter -> mapper -> tags
//!        |
//!        v
//! ObjectStore (copy/head seam)
//!        |
//!        v
//! S3ObjectStore (aws-sdk-s3)
//! ```
//!
//! The filter, key mapper, and tag builder are pure functions; all I/O goes
//! through the [`ObjectStore`] trait so tests can substitute an in-memory
//! implementation.

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod mapper;
pub mod service;
pub mod store;
pub mod tags;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::FerryConfig;
pub use error::{FerryError, FerryResult};
pub use event::ObjectCreated;
pub use service::FerryService;
pub use store::{CopyRequest, ObjectHead, ObjectStore, S3ObjectStore};

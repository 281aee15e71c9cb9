//! Output module
//!
//! Serializes filtered records as newline-delimited JSON and lands the
//! payload in object storage.
//!
//! # Overview
//!
//! This module provides:
//! - NDJSON serialization (flattening each record on the way out)
//! - The `Sink` seam the engine writes through
//! - Object-store sinks for S3, GCS and the local filesystem

mod cloud;
mod serializer;

pub use cloud::{CloudSink, DestinationKind, Sink, UploadMode};
pub use serializer::{serialize, serialize_record};

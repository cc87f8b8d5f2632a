//! SQS queue deletion for CI pipelines
//!
//! Validates a queue URL and deletes the queue it identifies with a single
//! request. Failures never escape [`delete_queue`]; they are folded into a
//! [`DeleteResult`].

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Remote client seam
pub mod client;
/// Delete operation
pub mod delete;
/// Error types for queue operations
pub mod error;
/// Queue URL validation
pub mod validation;

pub use client::QueueDeleter;
pub use delete::{delete_queue, DeleteResult};
pub use error::{QueueError, QueueResult};
pub use validation::{is_managed_endpoint, validate_queue_url};

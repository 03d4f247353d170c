//! # Submission
//!
//! Delivery of a completed fact finder to the practice. One POST, one JSON
//! envelope, no retries: a failure is reported to the clients with a single
//! fixed message and they try again themselves.
//!
//! - [`envelope`]: the `{ meta, data }` payload shape
//! - [`client`]: the `SubmissionClient` seam and the reqwest-backed
//!   `WebhookClient`

mod client;
mod envelope;

pub use client::{SubmissionClient, SubmitError, WebhookClient};
pub use envelope::{SubmissionEnvelope, SubmissionMeta, CLIENT_NAMES, SOURCE_TAG};

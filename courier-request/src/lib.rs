//! Request bodies for the Bot API.
//!
//! This crate handles:
//! * URL-encoded form bodies for calls without file uploads
//! * `multipart/form-data` bodies when the mapping carries binary parts
//! * Reading local files at build time, bounded by [`Config::max_part_size`]
//!
//! It is intentionally transport-agnostic: hand the [`RequestPayload`] to
//! any HTTP client, or implement [`Transport`] around one.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod transport;

mod errors;

pub use builder::{RequestBuilder, RequestPayload};
pub use config::{Boundary, Config};
pub use errors::TransportPrepError;
pub use transport::{RecordingTransport, Transport};

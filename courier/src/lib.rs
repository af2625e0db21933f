//! # courier: typed Telegram Bot API requests
//!
//! `courier` turns typed call parameters into wire-ready request bodies.
//! It consists of four focused sub-crates wired together here for convenience:
//!
//! | Sub-crate         | Role                                                   |
//! |-------------------|--------------------------------------------------------|
//! | `courier-types`   | Keyboards, entities, commands, files, message targets |
//! | `courier-encoder` | Descriptor tables, flattening, zero omission          |
//! | `courier-options` | Option sets and one parameter bundle per call         |
//! | `courier-request` | URL-encoded / multipart bodies, transport trait       |
//!
//! ## Quick start
//!
//! ```rust
//! use courier::methods::SendPhoto;
//! use courier::options::PhotoOptions;
//! use courier::{Config, InputFile, prepare};
//!
//! let call = SendPhoto::new(-100123i64, InputFile::bytes("cat.jpg", vec![0xFF, 0xD8]))
//!     .options(PhotoOptions::default().caption("meow").silent(true));
//!
//! let (method, payload) = prepare(&call, &Config::default().fixed_boundary("b")).unwrap();
//! assert_eq!(method, "sendPhoto");
//! assert!(payload.is_multipart());
//! ```
//!
//! Hand the payload to any HTTP client as the body of
//! `POST https://api.telegram.org/bot<token>/<method>`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::fmt;

/// Re-export of [`courier_types`]: data records sent as option values.
pub use courier_types as types;

/// Re-export of [`courier_encoder`]: schemas and the wire mapping encoder.
pub use courier_encoder as encoder;

/// Re-export of [`courier_options`]: option sets and methods.
pub use courier_options::{methods, options};

/// Re-export of [`courier_request`]: body builder and transport trait.
pub use courier_request as request;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use courier_encoder::{ConfigurationError, OptionSet, WireMapping, WireValue, encode, option_set};
pub use courier_options::Method;
pub use courier_request::{
    Config,
    RecordingTransport,
    RequestBuilder,
    RequestPayload,
    Transport,
    TransportPrepError,
};
pub use courier_types::{ChatId, InputFile, MessageTarget, ParseMode, ReplyMarkup};

// ─── Error ────────────────────────────────────────────────────────────────────

/// Anything that can stop a call from being prepared.
#[derive(Debug)]
pub enum Error {
    /// The parameters themselves are invalid.
    Configuration(ConfigurationError),
    /// A file could not be attached.
    Prepare(TransportPrepError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "invalid parameters: {e}"),
            Self::Prepare(e)       => write!(f, "cannot build request body: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Prepare(e)       => Some(e),
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self { Self::Configuration(e) }
}

impl From<TransportPrepError> for Error {
    fn from(e: TransportPrepError) -> Self { Self::Prepare(e) }
}

// ─── prepare / send ───────────────────────────────────────────────────────────

/// Encode `call` and build its request body.
///
/// Returns the Bot API method name together with the payload.
pub fn prepare<M: Method>(call: &M, config: &Config) -> Result<(&'static str, RequestPayload), Error> {
    let mapping = encode(call)?;
    let payload = RequestBuilder::new(config.clone()).build(&mapping)?;
    tracing::debug!("[courier] prepared {} ({})", M::NAME, payload.content_type);
    Ok((M::NAME, payload))
}

/// Prepare `call` and hand it to `transport`.
///
/// Transport failures are boxed so that any [`Transport::Error`] fits.
pub fn send<M: Method, T: Transport>(
    transport: &mut T,
    call:      &M,
    config:    &Config,
) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let (method, payload) = prepare(call, config)?;
    Ok(transport.send(method, &payload)?)
}

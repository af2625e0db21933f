//! [`WireMapping`] → HTTP request body.
//!
//! A mapping without binary parts becomes an
//! `application/x-www-form-urlencoded` body. Anything else becomes
//! `multipart/form-data` (RFC 7578): one text part per text/JSON entry and
//! one binary part per pending file, in mapping order.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::Read;

use courier_encoder::{PartSource, PendingPart, WireMapping, WireValue};

use crate::config::{Boundary, Config};
use crate::errors::TransportPrepError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const BOUNDARY_PREFIX: &str = "courier-";

/// A ready-to-send request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPayload {
    /// Value for the `Content-Type` header.
    pub content_type: String,
    #[allow(missing_docs)]
    pub body: Vec<u8>,
}

impl RequestPayload {
    /// `true` for `multipart/form-data` bodies.
    pub fn is_multipart(&self) -> bool {
        self.content_type.starts_with("multipart/form-data")
    }
}

/// Builds [`RequestPayload`]s according to a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    config: Config,
}

impl RequestBuilder {
    #[allow(missing_docs)]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assemble the body for `mapping`.
    ///
    /// Local files are read here, once, and not cached.
    pub fn build(&self, mapping: &WireMapping<'_>) -> Result<RequestPayload, TransportPrepError> {
        if !mapping.has_parts() {
            return Ok(self.url_encoded(mapping));
        }
        self.multipart(mapping)
    }

    fn url_encoded(&self, mapping: &WireMapping<'_>) -> RequestPayload {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in mapping {
            if let Some(text) = value.as_str() {
                form.append_pair(key, text);
            }
        }
        let body = form.finish().into_bytes();
        tracing::debug!("[courier] url-encoded body: {} keys, {} bytes", mapping.len(), body.len());
        RequestPayload { content_type: FORM_URLENCODED.to_owned(), body }
    }

    fn multipart(&self, mapping: &WireMapping<'_>) -> Result<RequestPayload, TransportPrepError> {
        let boundary = self.boundary()?;
        let mut body = Vec::new();

        for (key, value) in mapping {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            match value {
                WireValue::Text(text) | WireValue::Json(text) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", escape(key))
                            .as_bytes(),
                    );
                    body.extend_from_slice(text.as_bytes());
                }
                WireValue::Part(part) => {
                    let content = self.read_part(part)?;
                    let mime = mime_guess::from_path(&*part.filename).first_or_octet_stream();
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                             Content-Type: {}\r\n\r\n",
                            escape(key),
                            escape(&part.filename),
                            mime.essence_str(),
                        )
                        .as_bytes(),
                    );
                    tracing::trace!("[courier] part {key}: {} ({} bytes)", part.filename, content.len());
                    body.extend_from_slice(&content);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        tracing::debug!(
            "[courier] multipart body: {} keys, {} parts, {} bytes",
            mapping.len(),
            mapping.part_count(),
            body.len(),
        );
        Ok(RequestPayload {
            content_type: format!("multipart/form-data; boundary={boundary}"),
            body,
        })
    }

    fn boundary(&self) -> Result<Cow<'_, str>, TransportPrepError> {
        match &self.config.boundary {
            Boundary::Fixed(b) => Ok(Cow::Borrowed(b.as_str())),
            Boundary::Random   => {
                let mut rnd = [0u8; 16];
                getrandom::getrandom(&mut rnd).map_err(TransportPrepError::Entropy)?;
                let hex: String = rnd.iter().map(|b| format!("{b:02x}")).collect();
                Ok(Cow::Owned(format!("{BOUNDARY_PREFIX}{hex}")))
            }
        }
    }

    fn read_part<'p>(&self, part: &'p PendingPart<'_>) -> Result<Cow<'p, [u8]>, TransportPrepError> {
        let limit = self.config.max_part_size;
        let too_large = |size: u64| TransportPrepError::TooLarge {
            name: part.filename.to_string(),
            size,
            limit: limit.unwrap_or(u64::MAX),
        };

        match part.source {
            PartSource::Bytes(bytes) => {
                let size = bytes.len() as u64;
                if limit.is_some_and(|l| size > l) {
                    return Err(too_large(size));
                }
                Ok(Cow::Borrowed(bytes))
            }
            PartSource::Path(path) => {
                let read_err = |source| TransportPrepError::Read { path: path.to_path_buf(), source };
                let size = fs::metadata(path).map_err(read_err)?.len();
                if limit.is_some_and(|l| size > l) {
                    return Err(too_large(size));
                }
                let mut file = File::open(path).map_err(read_err)?;
                let mut content = Vec::new();
                let result = match limit {
                    Some(l) => file.take(l.saturating_add(1)).read_to_end(&mut content),
                    None    => file.read_to_end(&mut content),
                };
                result.map_err(read_err)?;
                let read = content.len() as u64;
                if limit.is_some_and(|l| read > l) {
                    return Err(too_large(read));
                }
                Ok(Cow::Owned(content))
            }
        }
    }
}

/// Percent-encode the characters that would end a quoted header parameter.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('"', "%22")
            .replace('\r', "%0D")
            .replace('\n', "%0A"),
    )
}

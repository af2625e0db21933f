//! Body builder settings.

/// Bot API limit for files uploaded through multipart requests.
pub const DEFAULT_MAX_PART_SIZE: u64 = 50 * 1024 * 1024;

/// How the multipart boundary is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Fresh random boundary per body.
    #[default]
    Random,
    /// Always this boundary. Makes bodies byte-for-byte reproducible.
    Fixed(String),
}

/// Configuration for [`crate::RequestBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Multipart boundary strategy (default: [`Boundary::Random`]).
    pub boundary:      Boundary,
    /// Largest accepted binary part in bytes; `None` disables the check
    /// (default: 50 MiB).
    pub max_part_size: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundary:      Boundary::Random,
            max_part_size: Some(DEFAULT_MAX_PART_SIZE),
        }
    }
}

impl Config {
    /// Use a fixed multipart boundary.
    pub fn fixed_boundary(mut self, boundary: impl Into<String>) -> Self {
        self.boundary = Boundary::Fixed(boundary.into()); self
    }

    /// Change the per-part size limit.
    pub fn max_part_size(mut self, limit: Option<u64>) -> Self {
        self.max_part_size = limit; self
    }
}

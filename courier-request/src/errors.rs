use std::fmt;
use std::io;
use std::path::PathBuf;

/// A pending part could not be turned into bytes.
#[derive(Debug)]
pub enum TransportPrepError {
    /// A local file could not be read.
    Read {
        #[allow(missing_docs)]
        path: PathBuf,
        #[allow(missing_docs)]
        source: io::Error,
    },
    /// A part exceeds [`crate::Config::max_part_size`].
    TooLarge {
        /// The part's filename.
        name: String,
        /// Size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
    /// The OS random source failed while picking a multipart boundary.
    Entropy(getrandom::Error),
}

impl fmt::Display for TransportPrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } =>
                write!(f, "cannot read {}: {source}", path.display()),
            Self::TooLarge { name, size, limit } =>
                write!(f, "{name} is {size} bytes, over the {limit} byte upload limit"),
            Self::Entropy(e) =>
                write!(f, "cannot generate multipart boundary: {e}"),
        }
    }
}

impl std::error::Error for TransportPrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _                         => None,
        }
    }
}

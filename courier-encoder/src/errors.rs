use std::fmt;

use courier_types::UnionError;

use crate::schema::FieldKind;

/// An options value or schema that cannot be encoded.
///
/// Always a programming mistake in the caller or in a schema declaration.
/// Reported before any part of the value is encoded and before any I/O.
#[derive(Debug)]
pub enum ConfigurationError {
    /// Two descriptors of one schema share a wire key (usually via an
    /// embedded group).
    DuplicateKey {
        /// Schema being built.
        schema: &'static str,
        /// Colliding wire key.
        key: &'static str,
    },
    /// The value reported for a field does not fit its descriptor's kind.
    UnsupportedField {
        /// Wire key of the field.
        key: &'static str,
        /// Kind declared in the schema.
        kind: FieldKind,
    },
    /// An options value reported a different number of fields than its
    /// schema declares.
    SchemaMismatch {
        /// Schema name.
        schema: &'static str,
        /// Number of descriptors in the schema.
        expected: usize,
        /// Number of values reported.
        found: usize,
    },
    /// A file attachment with no usable alternative.
    InvalidFile {
        /// Wire key of the attachment.
        key: &'static str,
        /// What was wrong with it.
        source: UnionError,
    },
    /// A message target with zero or two populated sides.
    InvalidTarget(UnionError),
    /// A composite or markup value failed to serialize as JSON.
    Json {
        /// Wire key of the field.
        key: &'static str,
        /// Serializer error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { schema, key } =>
                write!(f, "{schema}: wire key `{key}` is declared more than once"),
            Self::UnsupportedField { key, kind } =>
                write!(f, "field `{key}`: value does not match declared kind {kind:?}"),
            Self::SchemaMismatch { schema, expected, found } =>
                write!(f, "{schema}: schema has {expected} fields but the value reported {found}"),
            Self::InvalidFile { key, source } =>
                write!(f, "field `{key}`: {source}"),
            Self::InvalidTarget(e) =>
                write!(f, "{e}"),
            Self::Json { key, source } =>
                write!(f, "field `{key}`: JSON encoding failed: {source}"),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFile { source, .. } => Some(source),
            Self::InvalidTarget(e)           => Some(e),
            Self::Json { source, .. }        => Some(source),
            _                                => None,
        }
    }
}

use std::fmt;

/// A closed union was given zero or several populated alternatives.
///
/// Produced by the raw-part constructors [`crate::InputFile::from_parts`]
/// and [`crate::MessageTarget::from_parts`], and by their `validate`
/// methods when the populated side holds only zero values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnionError {
    /// No alternative carries a value.
    Neither {
        /// Name of the union type (e.g. `"MessageTarget"`).
        union: &'static str,
    },
    /// More than one alternative carries a value.
    Both {
        /// Name of the union type (e.g. `"InputFile"`).
        union: &'static str,
    },
}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neither { union } => write!(f, "{union}: no alternative is populated"),
            Self::Both { union }    => write!(f, "{union}: more than one alternative is populated"),
        }
    }
}

impl std::error::Error for UnionError {}

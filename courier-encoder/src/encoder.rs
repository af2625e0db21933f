//! Options value → [`WireMapping`].

use crate::errors::ConfigurationError;
use crate::markup::encode_markup;
use crate::resolver::{PendingPart, Resolved, resolve};
use crate::schema::{FieldDescriptor, OptionSet};
use crate::value::FieldValue;

// ─── WireValue / WireMapping ──────────────────────────────────────────────────

/// One encoded field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WireValue<'a> {
    /// Plain text: numbers, booleans, strings, enum names, file IDs.
    Text(String),
    /// JSON text of a composite or markup value.
    Json(String),
    /// A binary part, still unread.
    Part(PendingPart<'a>),
}

impl WireValue<'_> {
    /// The text of a [`WireValue::Text`] or [`WireValue::Json`] value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Json(s) => Some(s),
            Self::Part(_)                 => None,
        }
    }

    #[allow(missing_docs)]
    pub fn is_part(&self) -> bool {
        matches!(self, Self::Part(_))
    }
}

/// Ordered `wire key → value` pairs produced by [`encode`].
///
/// Keys are unique and appear in schema declaration order. Borrows file
/// paths and bytes from the encoded options value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireMapping<'a> {
    entries: Vec<(&'static str, WireValue<'a>)>,
}

impl<'a> WireMapping<'a> {
    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&WireValue<'a>> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (&'static str, WireValue<'a>)> {
        self.entries.iter()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize { self.entries.len() }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Number of pending binary parts.
    pub fn part_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_part()).count()
    }

    /// `true` if the request needs a multipart body.
    pub fn has_parts(&self) -> bool {
        self.entries.iter().any(|(_, v)| v.is_part())
    }
}

impl<'m, 'a> IntoIterator for &'m WireMapping<'a> {
    type Item     = &'m (&'static str, WireValue<'a>);
    type IntoIter = std::slice::Iter<'m, (&'static str, WireValue<'a>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ─── encode ───────────────────────────────────────────────────────────────────

/// Encode `set` against its schema.
///
/// Validation of the whole value (unions, file attachments, field count
/// and kinds) finishes before the first field is encoded, so an error
/// never leaves a partial mapping behind. No I/O happens here.
pub fn encode<T: OptionSet>(set: &T) -> Result<WireMapping<'_>, ConfigurationError> {
    let schema = T::schema();

    set.validate()?;

    let mut values = Vec::with_capacity(schema.len());
    set.collect(&mut values);
    if values.len() != schema.len() {
        return Err(ConfigurationError::SchemaMismatch {
            schema:   schema.name(),
            expected: schema.len(),
            found:    values.len(),
        });
    }

    for (field, value) in schema.fields().iter().zip(&values) {
        check(field, value)?;
    }

    let mut entries = Vec::with_capacity(values.len());
    for (field, value) in schema.fields().iter().zip(values) {
        let Some(wire) = encode_value(field.key, value)? else { continue };
        tracing::trace!("[courier] {} {} = {:?}", schema.name(), field.key, wire);
        entries.push((field.key, wire));
    }

    let mapping = WireMapping { entries };
    tracing::debug!(
        "[courier] encoded {}: {} keys, {} parts",
        schema.name(),
        mapping.len(),
        mapping.part_count(),
    );
    Ok(mapping)
}

fn check(field: &FieldDescriptor, value: &FieldValue<'_>) -> Result<(), ConfigurationError> {
    if let Some(kind) = value.kind() {
        if kind != field.kind {
            return Err(ConfigurationError::UnsupportedField { key: field.key, kind: field.kind });
        }
    }
    if let FieldValue::File(Some(file)) = value {
        file.validate()
            .map_err(|source| ConfigurationError::InvalidFile { key: field.key, source })?;
    }
    Ok(())
}

/// `None` for values the wire omits.
fn encode_value<'a>(
    key:   &'static str,
    value: FieldValue<'a>,
) -> Result<Option<WireValue<'a>>, ConfigurationError> {
    if value.is_zero() {
        return Ok(None);
    }
    let json_err = |source| ConfigurationError::Json { key, source };

    let wire = match value {
        FieldValue::Scalar(v) | FieldValue::Required(v) => WireValue::Text(v.to_wire()),
        FieldValue::Composite(v)     => WireValue::Json(v.to_json().map_err(json_err)?),
        FieldValue::Markup(Some(m))  => WireValue::Json(encode_markup(m).map_err(json_err)?),
        FieldValue::File(Some(file)) => match resolve(file) {
            Resolved::Inline(id) => WireValue::Text(id.to_owned()),
            Resolved::Part(part) => WireValue::Part(part),
        },
        FieldValue::Absent | FieldValue::Markup(None) | FieldValue::File(None) => return Ok(None),
    };
    Ok(Some(wire))
}

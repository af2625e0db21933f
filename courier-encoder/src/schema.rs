//! Field descriptor tables.

use std::collections::HashMap;

use crate::errors::ConfigurationError;
use crate::value::FieldValue;

/// How one field is turned into a wire value.
///
/// Embedded groups have no kind of their own: [`SchemaBuilder::embed`]
/// splices the group's descriptors into the table instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Number, boolean, string or string enum; sent as text.
    Scalar,
    /// Sequence or record; sent as JSON text.
    Composite,
    /// One of the reply-markup shapes; sent as JSON text.
    Markup,
    /// A file attachment: ID text or a binary part.
    File,
}

/// One row of a [`Schema`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Parameter name expected by the remote API.
    pub key: &'static str,
    #[allow(missing_docs)]
    pub kind: FieldKind,
}

/// Flattened, read-only field table of one options type.
#[derive(Debug)]
pub struct Schema {
    name:   &'static str,
    fields: Vec<FieldDescriptor>,
    index:  HashMap<&'static str, usize>,
}

impl Schema {
    /// Start declaring the table of `name`.
    pub fn builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder { name, fields: Vec::new() }
    }

    /// Name of the options type.
    pub fn name(&self) -> &'static str { self.name }

    /// Descriptors in declaration order, embedded groups already spliced in.
    pub fn fields(&self) -> &[FieldDescriptor] { &self.fields }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize { self.fields.len() }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// Look up a descriptor by wire key.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.index.get(key).map(|&i| &self.fields[i])
    }

    /// Position of `key` in [`Schema::fields`].
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }
}

/// Declares a [`Schema`] field by field.
#[must_use]
pub struct SchemaBuilder {
    name:   &'static str,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    /// Append one descriptor.
    pub fn field(mut self, key: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor { key, kind });
        self
    }

    #[allow(missing_docs)]
    pub fn scalar(self, key: &'static str) -> Self { self.field(key, FieldKind::Scalar) }

    #[allow(missing_docs)]
    pub fn composite(self, key: &'static str) -> Self { self.field(key, FieldKind::Composite) }

    #[allow(missing_docs)]
    pub fn markup(self, key: &'static str) -> Self { self.field(key, FieldKind::Markup) }

    #[allow(missing_docs)]
    pub fn file(self, key: &'static str) -> Self { self.field(key, FieldKind::File) }

    /// Splice every descriptor of `group` in at this position.
    pub fn embed(mut self, group: &Schema) -> Self {
        self.fields.extend_from_slice(group.fields());
        self
    }

    /// Finish the table. Fails if any wire key appears twice.
    pub fn build(self) -> Result<Schema, ConfigurationError> {
        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            if index.insert(field.key, i).is_some() {
                return Err(ConfigurationError::DuplicateKey { schema: self.name, key: field.key });
            }
        }
        Ok(Schema { name: self.name, fields: self.fields, index })
    }
}

// ─── OptionSet ────────────────────────────────────────────────────────────────

/// A typed bundle of parameters for one remote call.
///
/// Usually implemented through [`crate::option_set!`]. A hand-written
/// implementation must report exactly one [`FieldValue`] per descriptor of
/// [`OptionSet::schema`], in the same order.
pub trait OptionSet {
    /// The flattened descriptor table, built once per process.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Append this value's fields to `out`, in schema order.
    fn collect<'a>(&'a self, out: &mut Vec<FieldValue<'a>>);

    /// Check union invariants of this value and its embedded groups.
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_splices_in_place() {
        let group = Schema::builder("Group").scalar("b").markup("c").build().unwrap();
        let outer = Schema::builder("Outer")
            .scalar("a")
            .embed(&group)
            .file("d")
            .build()
            .unwrap();
        let keys: Vec<_> = outer.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
        assert_eq!(outer.get("c").map(|f| f.kind), Some(FieldKind::Markup));
        assert_eq!(outer.position("d"), Some(3));
    }

    #[test]
    fn duplicate_key_through_embed_is_rejected() {
        let group = Schema::builder("Group").scalar("caption").build().unwrap();
        let err = Schema::builder("Outer")
            .embed(&group)
            .scalar("caption")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::DuplicateKey { schema: "Outer", key: "caption" }
        ));
    }
}

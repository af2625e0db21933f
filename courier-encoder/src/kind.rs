//! Field kind markers used in [`crate::option_set!`] declarations.
//!
//! Each marker ties a Rust field type to one [`FieldKind`] and tells the
//! macro how to describe, report and validate the field. The bound on each
//! [`Slot`] impl is what rejects a mismatched declaration at compile time:
//! `caption: String => Markup` does not build.

use crate::errors::ConfigurationError;
use crate::schema::{FieldKind, OptionSet, SchemaBuilder};
use crate::value::{AsFile, AsMarkup, CompositeValue, FieldValue, ScalarValue};

/// Binds a field of type `T` to a descriptor kind.
pub trait Slot<T> {
    /// Add this field's descriptor(s) under `key`.
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder;

    /// Report the field's value(s).
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>);

    /// Check invariants that span more than one field.
    fn validate(_value: &T) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

/// Plain text value. See [`FieldKind::Scalar`].
#[derive(Debug)]
pub struct Scalar;

/// Plain text value that is sent even when it equals zero, for required
/// parameters such as coordinates. Described as [`FieldKind::Scalar`].
#[derive(Debug)]
pub struct Required;

/// JSON text value. See [`FieldKind::Composite`].
#[derive(Debug)]
pub struct Composite;

/// Reply markup. See [`FieldKind::Markup`].
#[derive(Debug)]
pub struct Markup;

/// File attachment. See [`FieldKind::File`].
#[derive(Debug)]
pub struct File;

/// Embedded option group; its keys land at the embedding level.
#[derive(Debug)]
pub struct Recursive;

impl<T: ScalarValue> Slot<T> for Scalar {
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder {
        builder.field(key, FieldKind::Scalar)
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        out.push(FieldValue::Scalar(value));
    }
}

impl<T: ScalarValue> Slot<T> for Required {
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder {
        builder.field(key, FieldKind::Scalar)
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        out.push(FieldValue::Required(value));
    }
}

impl<T: CompositeValue> Slot<T> for Composite {
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder {
        builder.field(key, FieldKind::Composite)
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        out.push(FieldValue::Composite(value));
    }
}

impl<T: AsMarkup> Slot<T> for Markup {
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder {
        builder.field(key, FieldKind::Markup)
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        out.push(FieldValue::Markup(value.as_markup()));
    }
}

impl<T: AsFile> Slot<T> for File {
    fn describe(builder: SchemaBuilder, key: &'static str) -> SchemaBuilder {
        builder.field(key, FieldKind::File)
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        out.push(FieldValue::File(value.as_file()));
    }
}

impl<T: OptionSet> Slot<T> for Recursive {
    fn describe(builder: SchemaBuilder, _key: &'static str) -> SchemaBuilder {
        builder.embed(T::schema())
    }
    fn push<'a>(value: &'a T, out: &mut Vec<FieldValue<'a>>) {
        value.collect(out);
    }
    fn validate(value: &T) -> Result<(), ConfigurationError> {
        value.validate()
    }
}

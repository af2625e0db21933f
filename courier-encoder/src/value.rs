//! Runtime field values and the traits that classify them.

use std::fmt;

use serde::Serialize;

use courier_types::{
    BotCommandScope, ChatAction, ChatId, DiceEmoji, InlineKeyboardMarkup, InputFile, InputMedia,
    MarkupRef, ParseMode, PollType, ReplyMarkup,
};

use crate::schema::FieldKind;

// ─── ScalarValue ──────────────────────────────────────────────────────────────

/// A value sent as plain text: numbers, booleans, strings, string enums.
pub trait ScalarValue {
    /// `true` for the "not set" value of the type (`0`, `false`, `""`, `None`).
    fn is_zero(&self) -> bool;
    /// Wire text of the value.
    fn to_wire(&self) -> String;
}

macro_rules! scalar_int {
    ($($t:ty),*) => { $(
        impl ScalarValue for $t {
            fn is_zero(&self) -> bool { *self == 0 }
            fn to_wire(&self) -> String { self.to_string() }
        }
    )* };
}

scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl ScalarValue for f32 {
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn to_wire(&self) -> String { self.to_string() }
}

impl ScalarValue for f64 {
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn to_wire(&self) -> String { self.to_string() }
}

impl ScalarValue for bool {
    fn is_zero(&self) -> bool { !*self }
    fn to_wire(&self) -> String { self.to_string() }
}

impl ScalarValue for String {
    fn is_zero(&self) -> bool { self.is_empty() }
    fn to_wire(&self) -> String { self.clone() }
}

impl ScalarValue for ChatId {
    fn is_zero(&self) -> bool {
        match self {
            ChatId::Id(id)         => *id == 0,
            ChatId::Username(name) => name.is_empty(),
        }
    }
    fn to_wire(&self) -> String { self.to_string() }
}

macro_rules! scalar_enum {
    ($($t:ty),*) => { $(
        impl ScalarValue for $t {
            fn is_zero(&self) -> bool { false }
            fn to_wire(&self) -> String { self.as_str().to_owned() }
        }
    )* };
}

scalar_enum!(ParseMode, PollType, DiceEmoji, ChatAction);

/// `None` is the unset value. `Some(v)` is always sent, even when `v` is
/// itself zero.
impl<T: ScalarValue> ScalarValue for Option<T> {
    fn is_zero(&self) -> bool { self.is_none() }
    fn to_wire(&self) -> String {
        self.as_ref().map(ScalarValue::to_wire).unwrap_or_default()
    }
}

// ─── CompositeValue ───────────────────────────────────────────────────────────

/// A value sent as JSON text: sequences and records.
pub trait CompositeValue {
    #[allow(missing_docs)]
    fn is_zero(&self) -> bool;
    /// JSON text of the value.
    fn to_json(&self) -> serde_json::Result<String>;
}

impl<T: Serialize> CompositeValue for Vec<T> {
    fn is_zero(&self) -> bool { self.is_empty() }
    fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
}

impl<T: Serialize> CompositeValue for Option<T> {
    fn is_zero(&self) -> bool { self.is_none() }
    fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
}

// Records that are required parameters of some calls.
macro_rules! composite_record {
    ($($t:ty),*) => { $(
        impl CompositeValue for $t {
            fn is_zero(&self) -> bool { false }
            fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
        }
    )* };
}

composite_record!(InputMedia, BotCommandScope);

// ─── Markup / files ───────────────────────────────────────────────────────────

/// A field holding reply markup, whole-union or a single shape.
pub trait AsMarkup {
    /// The populated variant, if any.
    fn as_markup(&self) -> Option<MarkupRef<'_>>;
}

impl AsMarkup for ReplyMarkup {
    fn as_markup(&self) -> Option<MarkupRef<'_>> { Some(self.as_markup_ref()) }
}

impl AsMarkup for InlineKeyboardMarkup {
    fn as_markup(&self) -> Option<MarkupRef<'_>> { Some(MarkupRef::InlineKeyboard(self)) }
}

impl<T: AsMarkup> AsMarkup for Option<T> {
    fn as_markup(&self) -> Option<MarkupRef<'_>> {
        self.as_ref().and_then(AsMarkup::as_markup)
    }
}

/// A field holding a file attachment.
pub trait AsFile {
    #[allow(missing_docs)]
    fn as_file(&self) -> Option<&InputFile>;
}

impl AsFile for InputFile {
    fn as_file(&self) -> Option<&InputFile> { Some(self) }
}

impl AsFile for Option<InputFile> {
    fn as_file(&self) -> Option<&InputFile> { self.as_ref() }
}

// ─── FieldValue ───────────────────────────────────────────────────────────────

/// One field as reported by [`crate::OptionSet::collect`].
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// Nothing to send for this slot, whatever its kind.
    Absent,
    #[allow(missing_docs)]
    Scalar(&'a dyn ScalarValue),
    /// A scalar that is never omitted.
    Required(&'a dyn ScalarValue),
    #[allow(missing_docs)]
    Composite(&'a dyn CompositeValue),
    #[allow(missing_docs)]
    Markup(Option<MarkupRef<'a>>),
    #[allow(missing_docs)]
    File(Option<&'a InputFile>),
}

impl FieldValue<'_> {
    /// The descriptor kind this value can fill. `None` for [`FieldValue::Absent`],
    /// which fits any slot.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Absent       => None,
            Self::Scalar(_)    => Some(FieldKind::Scalar),
            Self::Required(_)  => Some(FieldKind::Scalar),
            Self::Composite(_) => Some(FieldKind::Composite),
            Self::Markup(_)    => Some(FieldKind::Markup),
            Self::File(_)      => Some(FieldKind::File),
        }
    }

    /// `true` if the encoder will omit this value.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Absent       => true,
            Self::Scalar(v)    => v.is_zero(),
            Self::Required(_)  => false,
            Self::Composite(v) => v.is_zero(),
            Self::Markup(m)    => m.is_none(),
            Self::File(f)      => f.is_none(),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent       => f.write_str("Absent"),
            Self::Scalar(v)    => f.debug_tuple("Scalar").field(&v.to_wire()).finish(),
            Self::Required(v)  => f.debug_tuple("Required").field(&v.to_wire()).finish(),
            Self::Composite(v) => f.debug_tuple("Composite").field(&v.to_json().ok()).finish(),
            Self::Markup(m)    => f.debug_tuple("Markup").field(m).finish(),
            Self::File(file)   => f.debug_tuple("File").field(file).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values() {
        assert!(0i64.is_zero());
        assert!(false.is_zero());
        assert!(String::new().is_zero());
        assert!(ChatId::Id(0).is_zero());
        assert!(ScalarValue::is_zero(&None::<u32>));
        assert!(!ScalarValue::is_zero(&Some(0u32)));
        assert!(CompositeValue::is_zero(&Vec::<String>::new()));
    }

    #[test]
    fn required_scalar_is_never_zero() {
        let lat = 0.0f64;
        assert!(FieldValue::Scalar(&lat).is_zero());
        assert!(!FieldValue::Required(&lat).is_zero());
        assert_eq!(FieldValue::Required(&lat).kind(), Some(FieldKind::Scalar));
    }

    #[test]
    fn wire_text() {
        assert_eq!((-42i32).to_wire(), "-42");
        assert_eq!(true.to_wire(), "true");
        assert_eq!(1.5f64.to_wire(), "1.5");
        assert_eq!(ParseMode::MarkdownV2.to_wire(), "MarkdownV2");
        assert_eq!(ChatId::from("@chan").to_wire(), "@chan");
        assert_eq!(Some(0u32).to_wire(), "0");
    }

    #[test]
    fn composite_json() {
        let v = vec!["message".to_owned(), "poll".to_owned()];
        assert_eq!(v.to_json().unwrap(), r#"["message","poll"]"#);
    }

    #[test]
    fn single_shape_markup_is_inline_keyboard() {
        let kb = Some(InlineKeyboardMarkup::default());
        assert!(matches!(kb.as_markup(), Some(MarkupRef::InlineKeyboard(_))));
        assert!(None::<ReplyMarkup>.as_markup().is_none());
    }
}

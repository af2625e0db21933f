//! Reply markup → JSON text.

use courier_types::MarkupRef;

/// Serialize whichever markup shape is populated.
///
/// Only the populated variant's own fields appear in the output; there is
/// no wrapping object naming the variant.
pub fn encode_markup(markup: MarkupRef<'_>) -> serde_json::Result<String> {
    match markup {
        MarkupRef::ReplyKeyboard(m)  => serde_json::to_string(m),
        MarkupRef::RemoveKeyboard(m) => serde_json::to_string(m),
        MarkupRef::InlineKeyboard(m) => serde_json::to_string(m),
        MarkupRef::ForceReply(m)     => serde_json::to_string(m),
    }
}

#[cfg(test)]
mod tests {
    use courier_types::{
        ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
        ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
    };

    use super::*;

    fn enc(m: impl Into<ReplyMarkup>) -> String {
        encode_markup(m.into().as_markup_ref()).unwrap()
    }

    #[test]
    fn each_variant_encodes_its_own_fields() {
        assert_eq!(
            enc(InlineKeyboardMarkup::from(InlineKeyboardButton::callback("Go", "go"))),
            r#"{"inline_keyboard":[[{"text":"Go","callback_data":"go"}]]}"#
        );
        assert_eq!(
            enc(ReplyKeyboardMarkup::new(vec![vec![KeyboardButton::new("Hi")]]).one_time(true)),
            r#"{"keyboard":[[{"text":"Hi"}]],"one_time_keyboard":true}"#
        );
        assert_eq!(
            enc(ReplyKeyboardRemove { selective: true }),
            r#"{"remove_keyboard":true,"selective":true}"#
        );
        assert_eq!(enc(ForceReply::default()), r#"{"force_reply":true,"selective":false}"#);
    }
}

//! Keyboard shapes accepted as `reply_markup`.
//!
//! The Bot API fixes the set of shapes, so [`ReplyMarkup`] is a closed enum.
//! Optional button and keyboard fields left at their defaults are omitted
//! from the serialized JSON.
//!
//! [`ReplyKeyboardRemove`] and [`ForceReply`] always serialize their flag
//! (`remove_keyboard` / `force_reply`) as `true`; the API rejects `false`.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::enums::PollType;

// ─── Reply keyboard ───────────────────────────────────────────────────────────

/// One button of a [`ReplyKeyboardMarkup`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct KeyboardButton {
    /// Button label; sent as a message when pressed.
    pub text: String,
    /// Send the user's phone number when pressed (private chats only).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub request_contact: bool,
    /// Send the user's location when pressed (private chats only).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub request_location: bool,
    /// Ask the user to create a poll when pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
    /// A plain text button.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    /// A button that shares the user's phone number.
    pub fn contact(text: impl Into<String>) -> Self {
        Self { request_contact: true, ..Self::new(text) }
    }

    /// A button that shares the user's location.
    pub fn location(text: impl Into<String>) -> Self {
        Self { request_location: true, ..Self::new(text) }
    }

    /// A button that opens the poll creator. `None` allows any poll type.
    pub fn poll(text: impl Into<String>, kind: Option<PollType>) -> Self {
        Self { request_poll: Some(KeyboardButtonPollType { kind }), ..Self::new(text) }
    }
}

/// Type of poll a [`KeyboardButton`] lets the user create.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct KeyboardButtonPollType {
    /// `None` allows both quizzes and regular polls.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
}

/// A custom keyboard with reply options.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ReplyKeyboardMarkup {
    /// Rows of buttons.
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[allow(missing_docs)]
    pub resize_keyboard: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[allow(missing_docs)]
    pub one_time_keyboard: bool,
    /// Placeholder shown in the input field while the keyboard is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    /// Show the keyboard only to mentioned users / the replied-to sender.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selective: bool,
}

impl ReplyKeyboardMarkup {
    /// Keyboard from rows of buttons.
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self { keyboard, ..Default::default() }
    }

    /// Ask clients to resize the keyboard vertically.
    pub fn resize(mut self, v: bool) -> Self {
        self.resize_keyboard = v; self
    }

    /// Hide the keyboard once it has been used.
    pub fn one_time(mut self, v: bool) -> Self {
        self.one_time_keyboard = v; self
    }

    /// Set the input field placeholder.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.input_field_placeholder = Some(text.into()); self
    }
}

/// Remove the current custom keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReplyKeyboardRemove {
    /// Remove the keyboard only for mentioned users / the replied-to sender.
    pub selective: bool,
}

impl Serialize for ReplyKeyboardRemove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ReplyKeyboardRemove", 2)?;
        s.serialize_field("remove_keyboard", &true)?;
        s.serialize_field("selective", &self.selective)?;
        s.end()
    }
}

// ─── Inline keyboard ──────────────────────────────────────────────────────────

/// Login URL button payload (Telegram Login Widget).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct LoginUrl {
    /// HTTPS URL opened with user authorization data appended.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub forward_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub bot_username: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[allow(missing_docs)]
    pub request_write_access: bool,
}

/// Placeholder; launches the bot's game when pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct CallbackGame {}

/// One button of an [`InlineKeyboardMarkup`].
///
/// Exactly one of the optional fields should be set.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub login_url: Option<LoginUrl>,
    /// Data sent back in a callback query, 1-64 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub callback_game: Option<CallbackGame>,
    /// Pay button. Must be the first button of the first row.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pay: bool,
}

impl InlineKeyboardButton {
    /// A button that opens `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), url: Some(url.into()), ..Default::default() }
    }

    /// A button that sends `data` back as a callback query.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { text: text.into(), callback_data: Some(data.into()), ..Default::default() }
    }

    /// A button that switches the user to inline mode in another chat.
    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { text: text.into(), switch_inline_query: Some(query.into()), ..Default::default() }
    }
}

/// An inline keyboard attached to a message.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct InlineKeyboardMarkup {
    /// Rows of buttons.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Keyboard from rows of buttons.
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }

    /// Append one row.
    pub fn row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row); self
    }
}

// ─── Force reply ──────────────────────────────────────────────────────────────

/// Show a reply interface, as if the user tapped "Reply" on the bot's message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceReply {
    /// Placeholder shown in the input field.
    pub input_field_placeholder: Option<String>,
    /// Force the reply only for mentioned users / the replied-to sender.
    pub selective: bool,
}

impl Serialize for ForceReply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ForceReply", 3)?;
        s.serialize_field("force_reply", &true)?;
        if let Some(placeholder) = &self.input_field_placeholder {
            s.serialize_field("input_field_placeholder", placeholder)?;
        }
        s.serialize_field("selective", &self.selective)?;
        s.end()
    }
}

// ─── ReplyMarkup ──────────────────────────────────────────────────────────────

/// The closed set of shapes accepted as `reply_markup`.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyMarkup {
    /// Custom reply keyboard.
    ReplyKeyboard(ReplyKeyboardMarkup),
    /// Remove the custom keyboard.
    RemoveKeyboard(ReplyKeyboardRemove),
    /// Inline keyboard attached to the message.
    InlineKeyboard(InlineKeyboardMarkup),
    /// Force a reply.
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    /// Borrow the populated variant.
    pub fn as_markup_ref(&self) -> MarkupRef<'_> {
        match self {
            Self::ReplyKeyboard(m)  => MarkupRef::ReplyKeyboard(m),
            Self::RemoveKeyboard(m) => MarkupRef::RemoveKeyboard(m),
            Self::InlineKeyboard(m) => MarkupRef::InlineKeyboard(m),
            Self::ForceReply(m)     => MarkupRef::ForceReply(m),
        }
    }
}

/// Borrowed view of one markup variant.
///
/// Lets fields typed as a single shape (edit calls only accept inline
/// keyboards) share the encoding path of [`ReplyMarkup`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkupRef<'a> {
    #[allow(missing_docs)] ReplyKeyboard(&'a ReplyKeyboardMarkup),
    #[allow(missing_docs)] RemoveKeyboard(&'a ReplyKeyboardRemove),
    #[allow(missing_docs)] InlineKeyboard(&'a InlineKeyboardMarkup),
    #[allow(missing_docs)] ForceReply(&'a ForceReply),
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(m: ReplyKeyboardMarkup) -> Self { Self::ReplyKeyboard(m) }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(m: ReplyKeyboardRemove) -> Self { Self::RemoveKeyboard(m) }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(m: InlineKeyboardMarkup) -> Self { Self::InlineKeyboard(m) }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(m: ForceReply) -> Self { Self::ForceReply(m) }
}

/// A single button becomes a one-button inline keyboard.
impl From<InlineKeyboardButton> for InlineKeyboardMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self::new(vec![vec![button]])
    }
}

//! Plain records that options carry as JSON-encoded values.

use std::fmt;

use serde::Serialize;

use crate::enums::ParseMode;

// ─── ChatId ───────────────────────────────────────────────────────────────────

/// Target chat: numeric ID or `@channelusername`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat identifier.
    Id(i64),
    /// Public username, including the leading `@`.
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id)         => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self { Self::Username(name.to_owned()) }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self { Self::Username(name) }
}

// ─── User / MessageEntity ─────────────────────────────────────────────────────

/// A Telegram user or bot, as referenced by `text_mention` entities.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct User {
    #[allow(missing_docs)]
    pub id: i64,
    #[allow(missing_docs)]
    pub is_bot: bool,
    #[allow(missing_docs)]
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub language_code: Option<String>,
}

/// One special entity in a text or caption: hashtag, URL, bold span, …
///
/// Offsets and lengths are in UTF-16 code units.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MessageEntity {
    /// Entity type (`"bold"`, `"text_link"`, `"text_mention"`, …).
    #[serde(rename = "type")]
    pub kind: String,
    #[allow(missing_docs)]
    pub offset: i32,
    #[allow(missing_docs)]
    pub length: i32,
    /// For `text_link` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// For `text_mention` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// For `pre` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl MessageEntity {
    /// Entity of `kind` spanning `length` units from `offset`.
    pub fn new(kind: impl Into<String>, offset: i32, length: i32) -> Self {
        Self { kind: kind.into(), offset, length, ..Default::default() }
    }

    /// `text_link` entity pointing at `url`.
    pub fn text_link(offset: i32, length: i32, url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::new("text_link", offset, length) }
    }
}

// ─── Bot commands ─────────────────────────────────────────────────────────────

/// A command shown in the client's command menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits, underscores.
    pub command: String,
    /// 3-256 characters.
    pub description: String,
}

impl BotCommand {
    #[allow(missing_docs)]
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// Which users a command list applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    /// Fallback scope.
    Default,
    #[allow(missing_docs)]
    AllPrivateChats,
    #[allow(missing_docs)]
    AllGroupChats,
    #[allow(missing_docs)]
    AllChatAdministrators,
    /// One specific chat.
    Chat {
        #[allow(missing_docs)]
        chat_id: ChatId,
    },
    /// Administrators of one chat.
    ChatAdministrators {
        #[allow(missing_docs)]
        chat_id: ChatId,
    },
    /// One member of one group chat.
    ChatMember {
        #[allow(missing_docs)]
        chat_id: ChatId,
        #[allow(missing_docs)]
        user_id: i64,
    },
}

// ─── InputMedia ───────────────────────────────────────────────────────────────

/// Kind tag of an [`InputMedia`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMediaKind {
    #[default]
    #[allow(missing_docs)]
    Photo,
    #[allow(missing_docs)]
    Video,
    #[allow(missing_docs)]
    Animation,
    #[allow(missing_docs)]
    Audio,
    #[allow(missing_docs)]
    Document,
}

/// Media replacing the content of an existing message (`editMessageMedia`).
///
/// `media` is a file ID, an HTTP URL, or `attach://<part name>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InputMedia {
    #[serde(rename = "type")]
    #[allow(missing_docs)]
    pub kind: InputMediaKind,
    #[allow(missing_docs)]
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[allow(missing_docs)]
    pub caption_entities: Vec<MessageEntity>,
}

impl InputMedia {
    /// Media of `kind` referencing `media`.
    pub fn new(kind: InputMediaKind, media: impl Into<String>) -> Self {
        Self { kind, media: media.into(), ..Default::default() }
    }

    /// Set the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into()); self
    }
}

//! String-valued enums accepted by the Bot API.
//!
//! Each enum serializes to its exact wire spelling and exposes the same
//! text through `as_str`, which is what plain form fields carry.

use serde::Serialize;

/// Text formatting mode for messages and captions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ParseMode {
    /// Legacy Markdown.
    Markdown,
    /// [MarkdownV2 style](https://core.telegram.org/bots/api#markdownv2-style).
    MarkdownV2,
    /// [HTML style](https://core.telegram.org/bots/api#html-style).
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown   => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html       => "HTML",
        }
    }
}

/// Kind of poll to send, or to allow users to create from a keyboard button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
    /// Quiz: exactly one correct answer.
    Quiz,
    /// Regular poll.
    Regular,
}

impl PollType {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiz    => "quiz",
            Self::Regular => "regular",
        }
    }
}

/// Emoji on which a dice throw animation is based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiceEmoji {
    /// 🎲, values 1-6.
    #[serde(rename = "🎲")]
    Die,
    /// 🎯, values 1-6.
    #[serde(rename = "🎯")]
    Darts,
    /// 🏀, values 1-5.
    #[serde(rename = "🏀")]
    Basket,
    /// ⚽️, values 1-5.
    #[serde(rename = "⚽️")]
    Goal,
    /// 🎳, values 1-6.
    #[serde(rename = "🎳")]
    Bowling,
    /// 🎰, values 1-64.
    #[serde(rename = "🎰")]
    Slot,
}

impl DiceEmoji {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Die     => "🎲",
            Self::Darts   => "🎯",
            Self::Basket  => "🏀",
            Self::Goal    => "⚽️",
            Self::Bowling => "🎳",
            Self::Slot    => "🎰",
        }
    }
}

/// Status shown to the other side while the bot prepares a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    #[allow(missing_docs)] Typing,
    #[allow(missing_docs)] UploadPhoto,
    #[allow(missing_docs)] RecordVideo,
    #[allow(missing_docs)] UploadVideo,
    #[allow(missing_docs)] RecordAudio,
    #[allow(missing_docs)] UploadAudio,
    #[allow(missing_docs)] UploadDocument,
    #[allow(missing_docs)] FindLocation,
    #[allow(missing_docs)] RecordVideoNote,
    #[allow(missing_docs)] UploadVideoNote,
}

impl ChatAction {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing          => "typing",
            Self::UploadPhoto     => "upload_photo",
            Self::RecordVideo     => "record_video",
            Self::UploadVideo     => "upload_video",
            Self::RecordAudio     => "record_audio",
            Self::UploadAudio     => "upload_audio",
            Self::UploadDocument  => "upload_document",
            Self::FindLocation    => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

/// Update kinds a bot can subscribe to (`allowed_updates`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    #[allow(missing_docs)] Message,
    #[allow(missing_docs)] EditedMessage,
    #[allow(missing_docs)] ChannelPost,
    #[allow(missing_docs)] EditedChannelPost,
    #[allow(missing_docs)] InlineQuery,
    #[allow(missing_docs)] ChosenInlineResult,
    #[allow(missing_docs)] CallbackQuery,
    #[allow(missing_docs)] ShippingQuery,
    #[allow(missing_docs)] PreCheckoutQuery,
    #[allow(missing_docs)] Poll,
    #[allow(missing_docs)] PollAnswer,
    #[allow(missing_docs)] MyChatMember,
    #[allow(missing_docs)] ChatMember,
}

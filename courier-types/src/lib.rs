//! Bot API data records that appear as values of outgoing options.
//!
//! Nothing in this crate has behaviour beyond construction and `serde`
//! serialization. The encoder treats every record as an opaque value and
//! turns it into JSON text when it shows up as a field.
//!
//! # Overview
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`markup`]  | Keyboard shapes and the closed [`ReplyMarkup`] union          |
//! | [`records`] | Entities, users, bot commands, command scopes, input media   |
//! | [`enums`]   | String-valued enums: parse mode, poll type, dice, actions    |
//! | [`file`]    | [`InputFile`]: remote ID, local path or in-memory bytes      |
//! | [`target`]  | [`MessageTarget`]: chat + message ID, or inline message ID   |
//!
//! # Example
//!
//! ```rust
//! use courier_types::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};
//!
//! let markup: ReplyMarkup = InlineKeyboardMarkup::new(vec![vec![
//!     InlineKeyboardButton::url("Docs", "https://core.telegram.org/bots/api"),
//!     InlineKeyboardButton::callback("Ping", "ping"),
//! ]])
//! .into();
//! assert!(matches!(markup, ReplyMarkup::InlineKeyboard(_)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod enums;
pub mod file;
pub mod markup;
pub mod records;
pub mod target;

mod errors;

pub use enums::{ChatAction, DiceEmoji, ParseMode, PollType, UpdateType};
pub use errors::UnionError;
pub use file::InputFile;
pub use markup::{
    CallbackGame,
    ForceReply,
    InlineKeyboardButton,
    InlineKeyboardMarkup,
    KeyboardButton,
    KeyboardButtonPollType,
    LoginUrl,
    MarkupRef,
    ReplyKeyboardMarkup,
    ReplyKeyboardRemove,
    ReplyMarkup,
};
pub use records::{
    BotCommand,
    BotCommandScope,
    ChatId,
    InputMedia,
    InputMediaKind,
    MessageEntity,
    User,
};
pub use target::MessageTarget;

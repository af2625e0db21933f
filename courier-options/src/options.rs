//! Optional parameters of Bot API calls.
//!
//! Field names follow the Bot API parameter names. Fields left at their
//! zero value (`0`, `false`, `""`, empty `Vec`, `None`) are not sent.
//! Where the API gives `0` or `false` a meaning of its own, the field is an
//! `Option` and `Some(0)` / `Some(false)` is sent.

use courier_encoder::option_set;
use courier_types::{
    BotCommandScope, DiceEmoji, InlineKeyboardMarkup, InputFile, MessageEntity, ParseMode,
    PollType, ReplyMarkup, UpdateType,
};

// ─── Updates / webhook ────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `getUpdates`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct UpdateOptions {
        /// Identifier of the first update to return.
        pub offset:          i64 => Scalar("offset"),
        /// 1–100; the server defaults to 100.
        pub limit:           u32 => Scalar("limit"),
        /// Long-polling timeout in seconds.
        pub timeout:         u32 => Scalar("timeout"),
        pub allowed_updates: Vec<UpdateType> => Composite("allowed_updates"),
    }
}

option_set! {
    /// Optional parameters of `setWebhook`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct WebhookOptions {
        /// Public key certificate for self-signed setups.
        pub certificate:          Option<InputFile> => File("certificate"),
        pub ip_address:           String => Scalar("ip_address"),
        pub max_connections:      u32 => Scalar("max_connections"),
        pub allowed_updates:      Vec<UpdateType> => Composite("allowed_updates"),
        pub drop_pending_updates: bool => Scalar("drop_pending_updates"),
    }
}

// ─── Shared send options ──────────────────────────────────────────────────────

option_set! {
    /// Parameters shared by every `send*` call.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct BaseOptions {
        /// Deliver silently.
        pub disable_notification:        bool => Scalar("disable_notification"),
        pub reply_to_message_id:         i32 => Scalar("reply_to_message_id"),
        /// Send even if the replied-to message is gone.
        pub allow_sending_without_reply: bool => Scalar("allow_sending_without_reply"),
        pub reply_markup:                Option<ReplyMarkup> => Markup("reply_markup"),
    }
}

impl BaseOptions {
    /// Deliver silently.
    pub fn silent(mut self, v: bool) -> Self {
        self.disable_notification = v; self
    }

    /// Reply to a specific message ID.
    pub fn reply_to(mut self, message_id: i32) -> Self {
        self.reply_to_message_id = message_id; self
    }

    /// Send even if the replied-to message has been deleted.
    pub fn allow_without_reply(mut self, v: bool) -> Self {
        self.allow_sending_without_reply = v; self
    }

    /// Attach a keyboard, keyboard removal or force-reply request.
    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into()); self
    }
}

option_set! {
    /// Optional parameters of `sendMessage`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct MessageOptions {
        pub base:                     BaseOptions => Recursive,
        pub parse_mode:               Option<ParseMode> => Scalar("parse_mode"),
        pub entities:                 Vec<MessageEntity> => Composite("entities"),
        pub disable_web_page_preview: bool => Scalar("disable_web_page_preview"),
    }
}

impl MessageOptions {
    /// Parse the text as Markdown, MarkdownV2 or HTML.
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode); self
    }

    /// Attach explicit formatting entities instead of a parse mode.
    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.entities = entities; self
    }

    /// Disable link preview.
    pub fn no_webpage(mut self, v: bool) -> Self {
        self.disable_web_page_preview = v; self
    }
}

option_set! {
    /// Optional parameters of `forwardMessage`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct ForwardOptions {
        pub disable_notification: bool => Scalar("disable_notification"),
    }
}

option_set! {
    /// Optional parameters of `copyMessage`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct CopyOptions {
        pub base:             BaseOptions => Recursive,
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        /// New caption; the original one is kept when empty.
        pub caption:          String => Scalar("caption"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
    }
}

// ─── Media ────────────────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `sendPhoto`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct PhotoOptions {
        pub base:             BaseOptions => Recursive,
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        pub caption:          String => Scalar("caption"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
    }
}

option_set! {
    /// Optional parameters of `sendAudio`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct AudioOptions {
        pub base:             BaseOptions => Recursive,
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        pub caption:          String => Scalar("caption"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
        /// Duration in seconds.
        pub duration:         u32 => Scalar("duration"),
        pub performer:        String => Scalar("performer"),
        pub title:            String => Scalar("title"),
        /// JPEG thumbnail, under 200 kB and 320×320.
        pub thumb:            Option<InputFile> => File("thumb"),
    }
}

option_set! {
    /// Optional parameters of `sendDocument`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct DocumentOptions {
        pub base:                           BaseOptions => Recursive,
        pub parse_mode:                     Option<ParseMode> => Scalar("parse_mode"),
        pub caption:                        String => Scalar("caption"),
        pub caption_entities:               Vec<MessageEntity> => Composite("caption_entities"),
        pub disable_content_type_detection: bool => Scalar("disable_content_type_detection"),
        pub thumb:                          Option<InputFile> => File("thumb"),
    }
}

option_set! {
    /// Optional parameters of `sendVideo`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct VideoOptions {
        pub base:               BaseOptions => Recursive,
        pub parse_mode:         Option<ParseMode> => Scalar("parse_mode"),
        pub caption:            String => Scalar("caption"),
        pub caption_entities:   Vec<MessageEntity> => Composite("caption_entities"),
        pub duration:           u32 => Scalar("duration"),
        pub width:              u32 => Scalar("width"),
        pub height:             u32 => Scalar("height"),
        pub thumb:              Option<InputFile> => File("thumb"),
        pub supports_streaming: bool => Scalar("supports_streaming"),
    }
}

option_set! {
    /// Optional parameters of `sendAnimation`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct AnimationOptions {
        pub base:             BaseOptions => Recursive,
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        pub caption:          String => Scalar("caption"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
        pub duration:         u32 => Scalar("duration"),
        pub width:            u32 => Scalar("width"),
        pub height:           u32 => Scalar("height"),
        pub thumb:            Option<InputFile> => File("thumb"),
    }
}

option_set! {
    /// Optional parameters of `sendVoice`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct VoiceOptions {
        pub base:             BaseOptions => Recursive,
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        pub caption:          String => Scalar("caption"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
        pub duration:         u32 => Scalar("duration"),
    }
}

option_set! {
    /// Optional parameters of `sendVideoNote`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct VideoNoteOptions {
        pub base:     BaseOptions => Recursive,
        pub duration: u32 => Scalar("duration"),
        /// Video width and height (notes are square).
        pub length:   u32 => Scalar("length"),
        pub thumb:    Option<InputFile> => File("thumb"),
    }
}

option_set! {
    /// Optional parameters of `sendMediaGroup`. Albums take no reply markup.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct MediaGroupOptions {
        pub disable_notification:        bool => Scalar("disable_notification"),
        pub reply_to_message_id:         i32 => Scalar("reply_to_message_id"),
        pub allow_sending_without_reply: bool => Scalar("allow_sending_without_reply"),
    }
}

// Caption setters shared by the media option sets.
macro_rules! caption_setters {
    ($($t:ty),*) => { $(
        impl $t {
            /// Set the caption.
            pub fn caption(mut self, caption: impl Into<String>) -> Self {
                self.caption = caption.into(); self
            }

            /// Parse the caption as Markdown, MarkdownV2 or HTML.
            pub fn parse_mode(mut self, mode: ParseMode) -> Self {
                self.parse_mode = Some(mode); self
            }

            /// Attach explicit caption entities instead of a parse mode.
            pub fn caption_entities(mut self, entities: Vec<MessageEntity>) -> Self {
                self.caption_entities = entities; self
            }
        }
    )* };
}

caption_setters!(
    CopyOptions, PhotoOptions, AudioOptions, DocumentOptions, VideoOptions, AnimationOptions,
    VoiceOptions
);

// Forward the BaseOptions setters through the embedding set.
macro_rules! base_setters {
    ($($t:ty),*) => { $(
        impl $t {
            /// Deliver silently.
            pub fn silent(mut self, v: bool) -> Self {
                self.base.disable_notification = v; self
            }

            /// Reply to a specific message ID.
            pub fn reply_to(mut self, message_id: i32) -> Self {
                self.base.reply_to_message_id = message_id; self
            }

            /// Send even if the replied-to message has been deleted.
            pub fn allow_without_reply(mut self, v: bool) -> Self {
                self.base.allow_sending_without_reply = v; self
            }

            /// Attach a keyboard, keyboard removal or force-reply request.
            pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
                self.base.reply_markup = Some(markup.into()); self
            }
        }
    )* };
}

base_setters!(
    MessageOptions, CopyOptions, PhotoOptions, AudioOptions, DocumentOptions, VideoOptions,
    AnimationOptions, VoiceOptions, VideoNoteOptions, LocationOptions, VenueOptions,
    ContactOptions, PollOptions, DiceOptions
);

// ─── Location / venue / contact ───────────────────────────────────────────────

option_set! {
    /// Optional parameters of `sendLocation`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct LocationOptions {
        pub base:                   BaseOptions => Recursive,
        /// Radius of uncertainty in metres, 0–1500.
        pub horizontal_accuracy:    f64 => Scalar("horizontal_accuracy"),
        /// Seconds the live location stays updatable, 60–86400.
        pub live_period:            u32 => Scalar("live_period"),
        pub heading:                u32 => Scalar("heading"),
        pub proximity_alert_radius: u32 => Scalar("proximity_alert_radius"),
    }
}

option_set! {
    /// Optional parameters of `sendVenue`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct VenueOptions {
        pub base:              BaseOptions => Recursive,
        pub foursquare_id:     String => Scalar("foursquare_id"),
        pub foursquare_type:   String => Scalar("foursquare_type"),
        pub google_place_id:   String => Scalar("google_place_id"),
        pub google_place_type: String => Scalar("google_place_type"),
    }
}

option_set! {
    /// Optional parameters of `sendContact`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct ContactOptions {
        pub base:      BaseOptions => Recursive,
        pub last_name: String => Scalar("last_name"),
        pub vcard:     String => Scalar("vcard"),
    }
}

// ─── Polls / dice ─────────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `sendPoll`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct PollOptions {
        pub base:                    BaseOptions => Recursive,
        /// The server defaults to `true`; `Some(false)` makes the poll public.
        pub is_anonymous:            Option<bool> => Scalar("is_anonymous"),
        pub kind:                    Option<PollType> => Scalar("type"),
        pub allows_multiple_answers: bool => Scalar("allows_multiple_answers"),
        /// Zero-based index of the right answer in quiz mode; `Some(0)` is
        /// the first option.
        pub correct_option_id:       Option<u32> => Scalar("correct_option_id"),
        pub explanation:             String => Scalar("explanation"),
        pub explanation_parse_mode:  Option<ParseMode> => Scalar("explanation_parse_mode"),
        /// Seconds the poll stays open, 5–600. Excludes `close_date`.
        pub open_period:             u32 => Scalar("open_period"),
        /// Unix time the poll closes. Excludes `open_period`.
        pub close_date:              i64 => Scalar("close_date"),
        pub is_closed:               bool => Scalar("is_closed"),
    }
}

impl PollOptions {
    /// Quiz with the answer at `correct_option_id`.
    pub fn quiz(correct_option_id: u32) -> Self {
        Self {
            kind: Some(PollType::Quiz),
            correct_option_id: Some(correct_option_id),
            ..Default::default()
        }
    }
}

option_set! {
    /// Optional parameters of `sendDice`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct DiceOptions {
        pub base:  BaseOptions => Recursive,
        /// The server defaults to 🎲.
        pub emoji: Option<DiceEmoji> => Scalar("emoji"),
    }
}

// ─── Callback queries ─────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `answerCallbackQuery`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct CallbackQueryOptions {
        /// Notification text, 0–200 characters.
        pub text:       String => Scalar("text"),
        /// Show an alert instead of a toast.
        pub show_alert: bool => Scalar("show_alert"),
        pub url:        String => Scalar("url"),
        /// Seconds clients may cache the answer.
        pub cache_time: u32 => Scalar("cache_time"),
    }
}

// ─── Edits ────────────────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `editMessageText`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct MessageTextOptions {
        pub parse_mode:               Option<ParseMode> => Scalar("parse_mode"),
        pub entities:                 Vec<MessageEntity> => Composite("entities"),
        pub disable_web_page_preview: bool => Scalar("disable_web_page_preview"),
        /// Edits only accept inline keyboards.
        pub reply_markup:             Option<InlineKeyboardMarkup> => Markup("reply_markup"),
    }
}

option_set! {
    /// Optional parameters of `editMessageCaption`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct MessageCaptionOptions {
        pub caption:          String => Scalar("caption"),
        pub parse_mode:       Option<ParseMode> => Scalar("parse_mode"),
        pub caption_entities: Vec<MessageEntity> => Composite("caption_entities"),
        pub reply_markup:     Option<InlineKeyboardMarkup> => Markup("reply_markup"),
    }
}

option_set! {
    /// Optional parameters of `editMessageReplyMarkup`. An unset markup
    /// removes the message's inline keyboard.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct MessageReplyMarkup {
        pub reply_markup: Option<InlineKeyboardMarkup> => Markup("reply_markup"),
    }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

option_set! {
    /// Optional parameters of `setMyCommands`, `getMyCommands` and
    /// `deleteMyCommands`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct CommandOptions {
        /// The server defaults to [`BotCommandScope::Default`].
        pub scope:         Option<BotCommandScope> => Composite("scope"),
        /// Two-letter ISO 639-1 code; empty applies to all languages.
        pub language_code: String => Scalar("language_code"),
    }
}

#[cfg(test)]
mod tests {
    use courier_encoder::OptionSet;

    use super::*;

    #[test]
    fn base_is_spliced_before_own_fields() {
        let keys: Vec<_> = AudioOptions::schema().fields().iter().map(|f| f.key).collect();
        assert_eq!(&keys[..4], [
            "disable_notification",
            "reply_to_message_id",
            "allow_sending_without_reply",
            "reply_markup",
        ]);
        assert_eq!(keys.last(), Some(&"thumb"));
    }

    #[test]
    fn every_option_set_builds() {
        // Building each table would panic on a duplicate key.
        let sizes = [
            UpdateOptions::schema().len(),
            WebhookOptions::schema().len(),
            MessageOptions::schema().len(),
            ForwardOptions::schema().len(),
            CopyOptions::schema().len(),
            PhotoOptions::schema().len(),
            AudioOptions::schema().len(),
            DocumentOptions::schema().len(),
            VideoOptions::schema().len(),
            AnimationOptions::schema().len(),
            VoiceOptions::schema().len(),
            VideoNoteOptions::schema().len(),
            MediaGroupOptions::schema().len(),
            LocationOptions::schema().len(),
            VenueOptions::schema().len(),
            ContactOptions::schema().len(),
            PollOptions::schema().len(),
            DiceOptions::schema().len(),
            CallbackQueryOptions::schema().len(),
            MessageTextOptions::schema().len(),
            MessageCaptionOptions::schema().len(),
            MessageReplyMarkup::schema().len(),
            CommandOptions::schema().len(),
        ];
        assert_eq!(sizes, [4, 5, 7, 1, 7, 7, 11, 9, 12, 11, 8, 7, 3, 8, 8, 6, 13, 5, 4, 4, 4, 1, 2]);
    }
}

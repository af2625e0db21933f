//! One parameter bundle per Bot API call.
//!
//! Required parameters come first and are set by `new`; the call's option
//! set sits in `options` and is spliced into the same level on the wire.

use courier_encoder::OptionSet;
use courier_types::{
    BotCommand, ChatAction, ChatId, InlineKeyboardMarkup, InputFile, InputMedia, MessageTarget,
};

use crate::options::{
    AnimationOptions, AudioOptions, CallbackQueryOptions, CommandOptions, ContactOptions,
    CopyOptions, DiceOptions, DocumentOptions, ForwardOptions, LocationOptions, MediaGroupOptions,
    MessageCaptionOptions, MessageOptions, MessageReplyMarkup, MessageTextOptions,
    PhotoOptions, PollOptions, UpdateOptions, VenueOptions, VideoNoteOptions, VideoOptions,
    VoiceOptions, WebhookOptions,
};

/// A remote call: an option set plus the Bot API method name it is sent to.
pub trait Method: OptionSet {
    /// Method name as it appears in the request URL (e.g. `"sendPhoto"`).
    const NAME: &'static str;
}

macro_rules! method {
    (
        $(#[$meta:meta])*
        $ty:ident => $name:literal {
            $( $field:ident : $fty:ty => $kind:ident $( ($key:literal) )? ),* $(,)?
        }
        $( options: $opts:ty )?
    ) => {
        ::courier_encoder::option_set! {
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq)]
            pub struct $ty {
                $( pub $field: $fty => $kind $( ($key) )?, )*
                $( pub options: $opts => Recursive, )?
            }
        }

        impl $ty {
            /// Set the required parameters; every option starts unset.
            pub fn new($( $field: impl Into<$fty> ),*) -> Self {
                Self {
                    $( $field: $field.into(), )*
                    $( options: <$opts as Default>::default(), )?
                }
            }

            $(
                /// Replace the optional parameters.
                pub fn options(mut self, options: $opts) -> Self {
                    self.options = options; self
                }
            )?
        }

        impl Method for $ty {
            const NAME: &'static str = $name;
        }
    };
}

// ─── Updates ──────────────────────────────────────────────────────────────────

method! {
    /// Poll for incoming updates.
    GetUpdates => "getUpdates" {}
    options: UpdateOptions
}

method! {
    /// Register an HTTPS webhook for incoming updates.
    SetWebhook => "setWebhook" {
        url: String => Scalar("url"),
    }
    options: WebhookOptions
}

// ─── Messages ─────────────────────────────────────────────────────────────────

method! {
    /// Send a text message.
    SendMessage => "sendMessage" {
        chat_id: ChatId => Scalar("chat_id"),
        text:    String => Scalar("text"),
    }
    options: MessageOptions
}

method! {
    /// Forward a message, keeping the "forwarded from" header.
    ForwardMessage => "forwardMessage" {
        chat_id:      ChatId => Scalar("chat_id"),
        from_chat_id: ChatId => Scalar("from_chat_id"),
        message_id:   i32 => Scalar("message_id"),
    }
    options: ForwardOptions
}

method! {
    /// Copy a message without a link to the original.
    CopyMessage => "copyMessage" {
        chat_id:      ChatId => Scalar("chat_id"),
        from_chat_id: ChatId => Scalar("from_chat_id"),
        message_id:   i32 => Scalar("message_id"),
    }
    options: CopyOptions
}

// ─── Media ────────────────────────────────────────────────────────────────────

method! {
    /// Send a photo.
    SendPhoto => "sendPhoto" {
        chat_id: ChatId => Scalar("chat_id"),
        photo:   InputFile => File("photo"),
    }
    options: PhotoOptions
}

method! {
    /// Send an audio file shown in the music player.
    SendAudio => "sendAudio" {
        chat_id: ChatId => Scalar("chat_id"),
        audio:   InputFile => File("audio"),
    }
    options: AudioOptions
}

method! {
    /// Send a general file.
    SendDocument => "sendDocument" {
        chat_id:  ChatId => Scalar("chat_id"),
        document: InputFile => File("document"),
    }
    options: DocumentOptions
}

method! {
    /// Send a video.
    SendVideo => "sendVideo" {
        chat_id: ChatId => Scalar("chat_id"),
        video:   InputFile => File("video"),
    }
    options: VideoOptions
}

method! {
    /// Send a GIF or soundless H.264 video.
    SendAnimation => "sendAnimation" {
        chat_id:   ChatId => Scalar("chat_id"),
        animation: InputFile => File("animation"),
    }
    options: AnimationOptions
}

method! {
    /// Send an OGG/OPUS voice note.
    SendVoice => "sendVoice" {
        chat_id: ChatId => Scalar("chat_id"),
        voice:   InputFile => File("voice"),
    }
    options: VoiceOptions
}

method! {
    /// Send a round video message.
    SendVideoNote => "sendVideoNote" {
        chat_id:    ChatId => Scalar("chat_id"),
        video_note: InputFile => File("video_note"),
    }
    options: VideoNoteOptions
}

method! {
    /// Send an album of photos or videos referenced by file ID or URL.
    SendMediaGroup => "sendMediaGroup" {
        chat_id: ChatId => Scalar("chat_id"),
        media:   Vec<InputMedia> => Composite("media"),
    }
    options: MediaGroupOptions
}

// ─── Location / venue / contact ───────────────────────────────────────────────

method! {
    /// Send a point on the map.
    SendLocation => "sendLocation" {
        chat_id:   ChatId => Scalar("chat_id"),
        latitude:  f64 => Required("latitude"),
        longitude: f64 => Required("longitude"),
    }
    options: LocationOptions
}

method! {
    /// Send information about a venue.
    SendVenue => "sendVenue" {
        chat_id:   ChatId => Scalar("chat_id"),
        latitude:  f64 => Required("latitude"),
        longitude: f64 => Required("longitude"),
        title:     String => Scalar("title"),
        address:   String => Scalar("address"),
    }
    options: VenueOptions
}

method! {
    /// Send a phone contact.
    SendContact => "sendContact" {
        chat_id:      ChatId => Scalar("chat_id"),
        phone_number: String => Scalar("phone_number"),
        first_name:   String => Scalar("first_name"),
    }
    options: ContactOptions
}

// ─── Polls / dice / chat actions ──────────────────────────────────────────────

method! {
    /// Send a native poll.
    SendPoll => "sendPoll" {
        chat_id:  ChatId => Scalar("chat_id"),
        question: String => Scalar("question"),
        answers:  Vec<String> => Composite("options"),
    }
    options: PollOptions
}

method! {
    /// Send an animated emoji with a random value.
    SendDice => "sendDice" {
        chat_id: ChatId => Scalar("chat_id"),
    }
    options: DiceOptions
}

method! {
    /// Show "typing…", "uploading photo…" and similar in the chat header.
    SendChatAction => "sendChatAction" {
        chat_id: ChatId => Scalar("chat_id"),
        action:  ChatAction => Scalar("action"),
    }
}

method! {
    /// Answer a callback query from an inline keyboard button.
    AnswerCallbackQuery => "answerCallbackQuery" {
        callback_query_id: String => Scalar("callback_query_id"),
    }
    options: CallbackQueryOptions
}

// ─── Edits ────────────────────────────────────────────────────────────────────

method! {
    /// Edit the text of a message.
    EditMessageText => "editMessageText" {
        target: MessageTarget => Recursive,
        text:   String => Scalar("text"),
    }
    options: MessageTextOptions
}

method! {
    /// Edit the caption of a message.
    EditMessageCaption => "editMessageCaption" {
        target: MessageTarget => Recursive,
    }
    options: MessageCaptionOptions
}

method! {
    /// Replace the media of a message with a file ID or URL.
    EditMessageMedia => "editMessageMedia" {
        target:       MessageTarget => Recursive,
        media:        InputMedia => Composite("media"),
        reply_markup: Option<InlineKeyboardMarkup> => Markup("reply_markup"),
    }
}

method! {
    /// Replace or remove the inline keyboard of a message.
    EditMessageReplyMarkup => "editMessageReplyMarkup" {
        target: MessageTarget => Recursive,
    }
    options: MessageReplyMarkup
}

// ─── Commands ─────────────────────────────────────────────────────────────────

method! {
    /// Set the bot's command list for a scope and language.
    SetMyCommands => "setMyCommands" {
        commands: Vec<BotCommand> => Composite("commands"),
    }
    options: CommandOptions
}

method! {
    /// Fetch the bot's command list for a scope and language.
    GetMyCommands => "getMyCommands" {}
    options: CommandOptions
}

method! {
    /// Delete the bot's command list for a scope and language.
    DeleteMyCommands => "deleteMyCommands" {}
    options: CommandOptions
}

use courier_encoder::{ConfigurationError, OptionSet, WireValue, encode};
use serde_json::{Value, json};
use courier_options::Method;
use courier_options::methods::*;
use courier_options::options::{
    AudioOptions, BaseOptions, CommandOptions, MessageOptions, MessageTextOptions, PollOptions,
};
use courier_types::{
    BotCommand, BotCommandScope, ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup,
    InputFile, InputMedia, InputMediaKind, MessageTarget, ParseMode, ReplyKeyboardRemove,
};

fn text(s: &str) -> Option<WireValue<'static>> {
    Some(WireValue::Text(s.to_owned()))
}

fn json_of(value: Option<&WireValue<'_>>) -> Value {
    let text = value.and_then(WireValue::as_str).expect("missing key");
    serde_json::from_str(text).unwrap()
}

fn keys<T: OptionSet>(value: &T) -> Vec<&'static str> {
    encode(value).unwrap().iter().map(|(k, _)| *k).collect()
}

// ── Names and tables ──────────────────────────────────────────────────────────

#[test]
fn method_names() {
    assert_eq!(GetUpdates::NAME, "getUpdates");
    assert_eq!(SendVideoNote::NAME, "sendVideoNote");
    assert_eq!(EditMessageReplyMarkup::NAME, "editMessageReplyMarkup");
    assert_eq!(DeleteMyCommands::NAME, "deleteMyCommands");
}

#[test]
fn every_method_table_builds() {
    let tables = [
        GetUpdates::schema(), SetWebhook::schema(), SendMessage::schema(),
        ForwardMessage::schema(), CopyMessage::schema(), SendPhoto::schema(),
        SendAudio::schema(), SendDocument::schema(), SendVideo::schema(),
        SendAnimation::schema(), SendVoice::schema(), SendVideoNote::schema(),
        SendMediaGroup::schema(), SendLocation::schema(), SendVenue::schema(),
        SendContact::schema(), SendPoll::schema(), SendDice::schema(),
        SendChatAction::schema(), AnswerCallbackQuery::schema(), EditMessageText::schema(),
        EditMessageCaption::schema(), EditMessageMedia::schema(),
        EditMessageReplyMarkup::schema(), SetMyCommands::schema(), GetMyCommands::schema(),
        DeleteMyCommands::schema(),
    ];
    for table in tables {
        assert!(!table.is_empty(), "{} has no fields", table.name());
    }
}

// ── Send calls ────────────────────────────────────────────────────────────────

#[test]
fn bare_message_sends_only_required_fields() {
    let call = SendMessage::new(ChatId::from("@news"), "hello");
    let mapping = encode(&call).unwrap();
    assert_eq!(keys(&call), ["chat_id", "text"]);
    assert_eq!(mapping.get("chat_id").cloned(), text("@news"));
}

#[test]
fn silent_message_adds_one_flag() {
    let call = SendMessage::new(7i64, "hi").options(MessageOptions {
        base: BaseOptions::default().silent(true),
        ..Default::default()
    });
    let mapping = encode(&call).unwrap();
    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get("disable_notification").cloned(), text("true"));
}

#[test]
fn message_options_builders() {
    let opts = MessageOptions::default().parse_mode(ParseMode::Html).no_webpage(true).reply_to(12);
    let mapping = encode(&opts).unwrap();
    assert_eq!(mapping.get("parse_mode").cloned(), text("HTML"));
    assert_eq!(mapping.get("disable_web_page_preview").cloned(), text("true"));
    assert_eq!(mapping.get("reply_to_message_id").cloned(), text("12"));
}

#[test]
fn remove_keyboard_markup() {
    let call = SendMessage::new(7i64, "bye")
        .options(MessageOptions::default().reply_markup(ReplyKeyboardRemove::default()));
    let mapping = encode(&call).unwrap();
    assert_eq!(
        mapping.get("reply_markup"),
        Some(&WireValue::Json(r#"{"remove_keyboard":true,"selective":false}"#.into()))
    );
}

#[test]
fn audio_with_in_memory_thumb() {
    let call = SendAudio::new(1i64, InputFile::id("CQACAgI")).options(AudioOptions {
        title: "Song".into(),
        thumb: Some(InputFile::bytes("thumb.jpg", vec![0; 10])),
        ..Default::default()
    });
    let mapping = encode(&call).unwrap();
    assert_eq!(keys(&call), ["chat_id", "audio", "title", "thumb"]);
    assert_eq!(mapping.get("audio").cloned(), text("CQACAgI"));
    assert_eq!(mapping.part_count(), 1);
}

#[test]
fn location_coordinates_are_decimal() {
    let call = SendLocation::new(1i64, 51.5, -0.125);
    let mapping = encode(&call).unwrap();
    assert_eq!(mapping.get("latitude").cloned(), text("51.5"));
    assert_eq!(mapping.get("longitude").cloned(), text("-0.125"));
}

#[test]
fn zero_coordinates_are_still_sent() {
    let call = SendLocation::new(1i64, 0.0, 10.5);
    let mapping = encode(&call).unwrap();
    assert_eq!(keys(&call), ["chat_id", "latitude", "longitude"]);
    assert_eq!(mapping.get("latitude").cloned(), text("0"));

    let venue = SendVenue::new(1i64, 51.48, 0.0, "Observatory", "Greenwich");
    assert_eq!(encode(&venue).unwrap().get("longitude").cloned(), text("0"));
}

#[test]
fn quiz_sends_first_answer_index() {
    let call = SendPoll::new(1i64, "2+2?", vec!["4".to_owned(), "5".to_owned()])
        .options(PollOptions::quiz(0));
    let mapping = encode(&call).unwrap();
    assert_eq!(mapping.get("options"), Some(&WireValue::Json(r#"["4","5"]"#.into())));
    assert_eq!(mapping.get("type").cloned(), text("quiz"));
    assert_eq!(mapping.get("correct_option_id").cloned(), text("0"));
    assert!(mapping.get("is_anonymous").is_none());
}

#[test]
fn public_poll_sends_explicit_false() {
    let opts = PollOptions { is_anonymous: Some(false), ..Default::default() };
    assert_eq!(encode(&opts).unwrap().get("is_anonymous").cloned(), text("false"));
}

#[test]
fn chat_action_uses_wire_name() {
    let call = SendChatAction::new(1i64, ChatAction::UploadPhoto);
    assert_eq!(encode(&call).unwrap().get("action").cloned(), text("upload_photo"));
}

#[test]
fn media_group_is_json() {
    let call = SendMediaGroup::new(1i64, vec![
        InputMedia::new(InputMediaKind::Photo, "AgAD1").caption("one"),
        InputMedia::new(InputMediaKind::Photo, "AgAD2"),
    ]);
    let mapping = encode(&call).unwrap();
    assert!(matches!(mapping.get("media"), Some(WireValue::Json(_))));
    assert_eq!(
        json_of(mapping.get("media")),
        json!([
            { "type": "photo", "media": "AgAD1", "caption": "one" },
            { "type": "photo", "media": "AgAD2" }
        ])
    );
}

// ── Edits ─────────────────────────────────────────────────────────────────────

#[test]
fn edit_text_in_chat() {
    let call = EditMessageText::new(MessageTarget::chat(-100, 9), "new text");
    assert_eq!(keys(&call), ["chat_id", "message_id", "text"]);
}

#[test]
fn edit_text_inline_with_keyboard() {
    let kb = InlineKeyboardMarkup::from(InlineKeyboardButton::callback("Undo", "undo"));
    let call = EditMessageText::new(MessageTarget::inline("AAAB"), "done").options(
        MessageTextOptions { reply_markup: Some(kb), ..Default::default() },
    );
    let mapping = encode(&call).unwrap();
    assert_eq!(keys(&call), ["inline_message_id", "text", "reply_markup"]);
    assert_eq!(
        mapping.get("reply_markup").and_then(WireValue::as_str),
        Some(r#"{"inline_keyboard":[[{"text":"Undo","callback_data":"undo"}]]}"#)
    );
}

#[test]
fn edit_with_empty_target_is_rejected() {
    let call = EditMessageCaption::new(MessageTarget::chat(5, 0));
    assert!(matches!(encode(&call), Err(ConfigurationError::InvalidTarget(_))));
}

#[test]
fn edit_media_without_markup() {
    let call = EditMessageMedia::new(
        MessageTarget::inline("AAAB"),
        InputMedia::new(InputMediaKind::Video, "https://example.org/v.mp4"),
        None::<InlineKeyboardMarkup>,
    );
    assert_eq!(keys(&call), ["inline_message_id", "media"]);
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[test]
fn command_scope_is_json() {
    let call = SetMyCommands::new(vec![BotCommand::new("start", "Start the bot")]).options(
        CommandOptions {
            scope: Some(BotCommandScope::AllPrivateChats),
            language_code: "en".into(),
        },
    );
    let mapping = encode(&call).unwrap();
    assert_eq!(
        json_of(mapping.get("commands")),
        json!([{ "command": "start", "description": "Start the bot" }])
    );
    assert_eq!(json_of(mapping.get("scope")), json!({ "type": "all_private_chats" }));
    assert_eq!(mapping.get("language_code").cloned(), text("en"));
}

#[test]
fn get_commands_without_options_is_empty() {
    assert!(encode(&GetMyCommands::new()).unwrap().is_empty());
}

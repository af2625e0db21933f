use std::path::PathBuf;

use courier_encoder::{encode, option_set};
use courier_request::{Config, RecordingTransport, RequestBuilder, Transport, TransportPrepError};
use courier_types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ReplyMarkup};

option_set! {
    #[derive(Default)]
    struct Upload {
        chat_id:      i64 => Scalar("chat_id"),
        caption:      String => Scalar("caption"),
        reply_markup: Option<ReplyMarkup> => Markup("reply_markup"),
        thumb:        Option<InputFile> => File("thumb"),
    }
}

fn fixed() -> RequestBuilder {
    RequestBuilder::new(Config::default().fixed_boundary("XyZ"))
}

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("courier-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

// ── URL-encoded ───────────────────────────────────────────────────────────────

#[test]
fn no_parts_gives_url_encoded_body() {
    let opts = Upload { chat_id: 42, caption: "a b&c".into(), ..Default::default() };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();
    assert_eq!(payload.content_type, "application/x-www-form-urlencoded");
    assert!(!payload.is_multipart());
    assert_eq!(payload.body, b"chat_id=42&caption=a+b%26c");
}

#[test]
fn remote_file_id_stays_url_encoded() {
    let opts = Upload { thumb: Some(InputFile::id("AAQC")), ..Default::default() };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();
    assert_eq!(payload.body, b"thumb=AAQC");
}

#[test]
fn json_values_round_trip_through_form_encoding() {
    let markup: ReplyMarkup =
        InlineKeyboardMarkup::from(InlineKeyboardButton::callback("Go", "go")).into();
    let opts = Upload { reply_markup: Some(markup), ..Default::default() };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&payload.body)
        .into_owned()
        .collect();
    assert_eq!(
        pairs,
        [(
            "reply_markup".to_owned(),
            r#"{"inline_keyboard":[[{"text":"Go","callback_data":"go"}]]}"#.to_owned()
        )]
    );
}

// ── Multipart ─────────────────────────────────────────────────────────────────

#[test]
fn in_memory_thumb_becomes_single_binary_part() {
    let opts = Upload {
        caption: "cover".into(),
        thumb: Some(InputFile::bytes("thumb.jpg", b"0123456789".to_vec())),
        ..Default::default()
    };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();

    assert_eq!(payload.content_type, "multipart/form-data; boundary=XyZ");
    let expected = "--XyZ\r\n\
        Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
        cover\r\n\
        --XyZ\r\n\
        Content-Disposition: form-data; name=\"thumb\"; filename=\"thumb.jpg\"\r\n\
        Content-Type: image/jpeg\r\n\r\n\
        0123456789\r\n\
        --XyZ--\r\n";
    assert_eq!(String::from_utf8(payload.body).unwrap(), expected);
}

#[test]
fn multipart_output_is_reproducible_with_fixed_boundary() {
    let opts = Upload {
        chat_id: -5,
        thumb: Some(InputFile::bytes("a.bin", vec![0, 159, 146, 150])),
        ..Default::default()
    };
    let mapping = encode(&opts).unwrap();
    let builder = fixed();
    assert_eq!(builder.build(&mapping).unwrap(), builder.build(&mapping).unwrap());
}

#[test]
fn unknown_extension_is_octet_stream() {
    let opts = Upload {
        thumb: Some(InputFile::bytes("blob", vec![1, 2, 3])),
        ..Default::default()
    };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();
    let body = String::from_utf8_lossy(&payload.body);
    assert!(body.contains("Content-Type: application/octet-stream\r\n"));
}

#[test]
fn local_file_is_read_at_build_time() {
    let path = temp_file("note.txt", b"hello");
    let opts = Upload { thumb: Some(InputFile::path(&path)), ..Default::default() };
    let mapping = encode(&opts).unwrap();
    let payload = fixed().build(&mapping).unwrap();
    std::fs::remove_file(&path).unwrap();

    let body = String::from_utf8(payload.body).unwrap();
    let filename = path.file_name().unwrap().to_string_lossy();
    assert!(body.contains(&format!("filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\nhello\r\n")));
}

#[test]
fn missing_file_fails_only_when_building() {
    let path = std::env::temp_dir().join("courier-does-not-exist.png");
    let opts = Upload { thumb: Some(InputFile::path(&path)), ..Default::default() };
    let mapping = encode(&opts).expect("encoding never touches the filesystem");
    let err = fixed().build(&mapping).unwrap_err();
    match err {
        TransportPrepError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn oversized_part_is_rejected() {
    let opts = Upload {
        thumb: Some(InputFile::bytes("big.bin", vec![0; 10])),
        ..Default::default()
    };
    let builder = RequestBuilder::new(Config::default().fixed_boundary("b").max_part_size(Some(4)));
    let err = builder.build(&encode(&opts).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        TransportPrepError::TooLarge { size: 10, limit: 4, ref name } if name == "big.bin"
    ));
}

#[test]
fn random_boundaries_differ() {
    let opts = Upload { thumb: Some(InputFile::bytes("x", vec![1])), ..Default::default() };
    let mapping = encode(&opts).unwrap();
    let builder = RequestBuilder::default();
    let a = builder.build(&mapping).unwrap();
    let b = builder.build(&mapping).unwrap();
    assert_ne!(a.content_type, b.content_type);
}

// ── Transport ─────────────────────────────────────────────────────────────────

#[test]
fn recording_transport_keeps_requests() {
    let opts = Upload { chat_id: 1, ..Default::default() };
    let payload = fixed().build(&encode(&opts).unwrap()).unwrap();

    let mut transport = RecordingTransport::default();
    let response = transport.send("sendPhoto", &payload).unwrap();
    assert_eq!(response, br#"{"ok":true,"result":true}"#);
    assert_eq!(transport.sent().len(), 1);
    let (method, sent) = transport.last().unwrap();
    assert_eq!(method, "sendPhoto");
    assert_eq!(sent, &payload);
}

use std::error::Error as _;

use courier::methods::{EditMessageCaption, SendDocument, SendMessage};
use courier::options::{DocumentOptions, MessageOptions};
use courier::{Config, Error, InputFile, MessageTarget, RecordingTransport, prepare, send};

#[test]
fn text_call_is_url_encoded() {
    let call = SendMessage::new(42i64, "a b&c").options(MessageOptions::default().silent(true));
    let (method, payload) = prepare(&call, &Config::default()).unwrap();
    assert_eq!(method, "sendMessage");
    assert_eq!(payload.content_type, "application/x-www-form-urlencoded");
    assert_eq!(payload.body, b"chat_id=42&text=a+b%26c&disable_notification=true");
}

#[test]
fn upload_is_multipart_with_fixed_boundary() {
    let call = SendDocument::new(1i64, InputFile::bytes("notes.txt", b"hi".to_vec()))
        .options(DocumentOptions::default().caption("c"));
    let (method, payload) = prepare(&call, &Config::default().fixed_boundary("XyZ")).unwrap();
    assert_eq!(method, "sendDocument");
    assert_eq!(payload.content_type, "multipart/form-data; boundary=XyZ");
    let body = String::from_utf8(payload.body).unwrap();
    assert!(body.contains("name=\"document\"; filename=\"notes.txt\"\r\nContent-Type: text/plain\r\n\r\nhi\r\n"));
    assert!(body.ends_with("--XyZ--\r\n"));
}

#[test]
fn invalid_parameters_surface_as_configuration_error() {
    let call = EditMessageCaption::new(MessageTarget::chat(5, 0));
    let err = prepare(&call, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().starts_with("invalid parameters: "));
    assert!(err.source().is_some());
}

#[test]
fn missing_file_surfaces_as_prepare_error() {
    let call = SendDocument::new(1i64, InputFile::path("/definitely/not/here.pdf"));
    let err = prepare(&call, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Prepare(_)));
}

#[test]
fn send_hands_payload_to_transport() {
    let mut transport = RecordingTransport::new(br#"{"ok":true}"#.to_vec());
    let reply = send(&mut transport, &SendMessage::new("@chan", "hi"), &Config::default()).unwrap();
    assert_eq!(reply, br#"{"ok":true}"#);
    let (method, payload) = transport.last().unwrap();
    assert_eq!(method, "sendMessage");
    assert_eq!(payload.body, b"chat_id=%40chan&text=hi");
}

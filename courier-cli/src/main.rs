//! courier: print the request a Bot API call would send.
//!
//! ```text
//! cargo run -p courier-cli                  # sendPhoto with in-memory bytes
//! cargo run -p courier-cli -- ./cat.jpg     # sendPhoto with a local file
//! cargo run -p courier-cli -- AgACAgIAAxk   # sendPhoto with a remote file ID
//! ```
//!
//! Environment:
//! - `COURIER_BOUNDARY`      fixed multipart boundary (random when unset)
//! - `COURIER_MAX_PART_SIZE` per-file limit in bytes, `0` disables it

use std::path::Path;

use courier::methods::{SendMessage, SendPhoto};
use courier::options::PhotoOptions;
use courier::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use courier::{Config, InputFile, ParseMode, RecordingTransport, Transport, prepare};

fn main() {
    let filter = "courier=debug,courier_encoder=debug,courier_request=debug";
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    if let Err(e) = run() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_env()?;

    let photo = match std::env::args().nth(1) {
        Some(arg) if Path::new(&arg).exists() => InputFile::path(arg),
        Some(arg) => InputFile::id(arg),
        None      => InputFile::bytes("pixel.png", PIXEL.to_vec()),
    };

    let keyboard = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("👍", "like"),
        InlineKeyboardButton::url("Source", "https://core.telegram.org/bots/api#sendphoto"),
    ]]);

    let photo_call = SendPhoto::new(-1001234567890i64, photo).options(
        PhotoOptions::default()
            .caption("*Hello* from courier")
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(keyboard),
    );
    let text_call = SendMessage::new("@courier_demo", "plain text, no options");

    let mut transport = RecordingTransport::default();
    for (method, payload) in [prepare(&photo_call, &config)?, prepare(&text_call, &config)?] {
        println!("POST /bot<token>/{method}");
        println!("Content-Type: {}", payload.content_type);
        println!("Content-Length: {}\n", payload.body.len());
        println!("{}\n", String::from_utf8_lossy(&payload.body));
        transport.send(method, &payload)?;
    }

    println!("✅ {} request(s) prepared", transport.sent().len());
    Ok(())
}

fn config_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::default();
    if let Ok(boundary) = std::env::var("COURIER_BOUNDARY") {
        config = config.fixed_boundary(boundary);
    }
    if let Ok(limit) = std::env::var("COURIER_MAX_PART_SIZE") {
        let limit: u64 = limit
            .parse()
            .map_err(|e| format!("COURIER_MAX_PART_SIZE={limit:?}: {e}"))?;
        config = config.max_part_size((limit > 0).then_some(limit));
    }
    Ok(config)
}

// 1×1 transparent PNG.
const PIXEL: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

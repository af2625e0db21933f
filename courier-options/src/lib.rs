//! # courier-options
//!
//! Option sets and method parameter bundles for the Telegram Bot API.
//!
//! ## Contents
//! - [`options`]: the optional parameters of each call, grouped the way the
//!   Bot API shares them (`BaseOptions` is embedded by every `send*` set)
//! - [`methods`]: one struct per remote call, required parameters first,
//!   then the call's option set; each implements [`Method`]
//!
//! Every type here is an [`OptionSet`], so it goes straight into
//! [`courier_encoder::encode`].
//!
//! ```rust
//! use courier_encoder::{encode, WireValue};
//! use courier_options::{methods::SendMessage, options::MessageOptions, Method};
//! use courier_types::ParseMode;
//!
//! let call = SendMessage::new(-100123i64, "*hi*")
//!     .options(MessageOptions::default().parse_mode(ParseMode::MarkdownV2).silent(true));
//! assert_eq!(SendMessage::NAME, "sendMessage");
//!
//! let mapping = encode(&call).unwrap();
//! assert_eq!(mapping.get("parse_mode"), Some(&WireValue::Text("MarkdownV2".into())));
//! ```

#![deny(unsafe_code)]

pub mod methods;
pub mod options;

pub use courier_encoder::OptionSet;
pub use methods::Method;

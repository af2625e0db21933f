//! Turns a typed options bundle into an ordered wire mapping.
//!
//! Every options type owns a [`Schema`]: a flat, read-only table of
//! `(wire key, kind)` descriptors built once on first use. Embedded option
//! groups are spliced into that table when it is built, so the encoder
//! never nests or prefixes keys, and a key declared twice is rejected
//! before anything is encoded.
//!
//! | Kind        | Zero value        | Encoded as                          |
//! |-------------|-------------------|-------------------------------------|
//! | `Scalar`    | `0`, `false`, `""`, `None` | decimal / `true` / text    |
//! | `Required`  | never omitted     | same as `Scalar`                    |
//! | `Composite` | empty `Vec`, `None` | JSON text                         |
//! | `Markup`    | `None`            | JSON text of the populated variant  |
//! | `File`      | `None`            | file ID text, or a pending part     |
//! | `Recursive` | (flattened)       | the group's own keys, same level    |
//!
//! # Declaring an options type
//!
//! ```rust
//! use courier_encoder::{encode, option_set, WireValue};
//!
//! option_set! {
//!     /// Shared flags.
//!     #[derive(Clone, Debug, Default)]
//!     pub struct Flags {
//!         pub disable_notification: bool => Scalar("disable_notification"),
//!     }
//! }
//!
//! option_set! {
//!     /// Options for a hypothetical call.
//!     #[derive(Clone, Debug, Default)]
//!     pub struct PingOptions {
//!         pub flags: Flags => Recursive,
//!         pub caption: String => Scalar("caption"),
//!     }
//! }
//!
//! let opts = PingOptions { caption: "hi".into(), ..Default::default() };
//! let mapping = encode(&opts).unwrap();
//! assert_eq!(mapping.get("caption"), Some(&WireValue::Text("hi".into())));
//! assert!(mapping.get("disable_notification").is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod encoder;
mod errors;
mod macros;
mod markup;
mod resolver;
mod schema;
mod target;
mod value;

pub mod kind;

pub use encoder::{WireMapping, WireValue, encode};
pub use errors::ConfigurationError;
pub use kind::Slot;
pub use markup::encode_markup;
pub use resolver::{PartSource, PendingPart, Resolved, resolve};
pub use schema::{FieldDescriptor, FieldKind, OptionSet, Schema, SchemaBuilder};
pub use value::{AsFile, AsMarkup, CompositeValue, FieldValue, ScalarValue};


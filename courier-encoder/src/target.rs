//! [`MessageTarget`] as an embeddable option group.

use std::sync::LazyLock;

use courier_types::MessageTarget;

use crate::errors::ConfigurationError;
use crate::schema::{OptionSet, Schema};
use crate::value::FieldValue;

// Both sides are declared; the unpopulated one reports `Absent`.
impl OptionSet for MessageTarget {
    fn schema() -> &'static Schema {
        static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
            Schema::builder("MessageTarget")
                .scalar("chat_id")
                .scalar("message_id")
                .scalar("inline_message_id")
                .build()
                .unwrap_or_else(|e| panic!("invalid option schema: {e}"))
        });
        &SCHEMA
    }

    fn collect<'a>(&'a self, out: &mut Vec<FieldValue<'a>>) {
        match self {
            MessageTarget::Chat { chat_id, message_id } => {
                out.push(FieldValue::Scalar(chat_id));
                out.push(FieldValue::Scalar(message_id));
                out.push(FieldValue::Absent);
            }
            MessageTarget::Inline { inline_message_id } => {
                out.push(FieldValue::Absent);
                out.push(FieldValue::Absent);
                out.push(FieldValue::Scalar(inline_message_id));
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        MessageTarget::validate(self).map_err(ConfigurationError::InvalidTarget)
    }
}

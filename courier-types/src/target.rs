//! Addressing an existing message for edits.

use crate::errors::UnionError;

const UNION: &str = "MessageTarget";

/// The message an edit call applies to: a message in a chat, or a message
/// sent via the bot in inline mode. Never both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageTarget {
    /// A message the bot can see in a chat.
    Chat {
        #[allow(missing_docs)]
        chat_id: i64,
        #[allow(missing_docs)]
        message_id: i32,
    },
    /// A message sent through inline mode.
    Inline {
        #[allow(missing_docs)]
        inline_message_id: String,
    },
}

impl MessageTarget {
    /// Address `message_id` in `chat_id`.
    pub fn chat(chat_id: i64, message_id: i32) -> Self {
        Self::Chat { chat_id, message_id }
    }

    /// Address an inline message.
    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline { inline_message_id: inline_message_id.into() }
    }

    /// Build from the loose form where either side may be present.
    ///
    /// Zero IDs and empty strings count as absent.
    pub fn from_parts(
        chat:              Option<(i64, i32)>,
        inline_message_id: Option<String>,
    ) -> Result<Self, UnionError> {
        let chat   = chat.filter(|&(chat_id, message_id)| chat_id != 0 && message_id != 0);
        let inline = inline_message_id.filter(|id| !id.is_empty());

        match (chat, inline) {
            (Some((chat_id, message_id)), None) => Ok(Self::Chat { chat_id, message_id }),
            (None, Some(inline_message_id))     => Ok(Self::Inline { inline_message_id }),
            (None, None)                        => Err(UnionError::Neither { union: UNION }),
            (Some(_), Some(_))                  => Err(UnionError::Both { union: UNION }),
        }
    }

    /// Reject a populated side that holds only zero values.
    pub fn validate(&self) -> Result<(), UnionError> {
        let empty = match self {
            Self::Chat { chat_id, message_id } => *chat_id == 0 || *message_id == 0,
            Self::Inline { inline_message_id } => inline_message_id.is_empty(),
        };
        if empty {
            return Err(UnionError::Neither { union: UNION });
        }
        Ok(())
    }
}

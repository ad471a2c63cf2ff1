//! Inbound chat message.

use serde::{Deserialize, Serialize};

/// A chat message as the host passes it to the stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    /// Raw message text.
    pub content: String,
    /// Sender's anonymized id. Read for logging only.
    pub anonymized_id: String,
    /// Character the reply is being generated for, if any.
    pub prompt_for_id: Option<String>,
}

impl Message {
    /// A message with the given text and sender.
    pub fn new(content: impl Into<String>, anonymized_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            anonymized_id: anonymized_id.into(),
            prompt_for_id: None,
        }
    }
}

//! Replies handed back to the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The stage's answer to one message hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageResponse {
    /// Director note for the response generator.
    pub stage_directions: Option<String>,
    /// Freshly serialized game state.
    pub message_state: Value,
    /// Replacement for the triggering message. Always `None` here.
    pub modified_message: Option<String>,
    /// Visible system message, e.g. the board.
    pub system_message: Option<String>,
    /// Error shown to the user. Always `None` here.
    pub error: Option<String>,
    /// Chat-wide state. Unused.
    pub chat_state: Option<Value>,
}

/// The stage's answer to the host's load hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    /// Whether the stage is ready.
    pub success: bool,
    /// Load failure message.
    pub error: Option<String>,
    /// Initial state. Unused.
    pub init_state: Option<Value>,
    /// Chat-wide state. Unused.
    pub chat_state: Option<Value>,
}

impl Default for LoadResponse {
    fn default() -> Self {
        Self {
            success: true,
            error: None,
            init_state: None,
            chat_state: None,
        }
    }
}

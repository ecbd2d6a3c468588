use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum number of messages kept in the assistant memory.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiMemory {
    pub conversation_history: Vec<ChatMessage>,
    pub last_interaction: Option<i64>,
    pub user_preferences: Map<String, Value>,
}

impl AiMemory {
    pub fn record(&mut self, role: ChatRole, content: &str, timestamp: i64) {
        self.conversation_history.push(ChatMessage {
            role,
            content: content.to_string(),
            timestamp,
        });

        if role == ChatRole::User {
            self.last_interaction = Some(timestamp);
        }

        let len = self.conversation_history.len();
        if len > HISTORY_LIMIT {
            self.conversation_history.drain(..len - HISTORY_LIMIT);
        }
    }
}

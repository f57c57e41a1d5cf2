//! Conversation model

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message of a conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The last `limit` messages of `history`
pub fn recent_history(history: &[ChatMessage], limit: usize) -> &[ChatMessage] {
    let start = history.len().saturating_sub(limit);
    &history[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatMessage::assistant("Salutations")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"Salutations"}"#);

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"Bonjour"}"#).unwrap();
        assert_eq!(parsed, ChatMessage::user("Bonjour"));
    }

    #[test]
    fn test_recent_history_keeps_tail() {
        let history: Vec<ChatMessage> = (0..25).map(|i| ChatMessage::user(i.to_string())).collect();
        let recent = recent_history(&history, 20);
        assert_eq!(recent.len(), 20);
        assert_eq!(recent[0].content, "5");
        assert_eq!(recent[19].content, "24");

        assert_eq!(recent_history(&history[..3], 20).len(), 3);
    }
}

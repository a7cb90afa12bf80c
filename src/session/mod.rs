//! Session state for the chat client.
//!
//! Models the conversation the user is having about one video: who said
//! what, which video is active, and whether a request is in flight.

mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore, HISTORY_KEY, VIDEO_ID_KEY};

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

/// A single chat message. Immutable once appended to the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// In-memory session state.
///
/// `chat_history` is append-only and mirrors display order. `is_processing`
/// is runtime-only and never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_video_id: Option<String>,
    pub chat_history: Vec<ChatMessage>,
    pub is_processing: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything, back to a freshly created session.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), r#""model""#);
    }

    #[test]
    fn test_message_roundtrip() {
        let msg = ChatMessage::model("The video covers Rust lifetimes.");
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SessionState::new();
        state.current_video_id = Some("dQw4w9WgXcQ".to_string());
        state.chat_history.push(ChatMessage::user("hi"));
        state.is_processing = true;

        state.clear();

        assert!(state.current_video_id.is_none());
        assert!(state.chat_history.is_empty());
        assert!(!state.is_processing);
    }
}

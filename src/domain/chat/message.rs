//! Chat turns and the trailing history window sent to the model.

use serde::{Deserialize, Serialize};

use super::Persona;
use crate::domain::foundation::{Stored, ValidationError};
use crate::domain::safety::RiskLevel;

/// Maximum prior turns included as model context.
pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl ChatMessage {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `content` is blank.
    pub fn user(content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            role: ChatRole::User,
            content,
            persona: None,
            risk_level: None,
        })
    }

    pub fn assistant(content: impl Into<String>, persona: Persona, risk_level: RiskLevel) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            persona: Some(persona),
            risk_level: Some(risk_level),
        }
    }
}

/// Returns the trailing `window` turns in chronological order.
///
/// Input may be in any order; it is sorted oldest first by creation time.
pub fn history_window(mut messages: Vec<Stored<ChatMessage>>, window: usize) -> Vec<ChatMessage> {
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    let skip = messages.len().saturating_sub(window);
    messages.into_iter().skip(skip).map(|m| m.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RecordId, Timestamp};
    use proptest::prelude::*;

    fn stored(n: i64) -> Stored<ChatMessage> {
        let msg = ChatMessage::user(format!("turn {}", n)).unwrap();
        Stored::new(RecordId::new(), Timestamp::now().plus_secs(n), msg)
    }

    #[test]
    fn blank_user_message_is_rejected() {
        assert_eq!(
            ChatMessage::user("  \n").unwrap_err(),
            ValidationError::empty_field("content")
        );
    }

    #[test]
    fn assistant_message_carries_persona_and_risk() {
        let msg = ChatMessage::assistant("hi", Persona::Peer, RiskLevel::Moderate);
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.persona, Some(Persona::Peer));
        assert_eq!(msg.risk_level, Some(RiskLevel::Moderate));
    }

    #[test]
    fn window_keeps_newest_turns_oldest_first() {
        let messages: Vec<_> = (0..15).rev().map(stored).collect();
        let window = history_window(messages, HISTORY_WINDOW);
        assert_eq!(window.len(), HISTORY_WINDOW);
        assert_eq!(window[0].content, "turn 5");
        assert_eq!(window[9].content, "turn 14");
    }

    #[test]
    fn short_history_is_returned_whole() {
        let window = history_window(vec![stored(0), stored(1)], HISTORY_WINDOW);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::user("hey").unwrap()).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("persona").is_none());
    }

    proptest! {
        #[test]
        fn window_never_exceeds_limit(n in 0usize..40, window in 0usize..15) {
            let messages: Vec<_> = (0..n as i64).map(stored).collect();
            let out = history_window(messages, window);
            prop_assert!(out.len() <= window);
            prop_assert_eq!(out.len(), n.min(window));
        }
    }
}

//! HTTP DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::SendChatMessageResult;
use crate::domain::chat::{ChatMessage, ChatRole, Persona};
use crate::domain::foundation::{Stored, Timestamp};
use crate::domain::safety::{CrisisResource, InterventionLevel, RiskLevel};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to send a chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    /// Defaults to the therapist persona.
    #[serde(default)]
    pub persona: Persona,
}

/// Query parameters for chat history.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One stored chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    pub created_at: Timestamp,
}

impl From<Stored<ChatMessage>> for ChatMessageResponse {
    fn from(stored: Stored<ChatMessage>) -> Self {
        Self {
            id: stored.id.to_string(),
            role: stored.item.role,
            content: stored.item.content,
            persona: stored.item.persona,
            risk_level: stored.item.risk_level,
            created_at: stored.created_at,
        }
    }
}

/// Reply to a sent message.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub user_message: ChatMessageResponse,
    pub reply: ChatMessageResponse,
    pub risk_level: RiskLevel,
    pub intervention_level: InterventionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f32>,
    /// Empty unless the message needs intervention.
    pub crisis_resources: Vec<CrisisResource>,
    pub used_fallback: bool,
}

impl From<SendChatMessageResult> for SendMessageResponse {
    fn from(result: SendChatMessageResult) -> Self {
        Self {
            user_message: result.user_message.into(),
            reply: result.assistant_message.into(),
            risk_level: result.assessment.risk_level(),
            intervention_level: result.assessment.intervention_level(),
            sentiment_score: result.assessment.sentiment_score(),
            crisis_resources: result.crisis_resources,
            used_fallback: result.used_fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatHistoryResponse {
    /// Oldest first.
    pub messages: Vec<ChatMessageResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearHistoryResponse {
    pub removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_defaults_persona() {
        let req: SendMessageRequest = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert_eq!(req.persona, Persona::Therapist);

        let req: SendMessageRequest =
            serde_json::from_str(r#"{"content": "hi", "persona": "peer"}"#).unwrap();
        assert_eq!(req.persona, Persona::Peer);
    }

    #[test]
    fn user_turn_omits_persona_and_risk() {
        let stored = Stored::new(
            crate::domain::foundation::RecordId::new(),
            Timestamp::now(),
            ChatMessage::user("hello").unwrap(),
        );
        let json = serde_json::to_value(ChatMessageResponse::from(stored)).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("persona").is_none());
        assert!(json.get("risk_level").is_none());
    }
}

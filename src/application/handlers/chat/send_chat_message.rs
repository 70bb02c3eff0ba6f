//! SendChatMessage command handler.

use std::sync::Arc;

use crate::application::companion::Companion;
use crate::domain::chat::{history_window, ChatMessage, Persona};
use crate::domain::foundation::Stored;
use crate::domain::safety::{
    follow_up_message, CrisisResource, ModelRiskReading, RiskAssessment, RiskScreen,
    CONNECTION_FALLBACK_MESSAGE, CRISIS_RESOURCES,
};
use crate::ports::{load_items, save_item, RecordFilter, RecordStore};

use super::ChatError;

/// Command to send one user message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub content: String,
    pub persona: Persona,
}

/// Outcome of a chat exchange.
#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub user_message: Stored<ChatMessage>,
    pub assistant_message: Stored<ChatMessage>,
    pub assessment: RiskAssessment,
    /// Populated only when the assessment requires intervention.
    pub crisis_resources: Vec<CrisisResource>,
    /// True when the companion failed and the connection fallback was sent.
    pub used_fallback: bool,
}

/// Handler for sending chat messages.
pub struct SendChatMessageHandler {
    store: Arc<dyn RecordStore>,
    risk_screen: Arc<RiskScreen>,
    companion: Companion,
    history_window: usize,
}

impl SendChatMessageHandler {
    pub fn new(
        store: Arc<dyn RecordStore>,
        risk_screen: Arc<RiskScreen>,
        companion: Companion,
        history_window: usize,
    ) -> Self {
        Self {
            store,
            risk_screen,
            companion,
            history_window,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, ChatError> {
        // 1. Validate and persist the user's turn
        let user_message = ChatMessage::user(cmd.content)?;
        let user_message = save_item(self.store.as_ref(), &user_message).await?;
        let content = user_message.item.content.as_str();

        // 2. Screen locally, then fold in the model's reading
        let keyword_assessment = self.risk_screen.assess(content);
        let reading = match self.companion.analyze_sentiment_and_risk(content).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::warn!(error = %e, "model risk reading unavailable, assuming moderate");
                ModelRiskReading::cautious_fallback()
            }
        };
        let assessment = keyword_assessment.combined_with(&reading);

        tracing::info!(
            keyword_risk = %keyword_assessment.risk_level(),
            model_risk = %reading.risk_level,
            risk_level = %assessment.risk_level(),
            matched_keywords = assessment.matched_keywords().len(),
            "chat message screened"
        );

        // 3. Prior turns, excluding the message just saved
        let prior = load_items::<ChatMessage>(
            self.store.as_ref(),
            RecordFilter::all().limit(self.history_window + 1),
        )
        .await?
        .into_iter()
        .filter(|m| m.id != user_message.id)
        .collect();
        let history = history_window(prior, self.history_window);

        // 4. Reply, with follow-up when intervention is required
        let (reply, used_fallback) = match self
            .companion
            .empathetic_response(content, cmd.persona, &history)
            .await
        {
            Ok(reply) => (with_follow_up(reply, &assessment), false),
            Err(e) => {
                tracing::error!(error = %e, persona = %cmd.persona, "companion reply failed");
                (CONNECTION_FALLBACK_MESSAGE.to_string(), true)
            }
        };

        // 5. Persist the assistant turn tagged with persona and risk
        let assistant_message = ChatMessage::assistant(reply, cmd.persona, assessment.risk_level());
        let assistant_message = save_item(self.store.as_ref(), &assistant_message).await?;

        let crisis_resources = if assessment.requires_intervention() {
            CRISIS_RESOURCES.to_vec()
        } else {
            Vec::new()
        };

        Ok(SendChatMessageResult {
            user_message,
            assistant_message,
            assessment,
            crisis_resources,
            used_fallback,
        })
    }
}

/// Appends the follow-up for elevated risk; uses it alone if the reply is empty.
fn with_follow_up(reply: String, assessment: &RiskAssessment) -> String {
    let follow_up = if assessment.requires_intervention() {
        follow_up_message(assessment.risk_level())
    } else {
        None
    };

    match (reply.trim().is_empty(), follow_up) {
        (false, Some(follow_up)) => format!("{}\n\n{}", reply, follow_up),
        (true, Some(follow_up)) => follow_up.to_string(),
        (false, None) => reply,
        (true, None) => CONNECTION_FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError, OFFLINE_REPLY};
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::domain::chat::{ChatRole, HISTORY_WINDOW};
    use crate::domain::foundation::ValidationError;
    use crate::domain::safety::RiskLevel;
    use crate::ports::RecordKind;
    use serde_json::json;

    fn low_reading() -> serde_json::Value {
        json!({
            "sentiment_score": 6,
            "risk_level": "low",
            "emotional_indicators": ["tired"],
            "intervention_needed": "none",
            "confidence": 0.9
        })
    }

    fn handler(mock: &MockAIProvider, store: &InMemoryRecordStore) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            Arc::new(store.clone()),
            Arc::new(RiskScreen::standard()),
            Companion::new(Arc::new(mock.clone())),
            HISTORY_WINDOW,
        )
    }

    fn cmd(content: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            content: content.to_string(),
            persona: Persona::Mentor,
        }
    }

    #[tokio::test]
    async fn low_risk_exchange_stores_both_turns() {
        let mock = MockAIProvider::new()
            .with_json_response(low_reading())
            .with_response("That sounds exhausting.");
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store).handle(cmd("Long week at school")).await.unwrap();

        assert_eq!(result.assessment.risk_level(), RiskLevel::Low);
        assert_eq!(result.assessment.sentiment_score(), Some(6.0));
        assert_eq!(result.assistant_message.item.content, "That sounds exhausting.");
        assert_eq!(result.assistant_message.item.persona, Some(Persona::Mentor));
        assert!(result.crisis_resources.is_empty());
        assert!(!result.used_fallback);
        assert_eq!(store.count(RecordKind::ChatMessage).await, 2);
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_storing() {
        let mock = MockAIProvider::new();
        let store = InMemoryRecordStore::new();

        let err = handler(&mock, &store).handle(cmd("   ")).await.unwrap_err();

        assert!(matches!(
            err,
            ChatError::Validation(ValidationError::EmptyField { .. })
        ));
        assert_eq!(store.count(RecordKind::ChatMessage).await, 0);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn critical_keywords_append_follow_up_and_resources() {
        let mock = MockAIProvider::new()
            .with_json_response(low_reading())
            .with_response("I'm here with you.");
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store)
            .handle(cmd("I want to end my life"))
            .await
            .unwrap();

        assert_eq!(result.assessment.risk_level(), RiskLevel::Critical);
        let reply = &result.assistant_message.item.content;
        assert!(reply.starts_with("I'm here with you."));
        assert!(reply.ends_with(follow_up_message(RiskLevel::Critical).unwrap()));
        assert_eq!(result.crisis_resources.len(), CRISIS_RESOURCES.len());
        assert_eq!(
            result.assistant_message.item.risk_level,
            Some(RiskLevel::Critical)
        );
    }

    #[tokio::test]
    async fn model_failure_is_cautious_and_reply_falls_back() {
        let mock = MockAIProvider::new()
            .with_error(MockError::Unavailable { message: "down".into() })
            .with_error(MockError::Unavailable { message: "down".into() });
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store).handle(cmd("hello")).await.unwrap();

        assert_eq!(result.assessment.risk_level(), RiskLevel::Moderate);
        assert!(result.used_fallback);
        assert!(result.assistant_message.item.content.contains("988"));
        assert!(!result.crisis_resources.is_empty());
    }

    #[tokio::test]
    async fn offline_provider_keeps_benign_message_low() {
        let mock = MockAIProvider::offline();
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store)
            .handle(cmd("I had a nice lunch"))
            .await
            .unwrap();

        assert_eq!(result.assessment.risk_level(), RiskLevel::Low);
        assert!(result.crisis_resources.is_empty());
        assert!(!result.used_fallback);
        assert_eq!(result.assistant_message.item.content, OFFLINE_REPLY);
    }

    #[tokio::test]
    async fn offline_provider_still_escalates_on_keywords() {
        let mock = MockAIProvider::offline();
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store)
            .handle(cmd("I want to kill myself"))
            .await
            .unwrap();

        assert_eq!(result.assessment.risk_level(), RiskLevel::Critical);
        assert_eq!(result.crisis_resources.len(), CRISIS_RESOURCES.len());
    }

    #[tokio::test]
    async fn history_excludes_current_message_and_is_windowed() {
        let store = InMemoryRecordStore::new();
        for i in 0..15 {
            save_item(&store, &ChatMessage::user(format!("old {}", i)).unwrap())
                .await
                .unwrap();
        }
        let mock = MockAIProvider::new()
            .with_json_response(low_reading())
            .with_response("ok");

        handler(&mock, &store).handle(cmd("newest")).await.unwrap();

        let reply_call = &mock.get_calls()[1];
        // window + the current message
        assert_eq!(reply_call.messages.len(), HISTORY_WINDOW + 1);
        assert_eq!(reply_call.messages[HISTORY_WINDOW].content, "newest");
        assert!(reply_call.messages[..HISTORY_WINDOW]
            .iter()
            .all(|m| m.content != "newest"));
    }

    #[test]
    fn empty_reply_uses_follow_up_alone() {
        let assessment = RiskAssessment::from_keywords(RiskLevel::High, vec!["hurt myself".into()]);
        assert_eq!(
            with_follow_up(String::new(), &assessment),
            follow_up_message(RiskLevel::High).unwrap()
        );
    }

    #[test]
    fn low_risk_reply_is_unchanged() {
        assert_eq!(with_follow_up("hi".into(), &RiskAssessment::low()), "hi");
    }

    #[test]
    fn assistant_turns_are_tagged() {
        let msg = ChatMessage::assistant("x", Persona::Peer, RiskLevel::Low);
        assert_eq!(msg.role, ChatRole::Assistant);
    }
}

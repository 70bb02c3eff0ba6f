//! Companion - the language-model side of every flow.
//!
//! Each operation builds one completion request and returns a typed result.
//! Failures are reported as [`CompanionError`]; callers choose the fallback.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::cbt::{CbtInsight, ThoughtRecord};
use crate::domain::chat::{ChatMessage, ChatRole, Persona, HISTORY_WINDOW};
use crate::domain::journal::{FocusArea, MoodContext, PersonalizedPrompt};
use crate::domain::safety::ModelRiskReading;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, Message, MessageRole, ProviderInfo,
};

const CHAT_MAX_TOKENS: u32 = 500;
const CHAT_TEMPERATURE: f32 = 0.7;
const RISK_TEMPERATURE: f32 = 0.1;
const INSIGHT_TEMPERATURE: f32 = 0.6;
const PROMPT_TEMPERATURE: f32 = 0.8;

const RISK_SYSTEM_PROMPT: &str = "You screen short messages from young people for mental health risk. \
Rate overall sentiment from 1 (very negative) to 10 (very positive), the crisis risk level \
(low, moderate, high, critical), the main emotional indicators and the intervention needed \
(none, support, professional, crisis). Anything suggesting suicidal thinking, self-harm or \
immediate danger is critical.\n\
Answer with a JSON object only:\n\
{\"sentiment_score\": number, \"risk_level\": \"low|moderate|high|critical\", \
\"emotional_indicators\": [string], \"intervention_needed\": \"none|support|professional|crisis\", \
\"confidence\": number}";

const INSIGHT_SYSTEM_PROMPT: &str = "You are a CBT-informed assistant reviewing a thought record. \
Point out likely cognitive distortions, offer balanced alternative thoughts, questions that test \
the evidence and practical coping strategies. Keep the tone supportive and educational.\n\
Answer with a JSON object only:\n\
{\"cognitive_distortions\": [string], \"balanced_thoughts\": [string], \
\"evidence_challenges\": [string], \"coping_strategies\": [string], \"encouragement\": string}";

const PROMPT_SYSTEM_PROMPT: &str = "Write one journal prompt for a young person based on their recent \
mood and journaling themes. Keep it supportive and age-appropriate, and grounded in CBT ideas.\n\
Answer with a JSON object only:\n\
{\"prompt\": string, \"focus_area\": \"emotional_awareness|thought_patterns|gratitude|coping_skills|goals|relationships|daily_reflection\", \
\"follow_up_questions\": [string]}";

/// Why a companion call produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanionError {
    /// Retryable provider error or malformed model output.
    #[error("transient failure: {0}")]
    TransientFailure(String),

    /// Provider rejected the configuration (auth, request shape, quota).
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl CompanionError {
    pub fn is_transient(&self) -> bool {
        matches!(self, CompanionError::TransientFailure(_))
    }
}

impl From<AIError> for CompanionError {
    fn from(err: AIError) -> Self {
        if err.is_configuration() {
            CompanionError::ConfigurationError(err.to_string())
        } else {
            CompanionError::TransientFailure(err.to_string())
        }
    }
}

/// LLM companion service.
#[derive(Clone)]
pub struct Companion {
    provider: Arc<dyn AIProvider>,
}

impl Companion {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_info(&self) -> ProviderInfo {
        self.provider.provider_info()
    }

    /// Persona reply to `message`, with up to ten prior turns as context.
    pub async fn empathetic_response(
        &self,
        message: &str,
        persona: Persona,
        history: &[ChatMessage],
    ) -> Result<String, CompanionError> {
        let skip = history.len().saturating_sub(HISTORY_WINDOW);
        let prior = history[skip..].iter().map(|turn| match turn.role {
            ChatRole::User => Message::user(turn.content.clone()),
            ChatRole::Assistant => Message::assistant(turn.content.clone()),
        });

        let request = CompletionRequest::new()
            .with_system_prompt(persona.system_prompt())
            .with_messages(prior)
            .with_message(MessageRole::User, message)
            .with_max_tokens(CHAT_MAX_TOKENS)
            .with_temperature(CHAT_TEMPERATURE);

        let response = self.provider.complete(request).await?;
        tracing::debug!(
            persona = %persona,
            history_turns = history.len() - skip,
            completion_tokens = response.usage.completion_tokens,
            "companion reply generated"
        );
        Ok(response.content.trim().to_string())
    }

    /// Model-side sentiment and risk reading for `text`.
    pub async fn analyze_sentiment_and_risk(
        &self,
        text: &str,
    ) -> Result<ModelRiskReading, CompanionError> {
        let request = CompletionRequest::new()
            .with_system_prompt(RISK_SYSTEM_PROMPT)
            .with_message(MessageRole::User, text)
            .with_temperature(RISK_TEMPERATURE)
            .expecting_json();

        let mut reading: ModelRiskReading = self.complete_json(request).await?;
        reading.sentiment_score = reading.sentiment_score.clamp(1.0, 10.0);
        reading.confidence = reading.confidence.clamp(0.0, 1.0);
        Ok(reading)
    }

    pub async fn generate_cbt_insight(
        &self,
        record: &ThoughtRecord,
    ) -> Result<CbtInsight, CompanionError> {
        let record_json = serde_json::to_string(record)
            .map_err(|e| CompanionError::TransientFailure(format!("encode thought record: {}", e)))?;

        let request = CompletionRequest::new()
            .with_system_prompt(INSIGHT_SYSTEM_PROMPT)
            .with_message(MessageRole::User, format!("Thought record: {}", record_json))
            .with_temperature(INSIGHT_TEMPERATURE)
            .expecting_json();

        self.complete_json(request).await
    }

    pub async fn generate_journal_prompt(
        &self,
        mood: &MoodContext,
        recent_themes: &[FocusArea],
    ) -> Result<PersonalizedPrompt, CompanionError> {
        let mood_json = serde_json::to_string(mood)
            .map_err(|e| CompanionError::TransientFailure(format!("encode mood context: {}", e)))?;
        let themes = if recent_themes.is_empty() {
            "none yet".to_string()
        } else {
            recent_themes
                .iter()
                .map(FocusArea::label)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let request = CompletionRequest::new()
            .with_system_prompt(PROMPT_SYSTEM_PROMPT)
            .with_message(
                MessageRole::User,
                format!("Mood data: {}\nRecent entry themes: {}", mood_json, themes),
            )
            .with_temperature(PROMPT_TEMPERATURE)
            .expecting_json();

        let prompt: PersonalizedPrompt = self.complete_json(request).await?;
        if prompt.prompt.trim().is_empty() {
            return Err(CompanionError::TransientFailure(
                "model returned an empty prompt".to_string(),
            ));
        }
        Ok(prompt)
    }

    async fn complete_json<T: DeserializeOwned>(
        &self,
        request: CompletionRequest,
    ) -> Result<T, CompanionError> {
        let response = self.provider.complete(request).await?;
        serde_json::from_str(&response.content).map_err(|e| {
            tracing::warn!(error = %e, "model returned malformed JSON");
            CompanionError::TransientFailure(format!("malformed model output: {}", e))
        })
    }
}

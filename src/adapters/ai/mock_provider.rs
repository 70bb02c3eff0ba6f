//! Mock AI Provider for testing and offline runs.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//! - An offline mode with neutral defaults, used when no API key is set
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_json_response(serde_json::json!({"risk_level": "low"}))
//!     .with_response("That sounds like a lot to carry.");
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    ResponseFormat, TokenUsage,
};

/// Content returned once the queue is exhausted.
pub const DEFAULT_MOCK_CONTENT: &str = "Mock response";

/// Plain-text reply of the offline provider.
pub const OFFLINE_REPLY: &str =
    "I'm here and listening. Would you like to tell me more about how you're feeling?";

/// JSON answer of the offline provider: a neutral, low-risk reading.
///
/// Other JSON requests fail to parse against it and take their fallbacks.
pub const OFFLINE_JSON_REPLY: &str = r#"{"sentiment_score":5,"risk_level":"low","emotional_indicators":[],"intervention_needed":"none","confidence":0.0}"#;

/// Mock AI provider.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Used once the queue is exhausted.
    default_text: &'static str,
    /// Used instead of `default_text` for JSON-mode requests.
    default_json: Option<&'static str>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    CostLimitExceeded,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::CostLimitExceeded => AIError::cost_limit_exceeded("mock quota"),
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128_000),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
            default_text: DEFAULT_MOCK_CONTENT,
            default_json: None,
        }
    }

    /// Provider for running without a model. Replies are neutral and risk
    /// readings are low, so only the keyword screen can raise the level.
    pub fn offline() -> Self {
        Self {
            default_text: OFFLINE_REPLY,
            default_json: Some(OFFLINE_JSON_REPLY),
            ..Self::new()
        }
    }

    /// Adds a successful text response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        });
        self
    }

    /// Adds a successful response whose content is the given JSON value.
    pub fn with_json_response(self, value: serde_json::Value) -> Self {
        self.with_response(value.to_string())
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Queues a response on a shared handle.
    pub fn push(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn next_response(&self, format: ResponseFormat) -> MockResponse {
        lock(&self.responses).pop_front().unwrap_or_else(|| {
            let content = match (format, self.default_json) {
                (ResponseFormat::JsonObject, Some(json)) => json,
                _ => self.default_text,
            };
            MockResponse::Success {
                content: content.to_string(),
                finish_reason: FinishReason::Stop,
            }
        })
    }
}

// A panicking test must not wedge every other user of the mock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let format = request.response_format;
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(format) {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                usage: TokenUsage::new(10, (content.len() / 4) as u32),
                content,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, ResponseFormat};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new().with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_json_response(serde_json::json!({"n": 2}));

        let r1 = provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, r#"{"n":2}"#);
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockAIProvider::new().with_response("Only one");

        provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r2.content, DEFAULT_MOCK_CONTENT);
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request()).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider
            .complete(test_request().expecting_json())
            .await
            .unwrap();
        assert_eq!(provider.call_count(), 1);
        assert_eq!(
            provider.get_calls()[0].response_format,
            ResponseFormat::JsonObject
        );

        provider.clear_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_queue_and_history() {
        let provider = MockAIProvider::new();
        let handle = provider.clone();
        handle.push(MockResponse::Success {
            content: "shared".into(),
            finish_reason: FinishReason::Stop,
        });

        let response = provider.complete(test_request()).await.unwrap();
        assert_eq!(response.content, "shared");
        assert_eq!(handle.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new()
            .with_response("Delayed response")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn offline_provider_answers_json_requests_with_low_risk_reading() {
        let provider = MockAIProvider::offline();

        let text = provider.complete(test_request()).await.unwrap();
        let json = provider
            .complete(test_request().expecting_json())
            .await
            .unwrap();

        assert_eq!(text.content, OFFLINE_REPLY);
        let value: serde_json::Value = serde_json::from_str(&json.content).unwrap();
        assert_eq!(value["risk_level"], "low");
        assert_eq!(value["intervention_needed"], "none");
    }

    #[tokio::test]
    async fn offline_provider_still_prefers_queued_responses() {
        let provider = MockAIProvider::offline().with_response("queued");
        let response = provider
            .complete(test_request().expecting_json())
            .await
            .unwrap();
        assert_eq!(response.content, "queued");
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(err.is_configuration());

        let err: AIError = MockError::CostLimitExceeded.into();
        assert!(err.is_configuration());

        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 30 }));
    }
}

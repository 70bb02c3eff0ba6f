//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for tests and offline runs
//! - `OpenAIProvider` - OpenAI chat completions (GPT-5 by default)

mod mock_provider;
mod openai_provider;

pub use mock_provider::{
    MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT, OFFLINE_REPLY,
};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language-model providers (OpenAI, mock)
//! - `storage` - Record stores (in-memory, JSON-lines files)
//! - `http` - axum REST API

pub mod ai;
pub mod http;
pub mod storage;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use http::{api_router, AppState};
pub use storage::{FileRecordStore, InMemoryRecordStore};

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted language model completions
//! - `RecordStore` - Append-only storage for chat, CBT, journal and mood records

mod ai_provider;
mod record_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, ResponseFormat, TokenUsage,
};
pub use record_store::{
    load_items, save_item, Record, RecordFilter, RecordKind, RecordPayload, RecordStore,
    RecordStoreError,
};

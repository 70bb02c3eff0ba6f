//! Chat command and query handlers.
//!
//! Sending a message screens it for risk, asks the companion for a persona
//! reply and stores both turns.

mod chat_history;
mod send_chat_message;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::RecordStoreError;

pub use chat_history::{ClearChatHistoryHandler, GetChatHistoryHandler, GetChatHistoryQuery};
pub use send_chat_message::{
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};

/// Errors from chat handlers.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] RecordStoreError),
}

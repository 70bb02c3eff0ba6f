//! Chat module - personas and conversation turns.

mod message;
mod persona;

pub use message::{history_window, ChatMessage, ChatRole, HISTORY_WINDOW};
pub use persona::{Persona, SAFETY_PROTOCOL};

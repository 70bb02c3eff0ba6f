//! HTTP adapters - REST API implementations.
//!
//! Each feature area has its own module with DTOs, handlers and routes.
//! [`api_router`] mounts them all under `/api`.

pub mod cbt;
pub mod chat;
mod error;
pub mod health;
pub mod journal;
mod state;

pub use error::ErrorResponse;
pub use state::{api_router, AppState};

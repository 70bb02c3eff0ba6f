//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) are kept apart.

pub mod companion;
pub mod handlers;

pub use companion::{Companion, CompanionError};
pub use handlers::*;

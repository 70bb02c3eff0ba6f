//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the Mindspace domain.

mod errors;
mod ids;
mod score;
mod stored;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::RecordId;
pub use score::Score;
pub use stored::Stored;
pub use timestamp::Timestamp;

//! CBT command and query handlers.
//!
//! Thought checks run the distortion screen only. Thought records are
//! enriched with a model insight and saved; progress summarises them.

mod analyze_thought;
mod get_cbt_progress;
mod record_thought;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::RecordStoreError;

pub use analyze_thought::{AnalyzeThoughtHandler, ThoughtAnalysis};
pub use get_cbt_progress::GetCbtProgressHandler;
pub use record_thought::{RecordThoughtCommand, RecordThoughtHandler, RecordThoughtResult};

/// Errors from CBT handlers.
#[derive(Debug, Error)]
pub enum CbtError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] RecordStoreError),
}

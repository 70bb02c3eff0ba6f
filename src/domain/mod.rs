//! Domain layer containing the classifiers and record types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, scores, errors)
//! - `triggers` - Validated pattern-to-trigger tables
//! - `safety` - Keyword risk classifier and crisis follow-up policy
//! - `cbt` - Cognitive-distortion matcher, thought records, progress
//! - `journal` - Focus areas, journal entries, mood check-ins
//! - `chat` - Personas and conversation turns

pub mod cbt;
pub mod chat;
pub mod foundation;
pub mod journal;
pub mod safety;
pub mod triggers;

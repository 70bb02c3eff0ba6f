//! CBT module - cognitive distortions and thought records.
//!
//! - `catalog` - descriptions and challenges for common distortions
//! - `matcher` - independent per-pattern distortion matcher and its screen
//! - `thought_record` - the thought record exercise and model insight
//! - `progress` - summary statistics over saved records

mod catalog;
mod matcher;
mod progress;
mod thought_record;

pub use catalog::{
    DistortionCatalog, DistortionInfo, ALL_OR_NOTHING, CATASTROPHIZING, LABELING,
    SHOULD_STATEMENTS, WHAT_IF,
};
pub use matcher::{
    standard_distortion_table, DistortionMatch, DistortionMatcher, DistortionScreen,
};
pub use progress::{CbtProgress, RECENT_RECORD_COUNT};
pub use thought_record::{CbtInsight, ThoughtRecord, REFRAMING_QUESTIONS};

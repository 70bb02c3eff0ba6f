//! Safety module - crisis language screening.
//!
//! - `risk` - risk and intervention levels, the per-input assessment
//! - `detector` - tiered keyword classifier and its fault-boundary screen
//! - `follow_up` - crisis resources and supportive follow-up messages

mod detector;
mod follow_up;
mod risk;

pub use detector::{standard_crisis_table, CrisisDetector, RiskScreen};
pub use follow_up::{
    follow_up_message, requires_intervention, CrisisResource, CONNECTION_FALLBACK_MESSAGE,
    CRISIS_RESOURCES,
};
pub use risk::{InterventionLevel, ModelRiskReading, RiskAssessment, RiskLevel};

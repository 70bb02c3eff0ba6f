//! HTTP DTOs for CBT endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::cbt::{RecordThoughtCommand, RecordThoughtResult};
use crate::domain::cbt::{CbtInsight, DistortionInfo, ThoughtRecord};
use crate::domain::foundation::{Score, Timestamp, ValidationError};

/// Request to check a single thought for distortions.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeThoughtRequest {
    pub thought: String,
}

/// Request to save a thought record. Intensities are 1-10.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordThoughtRequest {
    pub situation: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    pub thoughts: String,
    pub intensity_before: u8,
    #[serde(default)]
    pub evidence_for: String,
    #[serde(default)]
    pub evidence_against: String,
    #[serde(default)]
    pub balanced_thought: String,
    pub intensity_after: u8,
}

impl TryFrom<RecordThoughtRequest> for RecordThoughtCommand {
    type Error = ValidationError;

    fn try_from(req: RecordThoughtRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            situation: req.situation,
            emotions: req.emotions,
            thoughts: req.thoughts,
            intensity_before: Score::try_new(req.intensity_before)?,
            evidence_for: req.evidence_for,
            evidence_against: req.evidence_against,
            balanced_thought: req.balanced_thought,
            intensity_after: Score::try_new(req.intensity_after)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordThoughtResponse {
    pub id: String,
    pub created_at: Timestamp,
    pub record: ThoughtRecord,
    pub insight: CbtInsight,
    pub improvement: i8,
    pub used_fallback: bool,
}

impl From<RecordThoughtResult> for RecordThoughtResponse {
    fn from(result: RecordThoughtResult) -> Self {
        Self {
            id: result.record.id.to_string(),
            created_at: result.record.created_at,
            record: result.record.item,
            insight: result.insight,
            improvement: result.improvement,
            used_fallback: result.used_fallback,
        }
    }
}

/// Reference list of the distortions the screen recognises.
#[derive(Debug, Clone, Serialize)]
pub struct DistortionListResponse {
    pub distortions: &'static [DistortionInfo],
}

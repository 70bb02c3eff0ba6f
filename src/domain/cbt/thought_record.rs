//! Seven-column thought record and the insight attached to it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, ValidationError};

/// A completed thought record exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtRecord {
    pub situation: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    pub thoughts: String,
    pub intensity_before: Score,
    #[serde(default)]
    pub evidence_for: String,
    #[serde(default)]
    pub evidence_against: String,
    #[serde(default)]
    pub balanced_thought: String,
    pub intensity_after: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<CbtInsight>,
}

impl ThoughtRecord {
    /// Creates a record with the required columns.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the situation or the
    /// automatic thoughts are blank.
    pub fn new(
        situation: impl Into<String>,
        thoughts: impl Into<String>,
        intensity_before: Score,
        intensity_after: Score,
    ) -> Result<Self, ValidationError> {
        let situation = situation.into();
        let thoughts = thoughts.into();
        if situation.trim().is_empty() {
            return Err(ValidationError::empty_field("situation"));
        }
        if thoughts.trim().is_empty() {
            return Err(ValidationError::empty_field("thoughts"));
        }
        Ok(Self {
            situation,
            emotions: Vec::new(),
            thoughts,
            intensity_before,
            evidence_for: String::new(),
            evidence_against: String::new(),
            balanced_thought: String::new(),
            intensity_after,
            insight: None,
        })
    }

    pub fn with_emotions(mut self, emotions: Vec<String>) -> Self {
        self.emotions = emotions;
        self
    }

    pub fn with_evidence(mut self, evidence_for: impl Into<String>, evidence_against: impl Into<String>) -> Self {
        self.evidence_for = evidence_for.into();
        self.evidence_against = evidence_against.into();
        self
    }

    pub fn with_balanced_thought(mut self, balanced_thought: impl Into<String>) -> Self {
        self.balanced_thought = balanced_thought.into();
        self
    }

    pub fn with_insight(mut self, insight: CbtInsight) -> Self {
        self.insight = Some(insight);
        self
    }

    /// Drop in emotional intensity; positive means the exercise helped.
    pub fn improvement(&self) -> i8 {
        self.intensity_before.delta(self.intensity_after)
    }
}

/// Model-generated feedback on a thought record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbtInsight {
    #[serde(default)]
    pub cognitive_distortions: Vec<String>,
    #[serde(default)]
    pub balanced_thoughts: Vec<String>,
    #[serde(default)]
    pub evidence_challenges: Vec<String>,
    #[serde(default)]
    pub coping_strategies: Vec<String>,
    #[serde(default)]
    pub encouragement: String,
}

impl CbtInsight {
    /// Insight used when the model cannot be reached.
    pub fn fallback() -> Self {
        Self {
            cognitive_distortions: vec!["Unable to analyze at this time".to_string()],
            balanced_thoughts: vec!["Consider multiple perspectives on this situation".to_string()],
            evidence_challenges: vec!["What evidence supports and contradicts this thought?".to_string()],
            coping_strategies: vec!["Take deep breaths and practice self-compassion".to_string()],
            encouragement: "Remember, thoughts are not facts. You're doing great by reflecting on them."
                .to_string(),
        }
    }
}

/// Questions offered after every thought check.
pub const REFRAMING_QUESTIONS: &[&str] = &[
    "Is this thought realistic or exaggerated?",
    "What evidence supports or contradicts this thought?",
    "What would I tell a friend having this thought?",
    "How might I think about this in a week or month?",
    "What's a more balanced way to view this situation?",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    #[test]
    fn new_requires_situation_and_thoughts() {
        assert_eq!(
            ThoughtRecord::new(" ", "I'm failing", score(7), score(5)).unwrap_err(),
            ValidationError::empty_field("situation")
        );
        assert_eq!(
            ThoughtRecord::new("Got a C", "", score(7), score(5)).unwrap_err(),
            ValidationError::empty_field("thoughts")
        );
    }

    #[test]
    fn improvement_is_before_minus_after() {
        let record = ThoughtRecord::new("Got a C", "I'm not smart", score(8), score(4)).unwrap();
        assert_eq!(record.improvement(), 4);

        let worse = ThoughtRecord::new("Got a C", "I'm not smart", score(3), score(6)).unwrap();
        assert_eq!(worse.improvement(), -3);
    }

    #[test]
    fn builder_sets_optional_columns() {
        let record = ThoughtRecord::new("Got a C", "I'm not smart", score(8), score(4))
            .unwrap()
            .with_emotions(vec!["Anxious".into()])
            .with_evidence("Hard test", "Did well before")
            .with_balanced_thought("One grade doesn't define me")
            .with_insight(CbtInsight::fallback());

        assert_eq!(record.emotions, vec!["Anxious".to_string()]);
        assert_eq!(record.evidence_against, "Did well before");
        assert!(record.insight.is_some());
    }

    #[test]
    fn insight_parses_partial_model_output() {
        let insight: CbtInsight =
            serde_json::from_str(r#"{"encouragement": "Nice work"}"#).unwrap();
        assert_eq!(insight.encouragement, "Nice work");
        assert!(insight.coping_strategies.is_empty());
    }

    #[test]
    fn record_rejects_out_of_range_intensity_on_deserialize() {
        let json = r#"{"situation":"s","thoughts":"t","intensity_before":0,"intensity_after":5}"#;
        assert!(serde_json::from_str::<ThoughtRecord>(json).is_err());
    }
}

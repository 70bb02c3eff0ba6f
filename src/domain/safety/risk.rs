//! Risk levels, intervention levels and the per-input risk assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete severity tier assigned to a text sample.
///
/// Ordered from least to most severe so that `max` picks the highest
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// The intervention suggested for this level.
    pub fn intervention(&self) -> InterventionLevel {
        match self {
            RiskLevel::Low => InterventionLevel::None,
            RiskLevel::Moderate => InterventionLevel::Support,
            RiskLevel::High => InterventionLevel::Professional,
            RiskLevel::Critical => InterventionLevel::Crisis,
        }
    }

    /// Returns true for moderate and above.
    pub fn is_elevated(&self) -> bool {
        *self >= RiskLevel::Moderate
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Low
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// Suggested response to an assessed risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionLevel {
    None,
    Support,
    Professional,
    Crisis,
}

impl Default for InterventionLevel {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for InterventionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterventionLevel::None => "none",
            InterventionLevel::Support => "support",
            InterventionLevel::Professional => "professional",
            InterventionLevel::Crisis => "crisis",
        };
        f.write_str(s)
    }
}

/// Risk reading produced by the language model.
///
/// Field names follow the JSON schema the model is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRiskReading {
    /// 1 (very negative) to 10 (very positive).
    pub sentiment_score: f32,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub emotional_indicators: Vec<String>,
    #[serde(rename = "intervention_needed")]
    pub intervention: InterventionLevel,
    #[serde(default)]
    pub confidence: f32,
}

impl ModelRiskReading {
    /// Reading used when the model cannot be reached.
    pub fn cautious_fallback() -> Self {
        Self {
            sentiment_score: 5.0,
            risk_level: RiskLevel::Moderate,
            emotional_indicators: vec!["unknown".to_string()],
            intervention: InterventionLevel::Support,
            confidence: 0.1,
        }
    }
}

/// Result of screening one text sample. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    sentiment_score: Option<f32>,
    risk_level: RiskLevel,
    matched_keywords: Vec<String>,
    intervention_level: InterventionLevel,
}

impl RiskAssessment {
    /// Assessment for a keyword screen hit (or miss, with `RiskLevel::Low`).
    pub fn from_keywords(risk_level: RiskLevel, matched_keywords: Vec<String>) -> Self {
        Self {
            sentiment_score: None,
            risk_level,
            matched_keywords,
            intervention_level: risk_level.intervention(),
        }
    }

    /// Assessment for input with no crisis language.
    pub fn low() -> Self {
        Self::from_keywords(RiskLevel::Low, Vec::new())
    }

    /// Fail-toward-caution default used when screening cannot run.
    pub fn cautious_default() -> Self {
        Self::from_keywords(RiskLevel::Moderate, Vec::new())
    }

    /// Combines this keyword assessment with a model reading.
    ///
    /// The more severe level and intervention win; keywords are kept and the
    /// model's sentiment score is attached.
    pub fn combined_with(&self, reading: &ModelRiskReading) -> Self {
        let risk_level = self.risk_level.max(reading.risk_level);
        Self {
            sentiment_score: Some(reading.sentiment_score),
            risk_level,
            matched_keywords: self.matched_keywords.clone(),
            intervention_level: self
                .intervention_level
                .max(reading.intervention)
                .max(risk_level.intervention()),
        }
    }

    pub fn sentiment_score(&self) -> Option<f32> {
        self.sentiment_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn matched_keywords(&self) -> &[String] {
        &self.matched_keywords
    }

    pub fn intervention_level(&self) -> InterventionLevel {
        self.intervention_level
    }

    /// Whether the caller must surface crisis resources.
    pub fn requires_intervention(&self) -> bool {
        super::requires_intervention(self.risk_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn intervention_follows_level() {
        assert_eq!(RiskLevel::Low.intervention(), InterventionLevel::None);
        assert_eq!(RiskLevel::Moderate.intervention(), InterventionLevel::Support);
        assert_eq!(RiskLevel::High.intervention(), InterventionLevel::Professional);
        assert_eq!(RiskLevel::Critical.intervention(), InterventionLevel::Crisis);
    }

    #[test]
    fn risk_level_parses_case_insensitively() {
        assert_eq!("Critical".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
        assert_eq!(" low ".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert!("severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn cautious_default_is_moderate_support() {
        let a = RiskAssessment::cautious_default();
        assert_eq!(a.risk_level(), RiskLevel::Moderate);
        assert_eq!(a.intervention_level(), InterventionLevel::Support);
        assert!(a.sentiment_score().is_none());
    }

    #[test]
    fn combining_keeps_highest_severity() {
        let keyword = RiskAssessment::from_keywords(RiskLevel::Critical, vec!["end my life".into()]);
        let reading = ModelRiskReading {
            sentiment_score: 3.0,
            risk_level: RiskLevel::Moderate,
            emotional_indicators: vec![],
            intervention: InterventionLevel::Support,
            confidence: 0.8,
        };

        let combined = keyword.combined_with(&reading);
        assert_eq!(combined.risk_level(), RiskLevel::Critical);
        assert_eq!(combined.intervention_level(), InterventionLevel::Crisis);
        assert_eq!(combined.sentiment_score(), Some(3.0));
        assert_eq!(combined.matched_keywords(), &["end my life".to_string()]);
    }

    #[test]
    fn combining_can_raise_a_low_assessment() {
        let reading = ModelRiskReading {
            sentiment_score: 2.0,
            risk_level: RiskLevel::High,
            emotional_indicators: vec!["despair".into()],
            intervention: InterventionLevel::Professional,
            confidence: 0.9,
        };
        let combined = RiskAssessment::low().combined_with(&reading);
        assert_eq!(combined.risk_level(), RiskLevel::High);
        assert_eq!(combined.intervention_level(), InterventionLevel::Professional);
    }

    #[test]
    fn model_reading_parses_documented_schema() {
        let json = r#"{
            "sentiment_score": 4,
            "risk_level": "moderate",
            "emotional_indicators": ["sad", "tired"],
            "intervention_needed": "support",
            "confidence": 0.7
        }"#;
        let reading: ModelRiskReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.risk_level, RiskLevel::Moderate);
        assert_eq!(reading.intervention, InterventionLevel::Support);
        assert_eq!(reading.emotional_indicators.len(), 2);
    }

    #[test]
    fn assessment_serializes_snake_case_fields() {
        let json = serde_json::to_value(RiskAssessment::low()).unwrap();
        assert_eq!(json["risk_level"], "low");
        assert_eq!(json["intervention_level"], "none");
        assert!(json["sentiment_score"].is_null());
    }
}

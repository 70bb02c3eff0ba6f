//! AnalyzeThought query handler.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::cbt::{DistortionMatch, DistortionScreen, REFRAMING_QUESTIONS};
use crate::domain::foundation::ValidationError;

use super::CbtError;

/// Result of a quick thought check. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThoughtAnalysis {
    pub distortions: Vec<DistortionMatch>,
    /// No pattern matched.
    pub balanced: bool,
    pub reframing_questions: Vec<&'static str>,
}

pub struct AnalyzeThoughtHandler {
    screen: Arc<DistortionScreen>,
}

impl AnalyzeThoughtHandler {
    pub fn new(screen: Arc<DistortionScreen>) -> Self {
        Self { screen }
    }

    /// # Errors
    ///
    /// Returns `CbtError::Validation` for a blank thought.
    pub fn handle(&self, thought: &str) -> Result<ThoughtAnalysis, CbtError> {
        if thought.trim().is_empty() {
            return Err(ValidationError::empty_field("thought").into());
        }

        let distortions = self.screen.identify(thought);
        tracing::debug!(matches = distortions.len(), "thought analyzed");

        Ok(ThoughtAnalysis {
            balanced: distortions.is_empty(),
            distortions,
            reframing_questions: REFRAMING_QUESTIONS.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cbt::{CATASTROPHIZING, SHOULD_STATEMENTS};
    use crate::domain::triggers::TriggerTableError;

    #[test]
    fn reports_matches_and_questions() {
        let handler = AnalyzeThoughtHandler::new(Arc::new(DistortionScreen::standard()));

        let analysis = handler.handle("I must fix this disaster").unwrap();

        let names: Vec<_> = analysis
            .distortions
            .iter()
            .map(|d| d.pattern_name.as_str())
            .collect();
        assert_eq!(names, vec![SHOULD_STATEMENTS, CATASTROPHIZING]);
        assert!(!analysis.balanced);
        assert_eq!(analysis.reframing_questions.len(), REFRAMING_QUESTIONS.len());
    }

    #[test]
    fn balanced_thought_has_no_matches() {
        let handler = AnalyzeThoughtHandler::new(Arc::new(DistortionScreen::standard()));
        let analysis = handler.handle("The test was hard but I studied").unwrap();
        assert!(analysis.balanced);
    }

    #[test]
    fn blank_thought_is_rejected() {
        let handler = AnalyzeThoughtHandler::new(Arc::new(DistortionScreen::standard()));
        assert!(matches!(handler.handle("  "), Err(CbtError::Validation(_))));
    }

    #[test]
    fn degraded_screen_reports_balanced() {
        let screen = DistortionScreen::from_table(Err(TriggerTableError::Empty));
        let handler = AnalyzeThoughtHandler::new(Arc::new(screen));
        let analysis = handler.handle("I should never fail").unwrap();
        assert!(analysis.distortions.is_empty());
    }
}

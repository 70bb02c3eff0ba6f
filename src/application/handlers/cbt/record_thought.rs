//! RecordThought command handler.

use std::sync::Arc;

use crate::application::companion::Companion;
use crate::domain::cbt::{CbtInsight, ThoughtRecord};
use crate::domain::foundation::{Score, Stored};
use crate::ports::{save_item, RecordStore};

use super::CbtError;

/// Command carrying the columns of a thought record.
#[derive(Debug, Clone)]
pub struct RecordThoughtCommand {
    pub situation: String,
    pub emotions: Vec<String>,
    pub thoughts: String,
    pub intensity_before: Score,
    pub evidence_for: String,
    pub evidence_against: String,
    pub balanced_thought: String,
    pub intensity_after: Score,
}

#[derive(Debug, Clone)]
pub struct RecordThoughtResult {
    pub record: Stored<ThoughtRecord>,
    pub insight: CbtInsight,
    /// Drop in intensity, before minus after.
    pub improvement: i8,
    /// True when the model was unavailable and the fixed insight was used.
    pub used_fallback: bool,
}

pub struct RecordThoughtHandler {
    store: Arc<dyn RecordStore>,
    companion: Companion,
}

impl RecordThoughtHandler {
    pub fn new(store: Arc<dyn RecordStore>, companion: Companion) -> Self {
        Self { store, companion }
    }

    pub async fn handle(&self, cmd: RecordThoughtCommand) -> Result<RecordThoughtResult, CbtError> {
        let record = ThoughtRecord::new(
            cmd.situation,
            cmd.thoughts,
            cmd.intensity_before,
            cmd.intensity_after,
        )?
        .with_emotions(cmd.emotions)
        .with_evidence(cmd.evidence_for, cmd.evidence_against)
        .with_balanced_thought(cmd.balanced_thought);

        let (insight, used_fallback) = match self.companion.generate_cbt_insight(&record).await {
            Ok(insight) => (insight, false),
            Err(e) => {
                tracing::warn!(error = %e, "cbt insight unavailable, using fallback");
                (CbtInsight::fallback(), true)
            }
        };

        let record = record.with_insight(insight.clone());
        let improvement = record.improvement();
        let record = save_item(self.store.as_ref(), &record).await?;

        tracing::info!(record_id = %record.id, improvement, "thought record saved");

        Ok(RecordThoughtResult {
            record,
            insight,
            improvement,
            used_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::ports::RecordKind;
    use serde_json::json;

    fn cmd(situation: &str, before: u8, after: u8) -> RecordThoughtCommand {
        RecordThoughtCommand {
            situation: situation.to_string(),
            emotions: vec!["Anxious".to_string()],
            thoughts: "Everyone will laugh at me".to_string(),
            intensity_before: Score::try_new(before).unwrap(),
            evidence_for: String::new(),
            evidence_against: "People were kind last time".to_string(),
            balanced_thought: "Some people might not even notice".to_string(),
            intensity_after: Score::try_new(after).unwrap(),
        }
    }

    fn handler(mock: &MockAIProvider, store: &InMemoryRecordStore) -> RecordThoughtHandler {
        RecordThoughtHandler::new(Arc::new(store.clone()), Companion::new(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn saves_record_with_model_insight() {
        let mock = MockAIProvider::new().with_json_response(json!({
            "cognitive_distortions": ["Mind Reading"],
            "balanced_thoughts": [],
            "evidence_challenges": [],
            "coping_strategies": ["Box breathing"],
            "encouragement": "You did the work."
        }));
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store)
            .handle(cmd("Class presentation", 8, 5))
            .await
            .unwrap();

        assert_eq!(result.improvement, 3);
        assert!(!result.used_fallback);
        assert_eq!(result.insight.encouragement, "You did the work.");
        assert_eq!(result.record.item.insight.as_ref(), Some(&result.insight));
        assert_eq!(store.count(RecordKind::ThoughtRecord).await, 1);
    }

    #[tokio::test]
    async fn model_failure_uses_fixed_insight() {
        let mock = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 60 });
        let store = InMemoryRecordStore::new();

        let result = handler(&mock, &store)
            .handle(cmd("Class presentation", 6, 6))
            .await
            .unwrap();

        assert!(result.used_fallback);
        assert_eq!(result.insight, CbtInsight::fallback());
        assert_eq!(result.improvement, 0);
    }

    #[tokio::test]
    async fn missing_situation_is_rejected_before_model_call() {
        let mock = MockAIProvider::new();
        let store = InMemoryRecordStore::new();

        let err = handler(&mock, &store).handle(cmd("", 6, 4)).await.unwrap_err();

        assert!(matches!(err, CbtError::Validation(_)));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(store.count(RecordKind::ThoughtRecord).await, 0);
    }
}

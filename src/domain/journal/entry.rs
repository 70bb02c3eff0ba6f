//! Journal entries and personalized prompts.

use serde::{Deserialize, Serialize};

use super::FocusArea;
use crate::domain::foundation::{Score, ValidationError};

/// A saved journal entry with mood before and after writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub prompt: String,
    pub content: String,
    pub focus_area: FocusArea,
    pub mood_before: Score,
    pub mood_after: Score,
    #[serde(default)]
    pub emotional_state: String,
    #[serde(default)]
    pub insights: String,
}

impl JournalEntry {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `content` is blank.
    pub fn new(
        prompt: impl Into<String>,
        content: impl Into<String>,
        focus_area: FocusArea,
        mood_before: Score,
        mood_after: Score,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            prompt: prompt.into(),
            content,
            focus_area,
            mood_before,
            mood_after,
            emotional_state: String::new(),
            insights: String::new(),
        })
    }

    pub fn with_emotional_state(mut self, state: impl Into<String>) -> Self {
        self.emotional_state = state.into();
        self
    }

    pub fn with_insights(mut self, insights: impl Into<String>) -> Self {
        self.insights = insights.into();
        self
    }

    pub fn mood_change(&self) -> i8 {
        self.mood_after.delta(self.mood_before)
    }

    pub fn mood_shift(&self) -> MoodShift {
        MoodShift::from_change(self.mood_change())
    }

    /// Case-insensitive search over prompt and content.
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.content.to_lowercase().contains(&needle)
            || self.prompt.to_lowercase().contains(&needle)
    }
}

/// How mood moved across a journaling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodShift {
    /// Rose by more than one point.
    Improved,
    /// Fell by more than one point.
    Dipped,
    Steady,
}

impl MoodShift {
    pub fn from_change(change: i8) -> Self {
        if change > 1 {
            MoodShift::Improved
        } else if change < -1 {
            MoodShift::Dipped
        } else {
            MoodShift::Steady
        }
    }

    /// Short acknowledgement shown after saving.
    pub fn message(&self) -> &'static str {
        match self {
            MoodShift::Improved => "Great! Your mood improved through journaling.",
            MoodShift::Dipped => {
                "Writing can sometimes bring up difficult emotions. That's okay and part of the healing process."
            }
            MoodShift::Steady => "Journal entry saved.",
        }
    }
}

/// Model-generated prompt tailored to recent mood and themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedPrompt {
    pub prompt: String,
    pub focus_area: FocusArea,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

impl PersonalizedPrompt {
    /// Prompt used when the model cannot be reached.
    pub fn fallback() -> Self {
        Self {
            prompt: "What's one thing you're grateful for today, and how did it make you feel?"
                .to_string(),
            focus_area: FocusArea::Gratitude,
            follow_up_questions: vec![
                "How can you create more moments like this?".to_string(),
                "What would you tell a friend feeling the same way?".to_string(),
            ],
        }
    }
}

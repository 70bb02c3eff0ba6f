//! RandomPrompt query handler.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::journal::{FocusArea, FOLLOW_UP_REFLECTIONS, OPEN_PROMPT};

/// A prompt drawn from the built-in bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomPrompt {
    pub prompt: &'static str,
    pub focus_area: Option<FocusArea>,
    pub follow_up_questions: &'static [&'static str],
}

/// Serves prompts without calling the model.
#[derive(Debug, Clone, Default)]
pub struct RandomPromptHandler;

impl RandomPromptHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, focus_area: Option<FocusArea>) -> RandomPrompt {
        self.handle_with_rng(focus_area, &mut rand::thread_rng())
    }

    /// Draws with a caller-supplied RNG; the open prompt is used when no
    /// area is given.
    pub fn handle_with_rng<R: Rng>(&self, focus_area: Option<FocusArea>, rng: &mut R) -> RandomPrompt {
        let prompt = focus_area
            .and_then(|area| area.prompts().choose(rng).copied())
            .unwrap_or(OPEN_PROMPT);
        RandomPrompt {
            prompt,
            focus_area,
            follow_up_questions: FOLLOW_UP_REFLECTIONS,
        }
    }
}

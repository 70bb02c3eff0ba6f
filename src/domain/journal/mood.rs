//! Mood check-ins and the context derived from them for prompt generation.

use serde::{Deserialize, Serialize};

use super::{FocusArea, JournalEntry};
use crate::domain::foundation::Score;

/// Days of mood history considered "recent".
pub const RECENT_MOOD_DAYS: i64 = 7;

/// A single mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub overall_mood: Score,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
}

/// Summary of recent mood handed to the prompt generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodContext {
    pub recent_average: f64,
    pub common_emotions: Vec<String>,
    pub triggers: Vec<String>,
}

impl MoodContext {
    /// Builds the context; the average is neutral (5) with no entries.
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let recent_average = if entries.is_empty() {
            f64::from(Score::NEUTRAL.value())
        } else {
            let sum: u32 = entries.iter().map(|e| u32::from(e.overall_mood.value())).sum();
            f64::from(sum) / entries.len() as f64
        };

        Self {
            recent_average,
            common_emotions: distinct(entries.iter().flat_map(|e| e.emotions.iter())),
            triggers: distinct(entries.iter().flat_map(|e| e.triggers.iter())),
        }
    }

    pub fn tone(&self) -> PromptTone {
        PromptTone::from_average(self.recent_average)
    }
}

/// Direction personalized prompts lean toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTone {
    /// Low recent mood.
    SelfCompassion,
    Balance,
    /// High recent mood.
    Growth,
}

impl PromptTone {
    pub fn from_average(average: f64) -> Self {
        if average < 4.0 {
            PromptTone::SelfCompassion
        } else if average > 7.0 {
            PromptTone::Growth
        } else {
            PromptTone::Balance
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptTone::SelfCompassion => {
                "You've been experiencing some lower moods lately. Prompts will focus on self-compassion and coping strategies."
            }
            PromptTone::Balance => {
                "Your mood has been moderate. Prompts will help you explore balance and identify what supports your wellbeing."
            }
            PromptTone::Growth => {
                "You've been feeling good lately. Prompts will help you build on what's working."
            }
        }
    }
}

/// Focus areas of the given entries, most frequent first.
///
/// Ties keep the order in which the areas first appear.
pub fn journal_themes(entries: &[JournalEntry]) -> Vec<FocusArea> {
    let mut counts: Vec<(FocusArea, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(area, _)| *area == entry.focus_area) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.focus_area, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(area, _)| area).collect()
}

fn distinct<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|o| o.eq_ignore_ascii_case(item)) {
            out.push(item.clone());
        }
    }
    out
}

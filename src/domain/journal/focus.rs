//! Journaling focus areas and the static prompt bank.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a journal entry concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    EmotionalAwareness,
    ThoughtPatterns,
    Gratitude,
    CopingSkills,
    Goals,
    Relationships,
    DailyReflection,
}

impl FocusArea {
    pub const ALL: [FocusArea; 7] = [
        FocusArea::EmotionalAwareness,
        FocusArea::ThoughtPatterns,
        FocusArea::Gratitude,
        FocusArea::CopingSkills,
        FocusArea::Goals,
        FocusArea::Relationships,
        FocusArea::DailyReflection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::EmotionalAwareness => "Emotional Awareness",
            FocusArea::ThoughtPatterns => "Thought Patterns",
            FocusArea::Gratitude => "Gratitude & Positivity",
            FocusArea::CopingSkills => "Coping & Resilience",
            FocusArea::Goals => "Goals & Growth",
            FocusArea::Relationships => "Relationships",
            FocusArea::DailyReflection => "Daily Reflection",
        }
    }

    /// Built-in prompts for this area, journaling and CBT prompts combined.
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            FocusArea::EmotionalAwareness => &[
                "What emotion showed up most for you today, and where did you feel it in your body?",
                "Describe a moment today when your mood shifted. What happened just before?",
                "If your feelings right now had a weather report, what would it say?",
            ],
            FocusArea::ThoughtPatterns => &[
                "Write down a thought that kept coming back today. Is it a fact or an interpretation?",
                "What would you say to a friend who had the same worry you had today?",
                "Pick one 'should' you told yourself recently. Where did that rule come from?",
            ],
            FocusArea::Gratitude => &[
                "What's one thing you're grateful for today, and how did it make you feel?",
                "Who made your day a little better recently? What did they do?",
                "Name three small things that went right this week.",
            ],
            FocusArea::CopingSkills => &[
                "Think of a hard moment you got through. What helped you cope?",
                "What is one thing you can do in the next hour to take care of yourself?",
                "Which coping strategy works best for you when stress builds up?",
            ],
            FocusArea::Goals => &[
                "What is one small step you can take tomorrow toward something that matters to you?",
                "Describe a time you surprised yourself by doing something difficult.",
                "Where would you like to be a month from now, and what would help you get there?",
            ],
            FocusArea::Relationships => &[
                "Who do you feel most yourself around, and why?",
                "Is there a conversation you've been avoiding? What would you want to say?",
                "How did you show kindness to someone this week?",
            ],
            FocusArea::DailyReflection => &[
                "What was the best part of today, and what was the hardest?",
                "What did you learn about yourself today?",
                "If you could redo one moment from today, what would you change?",
            ],
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prompt used when no focus area prompt applies.
pub const OPEN_PROMPT: &str =
    "What's on your mind today? Write about anything that feels important to you right now.";

/// Reflection questions offered once an entry has content.
pub const FOLLOW_UP_REFLECTIONS: &[&str] = &[
    "What emotions came up while writing this?",
    "What insights or patterns do you notice?",
    "How might you apply this reflection to your daily life?",
    "What would you tell a friend in a similar situation?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_area_has_prompts() {
        for area in FocusArea::ALL {
            assert!(!area.prompts().is_empty(), "{:?} has no prompts", area);
        }
    }

    #[test]
    fn focus_area_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&FocusArea::CopingSkills).unwrap();
        assert_eq!(json, "\"coping_skills\"");
        let parsed: FocusArea = serde_json::from_str("\"daily_reflection\"").unwrap();
        assert_eq!(parsed, FocusArea::DailyReflection);
    }
}

//! Journal module - guided journaling and mood check-ins.

mod entry;
mod focus;
mod mood;

pub use entry::{JournalEntry, MoodShift, PersonalizedPrompt};
pub use focus::{FocusArea, FOLLOW_UP_REFLECTIONS, OPEN_PROMPT};
pub use mood::{journal_themes, MoodContext, MoodEntry, PromptTone, RECENT_MOOD_DAYS};

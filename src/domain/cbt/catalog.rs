//! Cognitive distortion catalog.
//!
//! Reference descriptions for common unhelpful thinking patterns. Every
//! pattern the matcher can report has an entry here; some entries exist for
//! the learning listing only and have no triggers.

use serde::Serialize;

use super::DistortionMatch;
use crate::domain::triggers::{TriggerTable, TriggerTableError};

/// Descriptive metadata for one distortion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistortionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub challenge: &'static str,
}

impl DistortionInfo {
    fn is_complete(&self) -> bool {
        [self.name, self.description, self.example, self.challenge]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

pub const ALL_OR_NOTHING: &str = "All-or-Nothing Thinking";
pub const SHOULD_STATEMENTS: &str = "Should Statements";
pub const LABELING: &str = "Labeling";
pub const CATASTROPHIZING: &str = "Catastrophizing";
pub const WHAT_IF: &str = "What-If Thinking";

const ENTRIES: &[DistortionInfo] = &[
    DistortionInfo {
        name: ALL_OR_NOTHING,
        description: "Seeing things in black-and-white categories, with no middle ground.",
        example: "If I don't get an A, I'm a total failure.",
        challenge: "Look for the shades of grey. What would a partly good outcome look like?",
    },
    DistortionInfo {
        name: SHOULD_STATEMENTS,
        description: "Holding rigid rules about how you or others must behave.",
        example: "I should always be productive and never take breaks.",
        challenge: "Swap 'should' for 'I'd like to' or 'it would help if'. Whose rule is this?",
    },
    DistortionInfo {
        name: LABELING,
        description: "Attaching a global label to yourself based on a single event.",
        example: "I forgot my homework, I'm such an idiot.",
        challenge: "Describe the behaviour instead of labeling the person. One moment is not who you are.",
    },
    DistortionInfo {
        name: CATASTROPHIZING,
        description: "Expecting the worst possible outcome and treating it as unbearable.",
        example: "If I mess up this presentation, my whole future is ruined.",
        challenge: "What is the most likely outcome? How would you cope if the worst did happen?",
    },
    DistortionInfo {
        name: WHAT_IF,
        description: "Spiralling through hypothetical worries about things that haven't happened.",
        example: "What if everyone laughs at me? What if I fail?",
        challenge: "Answer the 'what if' with a plan, then bring attention back to what is happening now.",
    },
    DistortionInfo {
        name: "Mind Reading",
        description: "Assuming you know what others think without real evidence.",
        example: "They didn't text back, they must be angry with me.",
        challenge: "What are some other explanations? Could you check instead of guessing?",
    },
    DistortionInfo {
        name: "Emotional Reasoning",
        description: "Believing something is true because it feels true.",
        example: "I feel stupid, so I must be stupid.",
        challenge: "Feelings are real but they are not facts. What does the evidence say?",
    },
    DistortionInfo {
        name: "Personalization",
        description: "Blaming yourself for events outside your control.",
        example: "My parents argued because I didn't clean my room.",
        challenge: "List everything that contributed to the situation. How much was really up to you?",
    },
];

/// The pattern table the matcher evaluates, in reporting order.
pub(super) const STANDARD_TRIGGERS: &[(&str, &[&str])] = &[
    (
        ALL_OR_NOTHING,
        &["always", "never", "everyone", "no one", "everything", "nothing"],
    ),
    (SHOULD_STATEMENTS, &["should", "must", "have to", "ought to"]),
    (LABELING, &["i'm a", "i am a", "i'm so", "i am so"]),
    (
        CATASTROPHIZING,
        &["terrible", "awful", "horrible", "disaster", "catastrophe"],
    ),
    (WHAT_IF, &["what if"]),
];

/// Read-only catalog of distortion metadata.
#[derive(Debug, Clone, Copy)]
pub struct DistortionCatalog {
    entries: &'static [DistortionInfo],
}

impl DistortionCatalog {
    pub fn standard() -> Self {
        Self { entries: ENTRIES }
    }

    pub fn entries(&self) -> &'static [DistortionInfo] {
        self.entries
    }

    pub fn get(&self, name: &str) -> Option<&'static DistortionInfo> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Builds the reported match for a pattern name.
    pub fn describe(&self, name: &str) -> Option<DistortionMatch> {
        self.get(name).map(|info| DistortionMatch {
            pattern_name: info.name.to_string(),
            description: info.description.to_string(),
            example_challenge: info.challenge.to_string(),
        })
    }

    /// Checks every entry is complete and every table pattern is catalogued.
    pub fn check_table(&self, table: &TriggerTable) -> Result<(), TriggerTableError> {
        if let Some(incomplete) = self.entries.iter().find(|e| !e.is_complete()) {
            return Err(TriggerTableError::UnknownPattern(incomplete.name.to_string()));
        }
        match table.names().find(|name| self.get(name).is_none()) {
            Some(missing) => Err(TriggerTableError::UnknownPattern(missing.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for DistortionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

//! Support personas the companion can speak as.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Voice used for chat replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Peer,
    Mentor,
    #[default]
    Therapist,
}

impl Persona {
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Peer => "Peer Support",
            Persona::Mentor => "Mentor",
            Persona::Therapist => "Therapist",
        }
    }

    /// Persona instructions without the shared safety rules.
    pub fn instructions(&self) -> &'static str {
        match self {
            Persona::Peer => {
                "You are a supportive peer who gets what young people go through. \
                 Keep it casual and warm, relate where you can, and encourage them."
            }
            Persona::Mentor => {
                "You are a thoughtful mentor. Offer perspective and gentle guidance \
                 without judging or lecturing."
            }
            Persona::Therapist => {
                "You are a warm therapist grounded in CBT. Reflect back what you hear, \
                 ask open questions and suggest practical coping strategies."
            }
        }
    }

    /// Full system prompt: persona instructions followed by the safety protocol.
    pub fn system_prompt(&self) -> String {
        format!("{}\n\n{}", self.instructions(), SAFETY_PROTOCOL)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Persona::Peer => "peer",
            Persona::Mentor => "mentor",
            Persona::Therapist => "therapist",
        })
    }
}

impl FromStr for Persona {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "peer" => Ok(Persona::Peer),
            "mentor" => Ok(Persona::Mentor),
            "therapist" => Ok(Persona::Therapist),
            other => Err(ValidationError::invalid_format(
                "persona",
                format!("unknown persona '{}'", other),
            )),
        }
    }
}

/// Rules appended to every persona prompt.
pub const SAFETY_PROTOCOL: &str = "Safety rules:\n\
- If there is any sign of crisis, suicidal thinking, self-harm or immediate danger, \
share crisis resources (call or text 988, text HOME to 741741) and encourage reaching out to a professional.\n\
- You support but do not replace professional care.\n\
- Stay non-judgmental and culturally sensitive.\n\
- When unsure about safety, point to professional resources.\n\
You are talking with a young person who may be vulnerable. Be gentle.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_persona_is_therapist() {
        assert_eq!(Persona::default(), Persona::Therapist);
    }

    #[test]
    fn every_system_prompt_carries_safety_rules() {
        for persona in [Persona::Peer, Persona::Mentor, Persona::Therapist] {
            let prompt = persona.system_prompt();
            assert!(prompt.starts_with(persona.instructions()));
            assert!(prompt.contains("988"));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Mentor".parse::<Persona>().unwrap(), Persona::Mentor);
        assert_eq!(" peer ".parse::<Persona>().unwrap(), Persona::Peer);
        assert!("counselor".parse::<Persona>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for persona in [Persona::Peer, Persona::Mentor, Persona::Therapist] {
            assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
        }
    }
}

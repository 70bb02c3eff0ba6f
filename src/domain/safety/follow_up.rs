//! Crisis follow-up policy.
//!
//! Whether to intervene depends only on the assessed risk level. The
//! messages and resources here are appended to, or stand in for, the
//! model's reply.

use serde::Serialize;

use super::risk::RiskLevel;

/// A crisis line or service surfaced alongside elevated assessments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "Call or text 988",
        description: "Free, confidential support 24/7",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        description: "Text with a trained crisis counselor 24/7",
    },
    CrisisResource {
        name: "Emergency Services",
        contact: "Call 911",
        description: "If you are in immediate danger",
    },
];

/// True when the caller must surface crisis resources and a follow-up.
pub fn requires_intervention(level: RiskLevel) -> bool {
    level.is_elevated()
}

/// Supportive closing message for an elevated assessment.
///
/// Returns `None` for `RiskLevel::Low`.
pub fn follow_up_message(level: RiskLevel) -> Option<&'static str> {
    match level {
        RiskLevel::Low => None,
        RiskLevel::Moderate => Some(
            "It sounds like things are heavy right now. You don't have to carry this alone. \
             Talking with someone you trust, like a friend, family member or school counselor, \
             can really help. If things ever feel like too much, you can call or text 988 any time.",
        ),
        RiskLevel::High => Some(
            "I'm really glad you shared this with me, and I'm concerned about how you're feeling. \
             Please reach out to someone who can support you right now: call or text 988, \
             or text HOME to 741741 to talk with a trained counselor. A trusted adult or a \
             professional can help you through this.",
        ),
        RiskLevel::Critical => Some(
            "Your safety matters more than anything right now. Please contact the 988 Suicide & \
             Crisis Lifeline by calling or texting 988, or text HOME to 741741. If you are in \
             immediate danger, call 911 or go to the nearest emergency room. You deserve support, \
             and people are ready to help you right now.",
        ),
    }
}

/// Reply used when the language model cannot be reached.
///
/// Always lists crisis contacts so that a connectivity failure never hides
/// them from someone already assessed at elevated risk.
pub const CONNECTION_FALLBACK_MESSAGE: &str = "I'm having trouble connecting right now. \
Here are some things you can try:\n\n\
- Refresh the page and try again\n\
- Try one of the breathing exercises\n\
- Write in the journal section\n\
- If this is urgent, please call 988 or text HOME to 741741";

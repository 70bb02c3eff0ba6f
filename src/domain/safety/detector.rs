//! Keyword risk classifier.
//!
//! Screens free text for crisis language in three tiers (critical, high,
//! moderate). The most severe tier with any hit decides the level; a
//! critical hit wins regardless of anything else in the text.

use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{debug, error, warn};

use super::risk::{RiskAssessment, RiskLevel};
use crate::domain::triggers::{normalize, TriggerEntry, TriggerTable, TriggerTableError};

const CRITICAL_PHRASES: &[&str] = &[
    "kill myself",
    "killing myself",
    "end my life",
    "ending my life",
    "take my own life",
    "want to die",
    "wanna die",
    "suicide",
    "suicidal",
    "hurt myself",
    "hurting myself",
    "cut myself",
    "cutting myself",
    "self harm",
    "self-harm",
    "better off dead",
    "end it all",
    "overdose",
];

const HIGH_PHRASES: &[&str] = &[
    "no reason to live",
    "nothing to live for",
    "no point in living",
    "can't go on",
    "cannot go on",
    "no way out",
    "hopeless",
    "don't want to be here",
    "don't want to exist",
    "disappear forever",
    "better off without me",
    "give up on life",
];

const MODERATE_PHRASES: &[&str] = &[
    "worthless",
    "hate myself",
    "can't take it",
    "can't cope",
    "cannot cope",
    "nobody cares",
    "no one cares",
    "so alone",
    "completely alone",
    "falling apart",
    "breaking down",
    "empty inside",
    "can't stop crying",
    "panic attack",
];

static STANDARD_TABLE: Lazy<TriggerTable> = Lazy::new(|| {
    TriggerTable::from_static(&[
        ("critical", CRITICAL_PHRASES),
        ("high", HIGH_PHRASES),
        ("moderate", MODERATE_PHRASES),
    ])
});

/// The built-in crisis phrase table.
pub fn standard_crisis_table() -> &'static TriggerTable {
    &STANDARD_TABLE
}

/// Stateless keyword risk classifier.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    /// Tiers sorted from most to least severe.
    tiers: Vec<(RiskLevel, TriggerEntry)>,
}

impl CrisisDetector {
    /// Detector over the built-in phrase table.
    pub fn standard() -> Self {
        Self::from_trusted(standard_crisis_table())
    }

    /// Builds a detector from a table whose pattern names are risk tiers
    /// (`moderate`, `high`, `critical`).
    pub fn from_table(table: &TriggerTable) -> Result<Self, TriggerTableError> {
        for name in table.names() {
            match name.parse::<RiskLevel>() {
                Ok(level) if level.is_elevated() => {}
                _ => return Err(TriggerTableError::UnknownPattern(name.to_string())),
            }
        }
        Ok(Self::from_trusted(table))
    }

    fn from_trusted(table: &TriggerTable) -> Self {
        let mut tiers: Vec<(RiskLevel, TriggerEntry)> = table
            .entries()
            .iter()
            .filter_map(|entry| {
                entry
                    .name
                    .parse::<RiskLevel>()
                    .ok()
                    .map(|level| (level, entry.clone()))
            })
            .collect();
        tiers.sort_by(|a, b| b.0.cmp(&a.0));
        Self { tiers }
    }

    /// Assesses one text sample. Total over all strings.
    pub fn assess(&self, text: &str) -> RiskAssessment {
        let lowered = normalize(text);

        for (level, entry) in &self.tiers {
            let hits = entry.matches_in(&lowered);
            if !hits.is_empty() {
                return RiskAssessment::from_keywords(
                    *level,
                    hits.into_iter().map(str::to_string).collect(),
                );
            }
        }

        RiskAssessment::low()
    }
}

/// Risk screen with a fault boundary.
///
/// A screen whose table failed to load stays usable in a degraded state and
/// answers every request with the cautious default (moderate / support).
#[derive(Debug, Clone)]
pub enum RiskScreen {
    Ready(CrisisDetector),
    Degraded { reason: String },
}

impl RiskScreen {
    /// Screen over the built-in table.
    pub fn standard() -> Self {
        RiskScreen::Ready(CrisisDetector::standard())
    }

    /// Screen over a table that may have failed to load.
    pub fn from_table(table: Result<TriggerTable, TriggerTableError>) -> Self {
        match table.and_then(|t| CrisisDetector::from_table(&t)) {
            Ok(detector) => RiskScreen::Ready(detector),
            Err(e) => {
                error!(error = %e, "crisis trigger table rejected, risk screen degraded");
                RiskScreen::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Built-in table when `path` is `None`, otherwise the YAML table at `path`.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            None => Self::standard(),
            Some(path) => {
                debug!(path = %path.display(), "loading custom crisis trigger table");
                Self::from_table(TriggerTable::from_yaml_file(path))
            }
        }
    }

    /// Assesses one text sample, failing toward caution when degraded.
    pub fn assess(&self, text: &str) -> RiskAssessment {
        match self {
            RiskScreen::Ready(detector) => detector.assess(text),
            RiskScreen::Degraded { reason } => {
                warn!(%reason, "risk screen degraded, returning cautious default");
                RiskAssessment::cautious_default()
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RiskScreen::Degraded { .. })
    }
}

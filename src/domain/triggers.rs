//! Trigger tables - ordered mappings from a pattern name to trigger phrases.
//!
//! Both text screens (crisis risk and cognitive distortions) are driven by a
//! `TriggerTable`. Tables are built once at startup and never mutated.
//! Iteration order is insertion order, which is also the order in which
//! matches are reported.
//!
//! Matching is plain case-insensitive substring presence: the input is
//! lower-cased once and each trigger is looked up with `str::contains`.
//! There is no stemming or tokenization.
//!
//! Custom tables can be loaded from YAML:
//!
//! ```yaml
//! - name: Should Statements
//!   triggers: [should, must, have to, ought to]
//! - name: What-If Thinking
//!   triggers: [what if]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building or loading a trigger table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerTableError {
    #[error("trigger table has no patterns")]
    Empty,

    #[error("pattern name cannot be blank")]
    BlankPatternName,

    #[error("pattern '{0}' appears more than once")]
    DuplicatePattern(String),

    #[error("pattern '{0}' has no triggers")]
    NoTriggers(String),

    #[error("pattern '{pattern}' has a blank trigger")]
    BlankTrigger { pattern: String },

    #[error("trigger '{trigger}' of pattern '{pattern}' must be lowercase")]
    NotLowercase { pattern: String, trigger: String },

    #[error("pattern '{0}' is not recognised")]
    UnknownPattern(String),

    #[error("failed to parse trigger table: {0}")]
    Parse(String),

    #[error("failed to read trigger table: {0}")]
    Io(String),
}

/// Lower-cases and folds typographic apostrophes so "can’t" matches "can't".
///
/// Both screens run input through this before matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// One pattern and the phrases that indicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerEntry {
    pub name: String,
    pub triggers: Vec<String>,
}

impl TriggerEntry {
    /// Returns true if any trigger occurs in `lowered`.
    ///
    /// `lowered` must already be passed through [`normalize`].
    pub fn is_present(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }

    /// Returns every trigger that occurs in `lowered`, in table order.
    pub fn matches_in(&self, lowered: &str) -> Vec<&str> {
        self.triggers
            .iter()
            .filter(|t| lowered.contains(t.as_str()))
            .map(String::as_str)
            .collect()
    }

    fn validate(&self) -> Result<(), TriggerTableError> {
        if self.name.trim().is_empty() {
            return Err(TriggerTableError::BlankPatternName);
        }
        if self.triggers.is_empty() {
            return Err(TriggerTableError::NoTriggers(self.name.clone()));
        }
        for trigger in &self.triggers {
            if trigger.trim().is_empty() {
                return Err(TriggerTableError::BlankTrigger {
                    pattern: self.name.clone(),
                });
            }
            if *trigger != trigger.to_lowercase() {
                return Err(TriggerTableError::NotLowercase {
                    pattern: self.name.clone(),
                    trigger: trigger.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable, validated, insertion-ordered trigger table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTable {
    entries: Vec<TriggerEntry>,
}

impl TriggerTable {
    /// Builds a table after validating every entry.
    pub fn new(entries: Vec<TriggerEntry>) -> Result<Self, TriggerTableError> {
        if entries.is_empty() {
            return Err(TriggerTableError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.name.as_str()) {
                return Err(TriggerTableError::DuplicatePattern(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parses and validates a YAML sequence of `{name, triggers}` maps.
    pub fn from_yaml(yaml: &str) -> Result<Self, TriggerTableError> {
        let entries: Vec<TriggerEntry> =
            serde_yaml::from_str(yaml).map_err(|e| TriggerTableError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    /// Reads a YAML table from disk.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, TriggerTableError> {
        let yaml =
            std::fs::read_to_string(path).map_err(|e| TriggerTableError::Io(e.to_string()))?;
        Self::from_yaml(&yaml)
    }

    /// Builds a table from compiled-in data.
    ///
    /// Built-in tables are covered by tests, so they skip runtime validation.
    pub(crate) fn from_static(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, triggers)| TriggerEntry {
                    name: (*name).to_string(),
                    triggers: triggers.iter().map(|t| (*t).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[TriggerEntry] {
        &self.entries
    }

    /// Looks up an entry by pattern name.
    pub fn get(&self, name: &str) -> Option<&TriggerEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Pattern names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-validates the table. Used by tests on the built-in tables.
    pub fn validate(&self) -> Result<(), TriggerTableError> {
        Self::new(self.entries.clone()).map(|_| ())
    }
}

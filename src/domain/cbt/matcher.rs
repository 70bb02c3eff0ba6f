//! Cognitive-distortion matcher.
//!
//! Every pattern in the table is tested independently; any subset may
//! match. Matches come back in table order, not ranked.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, warn};

use super::catalog::{DistortionCatalog, STANDARD_TRIGGERS};
use crate::domain::triggers::{normalize, TriggerTable, TriggerTableError};

static STANDARD_TABLE: Lazy<TriggerTable> = Lazy::new(|| TriggerTable::from_static(STANDARD_TRIGGERS));

/// The built-in distortion trigger table.
pub fn standard_distortion_table() -> &'static TriggerTable {
    &STANDARD_TABLE
}

/// One matched pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistortionMatch {
    pub pattern_name: String,
    pub description: String,
    pub example_challenge: String,
}

/// Stateless matcher over a validated table and catalog.
#[derive(Debug, Clone)]
pub struct DistortionMatcher {
    table: TriggerTable,
    catalog: DistortionCatalog,
}

impl DistortionMatcher {
    pub fn standard() -> Self {
        Self {
            table: standard_distortion_table().clone(),
            catalog: DistortionCatalog::standard(),
        }
    }

    /// Builds a matcher; every table pattern must exist in the catalog.
    pub fn new(table: TriggerTable, catalog: DistortionCatalog) -> Result<Self, TriggerTableError> {
        catalog.check_table(&table)?;
        Ok(Self { table, catalog })
    }

    /// Returns all patterns present in `text`, in table order.
    pub fn find(&self, text: &str) -> Vec<DistortionMatch> {
        let lowered = normalize(text);
        self.table
            .entries()
            .iter()
            .filter(|entry| entry.is_present(&lowered))
            .filter_map(|entry| self.catalog.describe(&entry.name))
            .collect()
    }

    pub fn catalog(&self) -> &DistortionCatalog {
        &self.catalog
    }
}

/// Distortion screen with a fault boundary. A degraded screen reports no
/// matches.
#[derive(Debug, Clone)]
pub enum DistortionScreen {
    Ready(DistortionMatcher),
    Degraded { reason: String },
}

impl DistortionScreen {
    pub fn standard() -> Self {
        DistortionScreen::Ready(DistortionMatcher::standard())
    }

    /// Screen over a table that may have failed to load.
    pub fn from_table(table: Result<TriggerTable, TriggerTableError>) -> Self {
        match table.and_then(|t| DistortionMatcher::new(t, DistortionCatalog::standard())) {
            Ok(matcher) => DistortionScreen::Ready(matcher),
            Err(e) => {
                error!(error = %e, "distortion trigger table rejected, screen degraded");
                DistortionScreen::Degraded {
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
                debug!(path = %path.display(), "loading custom distortion trigger table");
                Self::from_table(TriggerTable::from_yaml_file(path))
            }
        }
    }

    pub fn identify(&self, text: &str) -> Vec<DistortionMatch> {
        match self {
            DistortionScreen::Ready(matcher) => matcher.find(text),
            DistortionScreen::Degraded { reason } => {
                warn!(%reason, "distortion screen degraded, reporting no matches");
                Vec::new()
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, DistortionScreen::Degraded { .. })
    }
}

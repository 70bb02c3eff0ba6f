//! Progress summary over saved thought records.

use serde::Serialize;

use super::ThoughtRecord;
use crate::domain::foundation::Stored;

/// Number of records returned as "recent".
pub const RECENT_RECORD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CbtProgress {
    pub total_records: usize,
    /// Mean drop in intensity across all records.
    pub average_improvement: f64,
    /// Share of records with a positive improvement, 0-100.
    pub success_rate: f64,
    /// Newest first.
    pub recent: Vec<Stored<ThoughtRecord>>,
}

impl CbtProgress {
    pub fn summarize(mut records: Vec<Stored<ThoughtRecord>>) -> Self {
        let total_records = records.len();
        if total_records == 0 {
            return Self {
                total_records,
                average_improvement: 0.0,
                success_rate: 0.0,
                recent: Vec::new(),
            };
        }

        let improvements: Vec<i8> = records.iter().map(|r| r.item.improvement()).collect();
        let sum: i64 = improvements.iter().map(|&i| i64::from(i)).sum();
        let successful = improvements.iter().filter(|&&i| i > 0).count();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(RECENT_RECORD_COUNT);

        Self {
            total_records,
            average_improvement: sum as f64 / total_records as f64,
            success_rate: successful as f64 / total_records as f64 * 100.0,
            recent: records,
        }
    }
}

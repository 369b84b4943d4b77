//! Day-by-day calorie progress for trend display.
//!
//! History is append-only. Each record gets the next day number; nothing
//! is deduplicated, so callers decide when a day is worth recording.

use crate::ProgressRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Ordered series of progress records
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgressHistory {
    records: Vec<ProgressRecord>,
}

impl ProgressHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with `day = len + 1`
    pub fn record(&mut self, total_calories: f64, goal_calories: u32) -> &ProgressRecord {
        let day = self.records.len() as u32 + 1;
        self.records.push(ProgressRecord {
            day,
            total_calories,
            goal_calories,
            recorded_at: Utc::now(),
        });

        tracing::info!(
            "Recorded day {}: {} / {} kcal",
            day,
            total_calories,
            goal_calories
        );
        &self.records[self.records.len() - 1]
    }

    /// All records in append order
    pub fn series(&self) -> &[ProgressRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ProgressRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

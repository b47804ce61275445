use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::battle::BattleSummary;

/// A finished battle, stamped so it can be saved and read back later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub id: String,
    pub timestamp: String,
    pub summary: BattleSummary,
}

impl BattleReport {
    pub fn new(id: impl Into<String>, summary: BattleSummary) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            summary,
        }
    }

    /// One-line description used by `battle report`.
    pub fn headline(&self) -> String {
        let summary = &self.summary;
        format!(
            "Report {} (seed {}): {} beat {} in {} turns for ${:.2}",
            self.id,
            summary.seed,
            summary.player,
            summary.rival,
            summary.turn_count,
            summary.reward
        )
    }
}

//! Derived report models.
//!
//! These are recomputed from a roster on demand and never stored, except as
//! part of an explicit export.

use serde::{Deserialize, Serialize};

use super::{Category, CategoryCounts, PlayerRecord};

/// Formatted per-player view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player: String,
    pub goals: u32,
    pub assists: u32,
    /// Goals per 90, two decimals
    pub efficiency: String,
    /// goals + assists
    pub total_contribution: u64,
}

/// A player record together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub efficiency: f64,
    pub category: Category,
}

/// Holder of the highest efficiency seen so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaxEfficiency {
    /// Empty until some player beats zero
    pub name: String,
    pub value: f64,
}

/// Team-wide aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_goals: u64,
    pub total_assists: u64,
    pub players_by_category: CategoryCounts,
    pub max_efficiency: MaxEfficiency,
}

/// One entry of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub name: String,
    /// Two decimals
    pub efficiency: String,
}

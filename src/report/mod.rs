//! Dashboard assembly.
//!
//! Runs the full pipeline over the current roster and collects every
//! section a renderer needs.

use serde::{Deserialize, Serialize};

use crate::calculate::{analyze, to_report, top_by_efficiency, with_fewer_cards_than, with_min_goals};
use crate::config::ReportConfig;
use crate::models::{AnalysisSummary, PlayerRecord, PlayerReport, PlayerStats, RankedPlayer};
use crate::roster::{RosterOrigin, RosterState};
use crate::transform::{filter_iterative, filter_recursive, map_each, process_with_callback, TransformError};

/// Every derived view of one roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Loaded team, `None` for the built-in roster
    pub team: Option<String>,
    pub origin: RosterOrigin,

    /// Formatted view of every player
    pub transformed: Vec<PlayerReport>,

    /// Names of players at or above `min_goals`
    pub top_scorers: Vec<String>,
    pub min_goals: u32,

    pub analysis: AnalysisSummary,

    /// Per-player efficiency and category
    pub categories: Vec<PlayerStats>,

    /// Players under `max_cards`
    pub disciplined: Vec<PlayerReport>,
    pub max_cards: u32,

    /// Most efficient players, best first
    pub top: Vec<RankedPlayer>,
}

/// Compute the dashboard for the roster held in `state`.
pub fn build_dashboard(state: &RosterState, config: &ReportConfig) -> Result<DashboardReport, TransformError> {
    let players = state.players();

    let transformed = map_each(players, |p, _, _| to_report(p));

    let top_scorers = filter_recursive(players, with_min_goals(config.min_goals))
        .into_iter()
        .map(|p| p.name)
        .collect();

    let disciplined_players = filter_iterative(players, with_fewer_cards_than(config.max_cards));
    let disciplined = process_with_callback(
        Some(disciplined_players.as_slice()),
        Some(|p: &PlayerRecord, _: usize, _: &[PlayerRecord], _: Option<&()>| to_report(p)),
        None,
    )?;

    Ok(DashboardReport {
        team: state.team().map(str::to_string),
        origin: state.origin(),
        transformed,
        top_scorers,
        min_goals: config.min_goals,
        analysis: analyze(players),
        categories: state.stats().collect(),
        disciplined,
        max_cards: config.max_cards,
        top: top_by_efficiency(players, config.top_n),
    })
}

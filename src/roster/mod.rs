//! Roster state.
//!
//! The roster is owned by a single [`RosterState`] that callers pass around
//! explicitly. It is only ever replaced as a whole.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::PlayerRecord;
use crate::transform::StatsGenerator;

/// Built-in roster used until a team is loaded.
pub fn seed_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::new(1, "Messi", 25, 15, 2700, 2),
        PlayerRecord::new(2, "Ronaldo", 30, 8, 2900, 1),
        PlayerRecord::new(3, "Neymar", 18, 20, 2300, 5),
        PlayerRecord::new(4, "Mbappe", 22, 12, 2800, 0),
        PlayerRecord::new(5, "Lewandowski", 35, 5, 3000, 3),
        PlayerRecord::new(6, "De Bruyne", 10, 25, 2600, 2),
    ]
}

/// Where the current roster came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterOrigin {
    Seed,
    Api,
    Fallback,
}

impl std::fmt::Display for RosterOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterOrigin::Seed => write!(f, "seed"),
            RosterOrigin::Api => write!(f, "api"),
            RosterOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// Single-writer holder of the active roster.
#[derive(Debug)]
pub struct RosterState {
    players: Vec<PlayerRecord>,
    team: Option<String>,
    origin: RosterOrigin,
    /// Number of live [`LoadingGuard`]s
    loading: Arc<AtomicUsize>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl RosterState {
    /// State holding the built-in roster.
    pub fn seeded() -> Self {
        Self {
            players: seed_players(),
            team: None,
            origin: RosterOrigin::Seed,
            loading: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn origin(&self) -> RosterOrigin {
        self.origin
    }

    /// Swap in a whole new roster for `team`.
    pub fn replace(
        &mut self,
        team: impl Into<String>,
        players: Vec<PlayerRecord>,
        origin: RosterOrigin,
    ) {
        let team = team.into();
        debug!(
            "Replacing roster with {} players for {} ({})",
            players.len(),
            team,
            origin
        );
        self.players = players;
        self.team = Some(team);
        self.origin = origin;
    }

    /// Fresh lazy stats sequence over the current roster.
    pub fn stats(&self) -> StatsGenerator<'_> {
        StatsGenerator::new(&self.players)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst) > 0
    }

    /// Read-only handle on the loading flag, for whoever shows progress.
    pub fn loading_indicator(&self) -> LoadingIndicator {
        LoadingIndicator {
            flag: Arc::clone(&self.loading),
        }
    }

    /// Raise the loading flag until the returned guard is dropped.
    ///
    /// Guards nest: the flag stays up until the last one is gone.
    pub fn begin_loading(&self) -> LoadingGuard {
        self.loading.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            flag: Arc::clone(&self.loading),
        }
    }
}

/// Shared view of whether a load is in progress.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    flag: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn is_active(&self) -> bool {
        self.flag.load(Ordering::SeqCst) > 0
    }
}

/// Releases its hold on the loading flag on drop, whichever way the load ends.
#[derive(Debug)]
#[must_use = "the loading flag is released as soon as the guard is dropped"]
pub struct LoadingGuard {
    flag: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.fetch_sub(1, Ordering::SeqCst);
    }
}

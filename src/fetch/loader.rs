//! Team loading with a single fallback policy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::{PlayerGenerator, RosterSource, Team, TeamCatalog};
use crate::models::PlayerRecord;
use crate::roster::{RosterOrigin, RosterState};

/// Errors surfaced to the caller of a load.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Team not available: {0}")]
    UnknownTeam(String),
}

/// What a successful load installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOutcome {
    pub team: String,
    pub league: String,
    pub origin: RosterOrigin,
    pub player_count: usize,
}

/// Loads team rosters into a [`RosterState`].
///
/// Tries the remote source when one is configured; any failure there, or no
/// source at all, installs a roster generated from the catalog's names.
pub struct RosterLoader {
    catalog: TeamCatalog,
    source: Option<Arc<dyn RosterSource>>,
    generator: Arc<PlayerGenerator>,
}

impl RosterLoader {
    pub fn new(
        catalog: TeamCatalog,
        source: Option<Arc<dyn RosterSource>>,
        generator: Arc<PlayerGenerator>,
    ) -> Self {
        Self {
            catalog,
            source,
            generator,
        }
    }

    /// Loader that never touches the network.
    pub fn offline(catalog: TeamCatalog, generator: Arc<PlayerGenerator>) -> Self {
        Self::new(catalog, None, generator)
    }

    pub fn catalog(&self) -> &TeamCatalog {
        &self.catalog
    }

    /// Replace the roster in `state` with one for `team_name`.
    ///
    /// Only an unknown team is an error. The loading flag is raised for the
    /// duration of the call and cleared on every exit path.
    pub async fn load_team(
        &self,
        state: &mut RosterState,
        team_name: &str,
    ) -> Result<LoadOutcome, LoadError> {
        let team = self
            .catalog
            .find(team_name)
            .ok_or_else(|| LoadError::UnknownTeam(team_name.to_string()))?
            .clone();

        let _loading = state.begin_loading();

        let (players, origin) = match self.fetch_remote(&team).await {
            Some(players) => (players, RosterOrigin::Api),
            None => (self.generator.generate_roster(&team.players), RosterOrigin::Fallback),
        };

        let outcome = LoadOutcome {
            team: team.name.clone(),
            league: team.league.clone(),
            origin,
            player_count: players.len(),
        };
        state.replace(team.name, players, origin);

        info!(
            "Loaded {} ({} players, {})",
            outcome.team, outcome.player_count, outcome.origin
        );
        Ok(outcome)
    }

    /// Remote roster, or `None` when the fallback should be used.
    async fn fetch_remote(&self, team: &Team) -> Option<Vec<PlayerRecord>> {
        let source = self.source.as_ref()?;

        match source.fetch_roster(team).await {
            Ok(players) if !players.is_empty() => Some(players),
            Ok(_) => {
                warn!("{} returned an empty roster for {}, using fallback", source.name(), team.name);
                None
            }
            Err(e) => {
                warn!("{} unavailable for {}: {}, using fallback", source.name(), team.name, e);
                None
            }
        }
    }
}

//! Remote roster loading.
//!
//! Asks TheSportsDB whether a team is available and builds a substitute
//! roster from the team's known player names. Every failure along the way is
//! absorbed by [`RosterLoader`], which falls back to a generated roster.

mod generator;
mod loader;
mod teams;

pub use generator::PlayerGenerator;
pub use loader::{LoadError, LoadOutcome, RosterLoader};
pub use teams::{Team, TeamCatalog};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::PlayerRecord;

/// Errors that can occur while fetching a roster.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No results for team {0}")]
    EmptyPayload(String),
}

/// Configuration for the HTTP roster source.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// TheSportsDB API root, e.g. `https://www.thesportsdb.com/api/v1/json/3/`
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.thesportsdb.com/api/v1/json/3/".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("squad-stats/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Anything that can produce a roster for a team.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Source identifier for logging.
    fn name(&self) -> &'static str;

    /// Fetch a roster for `team`.
    async fn fetch_roster(&self, team: &Team) -> Result<Vec<PlayerRecord>, FetchError>;
}

/// Roster source backed by TheSportsDB's recent-events endpoint.
pub struct SportsDbSource {
    client: Client,
    base_url: Url,
    generator: Arc<PlayerGenerator>,
}

impl SportsDbSource {
    pub fn new(config: FetcherConfig, generator: Arc<PlayerGenerator>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("squad-stats/0.1.0")),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::parse_base_url(&config.base_url)?,
            generator,
        })
    }

    /// Parse the API root, forcing a trailing slash so joins append.
    fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Endpoint listing a team's most recent events.
    fn events_url(&self, team: &Team) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join("eventslast.php")
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("id", &team.api_id.to_string());
        Ok(url)
    }

    /// Turn an events payload into a roster.
    ///
    /// The payload only proves the team is live; the numbers themselves are
    /// generated for the team's known player names.
    fn roster_from_payload(&self, payload: &Value, team: &Team) -> Result<Vec<PlayerRecord>, FetchError> {
        let has_results = payload
            .get("results")
            .and_then(Value::as_array)
            .is_some_and(|results| !results.is_empty());

        if !has_results || team.players.is_empty() {
            return Err(FetchError::EmptyPayload(team.name.clone()));
        }

        Ok(self.generator.generate_roster(&team.players))
    }
}

#[async_trait]
impl RosterSource for SportsDbSource {
    fn name(&self) -> &'static str {
        "thesportsdb"
    }

    async fn fetch_roster(&self, team: &Team) -> Result<Vec<PlayerRecord>, FetchError> {
        let url = self.events_url(team)?;
        info!("Fetching {}", url);

        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        debug!("Received {} bytes for {}", body.len(), team.name);

        self.roster_from_payload(&payload, team)
    }
}

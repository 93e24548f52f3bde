//! JSON export of the roster and its analysis.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::calculate::analyze;
use crate::models::{AnalysisSummary, PlayerRecord};
use crate::roster::RosterState;

/// Default download name for exports.
pub const DEFAULT_EXPORT_FILE: &str = "player-analysis.json";

/// Errors that can occur while exporting or importing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot written by an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub team: Option<String>,
    pub players: Vec<PlayerRecord>,
    pub analysis: AnalysisSummary,
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// Snapshot the roster in `state` with a freshly computed analysis.
    pub fn from_state(state: &RosterState) -> Self {
        Self::at(state, Utc::now())
    }

    pub fn at(state: &RosterState, exported_at: DateTime<Utc>) -> Self {
        Self {
            team: state.team().map(str::to_string),
            players: state.players().to_vec(),
            analysis: analyze(state.players()),
            exported_at,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf, ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_json()?.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Exported {} players to {:?}", self.players.len(), path);
        Ok(path.to_path_buf())
    }

    pub fn read_from(path: &Path) -> Result<Self, ExportError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterOrigin;
    use tempfile::TempDir;

    #[test]
    fn test_export_round_trips_totals() {
        let doc = ExportDocument::from_state(&RosterState::seeded());
        let parsed = ExportDocument::from_json(&doc.to_json().unwrap()).unwrap();

        assert_eq!(parsed.analysis.total_goals, 140);
        assert_eq!(parsed.analysis.total_assists, 85);
        assert_eq!(parsed.analysis.players_by_category, doc.analysis.players_by_category);
        assert_eq!(parsed.analysis.max_efficiency.name, "Lewandowski");
        assert_eq!(parsed.players, doc.players);
        assert_eq!(parsed.exported_at, doc.exported_at);
    }

    #[test]
    fn test_export_json_shape() {
        let doc = ExportDocument::from_state(&RosterState::seeded());
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert!(json["team"].is_null());
        assert_eq!(json["players"].as_array().unwrap().len(), 6);
        assert_eq!(json["analysis"]["players_by_category"]["Elite"], 1);
        assert!(json["exported_at"].is_string());
    }

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_EXPORT_FILE);

        let mut state = RosterState::seeded();
        state.replace(
            "Arsenal",
            vec![PlayerRecord::new(1, "Bukayo Saka", 14, 11, 2900, 2)],
            RosterOrigin::Fallback,
        );
        let doc = ExportDocument::from_state(&state);

        let written = doc.write_to(&path).unwrap();
        assert_eq!(written, path);

        let read = ExportDocument::read_from(&path).unwrap();
        assert_eq!(read.team.as_deref(), Some("Arsenal"));
        assert_eq!(read.analysis.total_goals, 14);
        assert_eq!(read.analysis.total_assists, 11);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ExportDocument::read_from(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[test]
    fn test_read_malformed_file() {
        assert!(matches!(
            ExportDocument::from_json("{ not json"),
            Err(ExportError::Json(_))
        ));
    }
}

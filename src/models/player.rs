//! Player records.

use serde::{Deserialize, Serialize};

/// Field position. Only present on generated roster entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
}

impl Position {
    /// Position implied by a player's slot in a team's name list.
    ///
    /// The first three names are forwards, the next five midfielders,
    /// everyone after that a defender.
    pub fn from_index(index: usize) -> Self {
        if index < 3 {
            Position::Forward
        } else if index < 8 {
            Position::Midfielder
        } else {
            Position::Defender
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Forward => write!(f, "forward"),
            Position::Midfielder => write!(f, "midfielder"),
            Position::Defender => write!(f, "defender"),
        }
    }
}

/// A single player's season totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// 1-based, unique within a roster
    pub id: u32,

    pub name: String,

    pub goals: u32,

    pub assists: u32,

    /// May be zero; metrics treat that as zero efficiency
    pub minutes_played: u32,

    /// Yellow and red cards combined
    pub cards: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl PlayerRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        goals: u32,
        assists: u32,
        minutes_played: u32,
        cards: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            goals,
            assists,
            minutes_played,
            cards,
            position: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_index() {
        assert_eq!(Position::from_index(0), Position::Forward);
        assert_eq!(Position::from_index(2), Position::Forward);
        assert_eq!(Position::from_index(3), Position::Midfielder);
        assert_eq!(Position::from_index(7), Position::Midfielder);
        assert_eq!(Position::from_index(8), Position::Defender);
        assert_eq!(Position::from_index(20), Position::Defender);
    }

    #[test]
    fn test_record_without_position_omits_field() {
        let player = PlayerRecord::new(1, "Messi", 25, 15, 2700, 2);
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["minutes_played"], 2700);
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_record_with_position_serialization() {
        let player = PlayerRecord::new(1, "Rodri", 4, 9, 2500, 3).with_position(Position::Midfielder);
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"position\":\"midfielder\""));

        let parsed: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, player);
    }
}

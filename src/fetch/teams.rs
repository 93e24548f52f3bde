//! Team catalog.
//!
//! Each team carries its TheSportsDB id plus a fixed list of player names
//! used to build substitute rosters.

use serde::{Deserialize, Serialize};

/// A team that can be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub api_id: u32,
    pub league: String,
    pub players: Vec<String>,
}

impl Team {
    fn new(name: &str, api_id: u32, league: &str, players: [&str; 5]) -> Self {
        Self {
            name: name.to_string(),
            api_id,
            league: league.to_string(),
            players: players.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The set of teams available for loading, in display order.
#[derive(Debug, Clone)]
pub struct TeamCatalog {
    teams: Vec<Team>,
}

impl Default for TeamCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TeamCatalog {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn builtin() -> Self {
        const EPL: &str = "English Premier League";
        Self::new(vec![
            Team::new(
                "Manchester United",
                133612,
                EPL,
                ["Bruno Fernandes", "Harry Maguire", "Aaron Wan-Bissaka", "Luke Shaw", "David de Gea"],
            ),
            Team::new(
                "Manchester City",
                133613,
                EPL,
                ["Erling Haaland", "Kevin De Bruyne", "Rodri", "Manuel Akanji", "Ederson"],
            ),
            Team::new(
                "Liverpool",
                133602,
                EPL,
                ["Mohamed Salah", "Virgil van Dijk", "Alisson", "Luis Diaz", "Andy Robertson"],
            ),
            Team::new(
                "Arsenal",
                133604,
                EPL,
                ["Bukayo Saka", "Martin Odegaard", "Gabriel Jesus", "William Saliba", "Aaron Ramsdale"],
            ),
            Team::new(
                "Chelsea",
                133610,
                EPL,
                ["Kai Havertz", "Mason Mount", "Reece James", "Thiago Silva", "Kepa Arrizabalaga"],
            ),
            Team::new(
                "Real Madrid",
                133738,
                "Spanish La Liga",
                ["Karim Benzema", "Vinicius Jr", "Luka Modric", "Toni Kroos", "Eder Militao"],
            ),
            Team::new(
                "Barcelona",
                133739,
                "Spanish La Liga",
                ["Robert Lewandowski", "Gavi", "Pedri", "Jules Kounde", "Ousmane Dembele"],
            ),
            Team::new(
                "Paris Saint-Germain",
                133714,
                "French Ligue 1",
                ["Kylian Mbappe", "Neymar", "Marco Verratti", "Presnel Kimpembe", "Achraf Hakimi"],
            ),
            Team::new(
                "Bayern Munich",
                133664,
                "German Bundesliga",
                ["Jamal Musiala", "Serge Gnabry", "Leroy Sane", "Joshua Kimmich", "Manuel Neuer"],
            ),
            Team::new(
                "Juventus",
                133676,
                "Italian Serie A",
                ["Dusan Vlahovic", "Juan Cuadrado", "Paulo Dybala", "Leonardo Bonucci", "Wojciech Szczesny"],
            ),
        ])
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Look a team up by exact name, then case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Team> {
        let name = name.trim();
        self.teams
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = TeamCatalog::builtin();

        assert_eq!(catalog.teams().len(), 10);
        assert!(catalog.teams().iter().all(|t| t.players.len() == 5));
        assert_eq!(catalog.teams()[0].name, "Manchester United");
    }

    #[test]
    fn test_find_exact_and_case_insensitive() {
        let catalog = TeamCatalog::builtin();

        let city = catalog.find("Manchester City").unwrap();
        assert_eq!(city.players[0], "Erling Haaland");

        let psg = catalog.find("  paris saint-germain ").unwrap();
        assert_eq!(psg.league, "French Ligue 1");
    }

    #[test]
    fn test_find_unknown() {
        assert!(TeamCatalog::builtin().find("Atlantis FC").is_none());
    }
}

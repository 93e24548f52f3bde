//! Substitute player statistics.
//!
//! Neither the API nor the catalog carries real season numbers, so rosters
//! are filled with plausible figures drawn per position.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{PlayerRecord, Position};

/// Random stat source for generated rosters.
#[derive(Debug)]
pub struct PlayerGenerator {
    rng: Mutex<ChaCha8Rng>,
}

impl PlayerGenerator {
    /// Deterministic generator; same seed, same rosters.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Stats for the player at `index` in a team's name list.
    pub fn generate(&self, name: &str, index: usize) -> PlayerRecord {
        let position = Position::from_index(index);
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let goals = match position {
            Position::Forward => rng.gen_range(5..40),
            Position::Midfielder => rng.gen_range(0..15),
            Position::Defender => rng.gen_range(0..4),
        };
        let assists = match position {
            Position::Midfielder => rng.gen_range(0..20),
            Position::Forward => rng.gen_range(0..12),
            Position::Defender => rng.gen_range(0..8),
        };

        PlayerRecord::new(
            index as u32 + 1,
            name,
            goals,
            assists,
            rng.gen_range(1200..3000),
            rng.gen_range(0..4),
        )
        .with_position(position)
    }

    pub fn generate_roster(&self, names: &[String]) -> Vec<PlayerRecord> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| self.generate(name, index))
            .collect()
    }
}

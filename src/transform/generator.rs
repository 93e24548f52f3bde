//! Lazy per-player stats.

use std::iter::FusedIterator;

use crate::calculate::{classify, efficiency};
use crate::models::{PlayerRecord, PlayerStats};

/// One-shot iterator yielding each player with efficiency and category.
///
/// Values are computed as they are pulled. Once exhausted it keeps returning
/// `None`; build a new generator from the roster to go again.
#[derive(Debug)]
pub struct StatsGenerator<'a> {
    players: std::slice::Iter<'a, PlayerRecord>,
}

impl<'a> StatsGenerator<'a> {
    pub fn new(players: &'a [PlayerRecord]) -> Self {
        Self {
            players: players.iter(),
        }
    }
}

impl Iterator for StatsGenerator<'_> {
    type Item = PlayerStats;

    fn next(&mut self) -> Option<Self::Item> {
        let player = self.players.next()?;
        let efficiency = efficiency(player);
        Some(PlayerStats {
            player: player.clone(),
            efficiency,
            category: classify(efficiency),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.players.size_hint()
    }
}

impl ExactSizeIterator for StatsGenerator<'_> {}

impl FusedIterator for StatsGenerator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::roster::seed_players;

    #[test]
    fn test_yields_one_item_per_player_in_order() {
        let players = seed_players();
        let names: Vec<String> = StatsGenerator::new(&players)
            .map(|s| s.player.name)
            .collect();

        assert_eq!(
            names,
            vec!["Messi", "Ronaldo", "Neymar", "Mbappe", "Lewandowski", "De Bruyne"]
        );
    }

    #[test]
    fn test_items_carry_metrics() {
        let players = seed_players();
        let lewandowski = StatsGenerator::new(&players)
            .find(|s| s.player.name == "Lewandowski")
            .unwrap();

        assert!((lewandowski.efficiency - 1.05).abs() < 1e-9);
        assert_eq!(lewandowski.category, Category::Elite);
        assert_eq!(lewandowski.player.goals, 35);
    }

    #[test]
    fn test_stays_exhausted() {
        let players = seed_players();
        let mut generator = StatsGenerator::new(&players[..2]);

        assert_eq!(generator.len(), 2);
        assert!(generator.next().is_some());
        assert!(generator.next().is_some());
        assert!(generator.next().is_none());
        assert!(generator.next().is_none());
        assert_eq!(generator.len(), 0);
    }

    #[test]
    fn test_fresh_generator_restarts() {
        let players = seed_players();
        let first: Vec<_> = StatsGenerator::new(&players).collect();
        let second: Vec<_> = StatsGenerator::new(&players).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(StatsGenerator::new(&[]).count(), 0);
    }
}

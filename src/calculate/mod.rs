//! Statistics calculation engine.
//!
//! Computes derived metrics from a roster:
//! - Goals-per-90 efficiency and its category
//! - Team aggregate (totals, category spread, most efficient player)
//! - Top-N efficiency ranking
//! - Formatted per-player reports

use crate::models::{
    AnalysisSummary, Category, MaxEfficiency, PlayerRecord, PlayerReport, RankedPlayer,
};
use crate::transform::reduce;

/// Goals per 90 minutes. Zero when the player has no minutes.
pub fn efficiency(player: &PlayerRecord) -> f64 {
    if player.minutes_played == 0 {
        0.0
    } else {
        (player.goals as f64 * 90.0) / player.minutes_played as f64
    }
}

/// Calculate category from efficiency.
pub fn classify(efficiency: f64) -> Category {
    Category::from_efficiency(efficiency)
}

/// Two-decimal rendering used by every report.
pub fn format_efficiency(value: f64) -> String {
    format!("{:.2}", value)
}

/// Predicate factory: player scored at least `minimum` goals.
pub fn with_min_goals(minimum: u32) -> impl Fn(&PlayerRecord, usize, &[PlayerRecord]) -> bool {
    move |player, _, _| player.goals >= minimum
}

/// Predicate factory: player collected fewer than `limit` cards.
pub fn with_fewer_cards_than(
    limit: u32,
) -> impl Fn(&PlayerRecord, usize, &[PlayerRecord]) -> bool {
    move |player, _, _| player.cards < limit
}

/// Formatted report view of one player.
pub fn to_report(player: &PlayerRecord) -> PlayerReport {
    PlayerReport {
        player: player.name.clone(),
        goals: player.goals,
        assists: player.assists,
        efficiency: format_efficiency(efficiency(player)),
        total_contribution: u64::from(player.goals) + u64::from(player.assists),
    }
}

/// Fold the roster into team totals, category spread and the most
/// efficient player.
///
/// The leader only changes on a strictly greater efficiency, so ties keep
/// whoever was seen first.
pub fn analyze(players: &[PlayerRecord]) -> AnalysisSummary {
    reduce(
        players,
        |mut summary: AnalysisSummary, player, _, _| {
            let value = efficiency(player);

            summary.total_goals += u64::from(player.goals);
            summary.total_assists += u64::from(player.assists);
            summary.players_by_category.increment(classify(value));

            if value > summary.max_efficiency.value {
                summary.max_efficiency = MaxEfficiency {
                    name: player.name.clone(),
                    value,
                };
            }

            summary
        },
        AnalysisSummary::default(),
    )
}

/// The `n` most efficient players, best first.
///
/// Sorting is stable, so equal efficiencies keep roster order.
pub fn top_by_efficiency(players: &[PlayerRecord], n: usize) -> Vec<RankedPlayer> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| efficiency(b).total_cmp(&efficiency(a)));

    sorted
        .into_iter()
        .take(n)
        .map(|player| RankedPlayer {
            efficiency: format_efficiency(efficiency(&player)),
            name: player.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryCounts;
    use crate::roster::seed_players;
    use crate::transform::filter_recursive;
    use pretty_assertions::assert_eq;

    fn player(name: &str, goals: u32, minutes: u32) -> PlayerRecord {
        PlayerRecord::new(1, name, goals, 0, minutes, 0)
    }

    #[test]
    fn test_efficiency() {
        assert!((efficiency(&player("Lewandowski", 35, 3000)) - 1.05).abs() < 1e-9);
        assert!((efficiency(&player("Ronaldo", 30, 2900)) - 0.931).abs() < 0.001);
        assert_eq!(efficiency(&player("Nobody", 0, 900)), 0.0);
    }

    #[test]
    fn test_efficiency_zero_minutes() {
        assert_eq!(efficiency(&player("Bench", 0, 0)), 0.0);
        assert_eq!(efficiency(&player("Impossible", 4, 0)), 0.0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(1.2), Category::Elite);
        assert_eq!(classify(1.0), Category::High);
        assert_eq!(classify(0.71), Category::High);
        assert_eq!(classify(0.7), Category::Medium);
        assert_eq!(classify(0.41), Category::Medium);
        assert_eq!(classify(0.4), Category::Low);
        assert_eq!(classify(0.0), Category::Low);
    }

    #[test]
    fn test_format_efficiency() {
        assert_eq!(format_efficiency(1.05), "1.05");
        assert_eq!(format_efficiency(30.0 * 90.0 / 2900.0), "0.93");
        assert_eq!(format_efficiency(0.0), "0.00");
    }

    #[test]
    fn test_to_report() {
        let report = to_report(&PlayerRecord::new(1, "Messi", 25, 15, 2700, 2));

        assert_eq!(
            report,
            PlayerReport {
                player: "Messi".to_string(),
                goals: 25,
                assists: 15,
                efficiency: "0.83".to_string(),
                total_contribution: 40,
            }
        );
    }

    #[test]
    fn test_to_report_large_counts() {
        let report = to_report(&PlayerRecord::new(1, "Big", u32::MAX, u32::MAX, 90, 0));

        assert_eq!(report.total_contribution, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_with_min_goals() {
        let scorers = filter_recursive(&seed_players(), with_min_goals(20));
        let names: Vec<&str> = scorers.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Messi", "Ronaldo", "Mbappe", "Lewandowski"]);
    }

    #[test]
    fn test_with_fewer_cards_than() {
        let disciplined = filter_recursive(&seed_players(), with_fewer_cards_than(3));
        let names: Vec<&str> = disciplined.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Messi", "Ronaldo", "Mbappe", "De Bruyne"]);
    }

    #[test]
    fn test_analyze_seed_roster() {
        let summary = analyze(&seed_players());

        assert_eq!(summary.total_goals, 140);
        assert_eq!(summary.total_assists, 85);
        assert_eq!(summary.max_efficiency.name, "Lewandowski");
        assert!((summary.max_efficiency.value - 1.05).abs() < 1e-9);
        assert_eq!(classify(summary.max_efficiency.value), Category::Elite);
        assert_eq!(
            summary.players_by_category,
            CategoryCounts {
                elite: 1,
                high: 4,
                medium: 0,
                low: 1,
            }
        );
    }

    #[test]
    fn test_analyze_empty_roster() {
        let summary = analyze(&[]);

        assert_eq!(summary, AnalysisSummary::default());
        assert_eq!(summary.max_efficiency.name, "");
        assert_eq!(summary.players_by_category.total(), 0);
    }

    #[test]
    fn test_analyze_large_counts() {
        let players = vec![
            PlayerRecord::new(1, "Big", u32::MAX, u32::MAX, 90, 0),
            PlayerRecord::new(2, "Small", 1, 1, 90, 0),
        ];
        let summary = analyze(&players);

        assert_eq!(summary.total_goals, u64::from(u32::MAX) + 1);
        assert_eq!(summary.total_assists, u64::from(u32::MAX) + 1);
        assert_eq!(summary.max_efficiency.name, "Big");
    }

    #[test]
    fn test_analyze_first_max_wins_on_tie() {
        let players = vec![
            PlayerRecord::new(1, "First", 10, 0, 900, 0),
            PlayerRecord::new(2, "Second", 10, 0, 900, 0),
        ];

        assert_eq!(analyze(&players).max_efficiency.name, "First");
    }

    #[test]
    fn test_analyze_all_zero_efficiency_keeps_empty_leader() {
        let players = vec![player("Keeper", 0, 3000), player("Unused", 0, 0)];
        let summary = analyze(&players);

        assert_eq!(summary.max_efficiency, MaxEfficiency::default());
        assert_eq!(summary.players_by_category.low, 2);
    }

    #[test]
    fn test_top_by_efficiency_seed_roster() {
        let top = top_by_efficiency(&seed_players(), 3);

        assert_eq!(
            top,
            vec![
                RankedPlayer {
                    name: "Lewandowski".to_string(),
                    efficiency: "1.05".to_string(),
                },
                RankedPlayer {
                    name: "Ronaldo".to_string(),
                    efficiency: "0.93".to_string(),
                },
                RankedPlayer {
                    name: "Messi".to_string(),
                    efficiency: "0.83".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_top_by_efficiency_is_stable() {
        let players = vec![
            player("A", 10, 900),
            player("B", 20, 900),
            player("C", 10, 900),
            player("D", 10, 900),
        ];
        let names: Vec<String> = top_by_efficiency(&players, 4)
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_top_by_efficiency_n_larger_than_roster() {
        assert_eq!(top_by_efficiency(&seed_players(), 50).len(), 6);
        assert!(top_by_efficiency(&seed_players(), 0).is_empty());
    }

    #[test]
    fn test_top_by_efficiency_leaves_input_untouched() {
        let players = seed_players();
        let _ = top_by_efficiency(&players, 3);

        assert_eq!(players, seed_players());
    }
}

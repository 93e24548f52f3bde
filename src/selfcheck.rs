//! Built-in sanity checks of the collection transforms.

use serde::Serialize;

use crate::models::PlayerRecord;
use crate::transform::{compose, filter_recursive, map_each, reduce};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
}

fn scorer(goals: u32) -> PlayerRecord {
    PlayerRecord::new(1, "check", goals, 0, 90, 0)
}

/// Run every check and report each outcome.
pub fn run_self_checks() -> Vec<CheckResult> {
    let doubled = map_each(&[scorer(2)], |p, _, _| p.goals * 2);
    let filtered = filter_recursive(&[scorer(5), scorer(1)], |p, _, _| p.goals > 2);
    let sum = reduce(&[1, 2, 3], |acc, x, _, _| acc + x, 0);
    let increment_then_double: Vec<Box<dyn Fn(i64) -> i64>> =
        vec![Box::new(|x| x * 2), Box::new(|x| x + 1)];

    vec![
        CheckResult {
            name: "map",
            passed: doubled.first() == Some(&4),
        },
        CheckResult {
            name: "recursive filter",
            passed: filtered.len() == 1,
        },
        CheckResult {
            name: "reduce",
            passed: sum == 6,
        },
        CheckResult {
            name: "composition",
            passed: compose(increment_then_double)(3) == 8,
        },
    ]
}

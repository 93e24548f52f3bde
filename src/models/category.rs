//! Efficiency categories.

use serde::{Deserialize, Serialize};

/// Step classification of goals-per-90 efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Elite,
    High,
    Medium,
    Low,
}

impl Category {
    /// All categories, best first.
    pub const ALL: [Category; 4] = [
        Category::Elite,
        Category::High,
        Category::Medium,
        Category::Low,
    ];

    /// Classify an efficiency value.
    ///
    /// Thresholds are exclusive lower bounds checked top-down, so a value
    /// sitting exactly on a boundary lands in the lower category. NaN falls
    /// through to `Low`.
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency > 1.0 {
            Category::Elite
        } else if efficiency > 0.7 {
            Category::High
        } else if efficiency > 0.4 {
            Category::Medium
        } else {
            Category::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Elite => "Elite",
            Category::High => "High",
            Category::Medium => "Medium",
            Category::Low => "Low",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Player count per category. Every category is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(rename = "Elite")]
    pub elite: u32,
    #[serde(rename = "High")]
    pub high: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "Low")]
    pub low: u32,
}

impl CategoryCounts {
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Elite => self.elite += 1,
            Category::High => self.high += 1,
            Category::Medium => self.medium += 1,
            Category::Low => self.low += 1,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Elite => self.elite,
            Category::High => self.high,
            Category::Medium => self.medium,
            Category::Low => self.low,
        }
    }

    pub fn total(&self) -> u64 {
        [self.elite, self.high, self.medium, self.low]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_efficiency() {
        assert_eq!(Category::from_efficiency(1.05), Category::Elite);
        assert_eq!(Category::from_efficiency(0.93), Category::High);
        assert_eq!(Category::from_efficiency(0.5), Category::Medium);
        assert_eq!(Category::from_efficiency(0.1), Category::Low);
        assert_eq!(Category::from_efficiency(0.0), Category::Low);
    }

    #[test]
    fn test_boundaries_fall_into_lower_category() {
        assert_eq!(Category::from_efficiency(1.0), Category::High);
        assert_eq!(Category::from_efficiency(0.7), Category::Medium);
        assert_eq!(Category::from_efficiency(0.4), Category::Low);
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(Category::from_efficiency(f64::INFINITY), Category::Elite);
        assert_eq!(Category::from_efficiency(f64::NEG_INFINITY), Category::Low);
        assert_eq!(Category::from_efficiency(f64::NAN), Category::Low);
    }

    #[test]
    fn test_counts_serialize_every_category() {
        let counts = CategoryCounts::default();
        let json = serde_json::to_value(counts).unwrap();

        for category in Category::ALL {
            assert_eq!(json[category.as_str()], 0);
        }
    }

    #[test]
    fn test_counts_increment() {
        let mut counts = CategoryCounts::default();
        counts.increment(Category::High);
        counts.increment(Category::High);
        counts.increment(Category::Low);

        assert_eq!(counts.get(Category::High), 2);
        assert_eq!(counts.get(Category::Low), 1);
        assert_eq!(counts.get(Category::Elite), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_counts_total_does_not_overflow() {
        let counts = CategoryCounts {
            elite: u32::MAX,
            high: u32::MAX,
            medium: 1,
            low: 0,
        };

        assert_eq!(counts.total(), 2 * u64::from(u32::MAX) + 1);
    }
}

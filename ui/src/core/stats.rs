//! Reduces raw per-category counts into chart-ready percentage shares.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::variables::CategoricalVariable;

/// One raw record from the `/data` payload. The backend names the label field
/// after the source column, so it arrives as the single flattened extra entry
/// next to the two counts.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryAggregate {
    #[serde(default)]
    pub addicted: u64,
    #[serde(rename = "notAddicted", default)]
    pub not_addicted: u64,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl CategoryAggregate {
    pub fn new(category: impl Into<String>, addicted: u64, not_addicted: u64) -> Self {
        let mut extra = HashMap::new();
        extra.insert("category".to_string(), Value::String(category.into()));
        Self {
            addicted,
            not_addicted,
            extra,
        }
    }

    /// Category label, falling back to `"Unknown"` when the backend omits it.
    pub fn category(&self) -> &str {
        self.extra
            .values()
            .find_map(Value::as_str)
            .unwrap_or("Unknown")
    }
}

/// Normalized share of one category; percentages are rounded to one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub addicted_pct: f64,
    pub not_addicted_pct: f64,
}

/// Full `/data` payload: canonical column name to raw per-category counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryData(pub HashMap<String, Vec<CategoryAggregate>>);

impl CategoryData {
    /// Percentage breakdown for one categorical variable, preserving the
    /// backend's record order. An absent column yields an empty vec rather
    /// than an error so the chart degrades to nothing.
    pub fn shares_for(&self, variable: CategoricalVariable) -> Vec<CategoryShare> {
        self.0
            .get(variable.dataset_key())
            .map(|records| share_breakdown(records))
            .unwrap_or_default()
    }
}

/// Normalizes raw counts into per-category percentages. When a category has
/// any observations the two shares sum to 100; an empty category reports zero
/// for both rather than dividing by zero.
pub fn share_breakdown(records: &[CategoryAggregate]) -> Vec<CategoryShare> {
    records
        .iter()
        .map(|record| {
            let total = record.addicted + record.not_addicted;
            let (addicted_pct, not_addicted_pct) = if total > 0 {
                (
                    round1(record.addicted as f64 / total as f64 * 100.0),
                    round1(record.not_addicted as f64 / total as f64 * 100.0),
                )
            } else {
                (0.0, 0.0)
            };
            CategoryShare {
                category: record.category().to_string(),
                addicted_pct,
                not_addicted_pct,
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_breakdown_matches_known_percentages() {
        let records = vec![
            CategoryAggregate::new("male", 30, 70),
            CategoryAggregate::new("female", 20, 80),
        ];

        let shares = share_breakdown(&records);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "male");
        assert_eq!(shares[0].addicted_pct, 30.0);
        assert_eq!(shares[0].not_addicted_pct, 70.0);
        assert_eq!(shares[1].category, "female");
        assert_eq!(shares[1].addicted_pct, 20.0);
        assert_eq!(shares[1].not_addicted_pct, 80.0);
    }

    #[test]
    fn shares_sum_to_one_hundred_when_observed() {
        let records = vec![
            CategoryAggregate::new("a", 1, 2),
            CategoryAggregate::new("b", 7, 13),
            CategoryAggregate::new("c", 999, 1),
        ];

        for share in share_breakdown(&records) {
            let sum = share.addicted_pct + share.not_addicted_pct;
            assert!((sum - 100.0).abs() < 1e-9, "shares sum to {sum}");
        }
    }

    #[test]
    fn empty_category_reports_zero_shares() {
        let shares = share_breakdown(&[CategoryAggregate::new("ghost", 0, 0)]);
        assert_eq!(shares[0].addicted_pct, 0.0);
        assert_eq!(shares[0].not_addicted_pct, 0.0);
    }

    #[test]
    fn percentages_are_rounded_to_one_decimal() {
        // 1/3 addicted -> 33.3 / 66.7
        let shares = share_breakdown(&[CategoryAggregate::new("third", 1, 2)]);
        assert_eq!(shares[0].addicted_pct, 33.3);
        assert_eq!(shares[0].not_addicted_pct, 66.7);
    }

    #[test]
    fn missing_label_falls_back_to_unknown() {
        let record: CategoryAggregate =
            serde_json::from_str(r#"{"addicted": 4, "notAddicted": 6}"#).unwrap();
        assert_eq!(record.category(), "Unknown");

        let shares = share_breakdown(&[record]);
        assert_eq!(shares[0].category, "Unknown");
        assert_eq!(shares[0].addicted_pct, 40.0);
    }

    #[test]
    fn payload_label_field_is_named_after_the_column() {
        let data: CategoryData = serde_json::from_str(
            r#"{"Gender": [
                {"Gender": "male", "addicted": 30, "notAddicted": 70},
                {"Gender": "female", "addicted": 20, "notAddicted": 80}
            ]}"#,
        )
        .unwrap();

        let shares = data.shares_for(CategoricalVariable::Gender);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "male");
        assert_eq!(shares[0].addicted_pct, 30.0);
    }

    #[test]
    fn absent_variable_yields_empty_shares() {
        let data = CategoryData::default();
        assert!(data.shares_for(CategoricalVariable::Smoking).is_empty());
    }
}

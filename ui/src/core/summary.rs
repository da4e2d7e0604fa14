//! Pre-computed five-number summaries for the numeric variables.
//!
//! The backend computes the statistics; this side only looks them up. Absent
//! variables are not an error and simply render as nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::variables::NumericVariable;

/// Standard boxplot statistic set, extended with mean and sample count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub count: u64,
}

impl FiveNumberSummary {
    /// Quartile ordering invariant `min <= q1 <= median <= q3 <= max`.
    /// Vacuously true for empty groups.
    pub fn is_ordered(&self) -> bool {
        if self.count == 0 {
            return true;
        }
        self.min <= self.q1
            && self.q1 <= self.median
            && self.median <= self.q3
            && self.q3 <= self.max
    }
}

/// Summaries for one numeric variable, split by addiction status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummaries {
    pub addicted: FiveNumberSummary,
    #[serde(rename = "notAddicted")]
    pub not_addicted: FiveNumberSummary,
}

/// Full `/boxplot-data` payload: canonical column name to per-status summaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxplotData(pub HashMap<String, GroupSummaries>);

impl BoxplotData {
    /// Looks up the summaries for one numeric variable via its canonical
    /// column name. Returns `None` when the payload is empty or the column is
    /// missing; no statistics are computed here.
    pub fn for_variable(&self, variable: NumericVariable) -> Option<&GroupSummaries> {
        self.0.get(variable.dataset_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(min: f64, q1: f64, median: f64, q3: f64, max: f64, count: u64) -> FiveNumberSummary {
        FiveNumberSummary {
            min,
            q1,
            median,
            q3,
            max,
            mean: (min + max) / 2.0,
            count,
        }
    }

    #[test]
    fn ordering_invariant_holds_for_sorted_quartiles() {
        assert!(summary(18.0, 24.0, 31.0, 45.0, 67.0, 120).is_ordered());
    }

    #[test]
    fn ordering_invariant_rejects_swapped_quartiles() {
        assert!(!summary(18.0, 45.0, 31.0, 24.0, 67.0, 120).is_ordered());
    }

    #[test]
    fn ordering_invariant_is_vacuous_for_empty_groups() {
        assert!(summary(5.0, 1.0, 9.0, 2.0, 0.0, 0).is_ordered());
    }

    #[test]
    fn empty_payload_yields_no_summaries() {
        let data = BoxplotData::default();
        assert!(data.for_variable(NumericVariable::Age).is_none());
    }

    #[test]
    fn accessor_maps_internal_key_to_canonical_name() {
        let payload = r#"{
            "Prescription Duration": {
                "addicted": {"min": 5, "q1": 30, "median": 90, "q3": 160, "max": 365, "mean": 104.2, "count": 48},
                "notAddicted": {"min": 1, "q1": 7, "median": 14, "q3": 30, "max": 120, "mean": 22.8, "count": 152}
            }
        }"#;
        let data: BoxplotData = serde_json::from_str(payload).unwrap();

        let groups = data
            .for_variable(NumericVariable::PrescriptionDuration)
            .expect("duration summaries present");
        assert_eq!(groups.addicted.median, 90.0);
        assert_eq!(groups.not_addicted.count, 152);
        assert!(groups.addicted.is_ordered());
        assert!(groups.not_addicted.is_ordered());

        // Other variables are absent from this payload.
        assert!(data.for_variable(NumericVariable::Age).is_none());
    }
}

//! Closed enumerations of the dashboard's variable sets.
//!
//! The backend keys its payloads by display-style column names (e.g.
//! `"Prescription Duration"`), while form inputs and selector state use
//! camelCase field keys (e.g. `prescriptionDuration`). These enums pin both
//! spellings in one place so lookups cannot drift apart.

/// Categorical columns available on the bar-chart side of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalVariable {
    Gender,
    EmploymentStatus,
    Alcohol,
    Smoking,
    Depression,
    Anxiety,
    Sleeplessness,
    Feverish,
    PrescriptionDrug,
}

impl CategoricalVariable {
    pub const ALL: [CategoricalVariable; 9] = [
        CategoricalVariable::Gender,
        CategoricalVariable::EmploymentStatus,
        CategoricalVariable::Alcohol,
        CategoricalVariable::Smoking,
        CategoricalVariable::Depression,
        CategoricalVariable::Anxiety,
        CategoricalVariable::Sleeplessness,
        CategoricalVariable::Feverish,
        CategoricalVariable::PrescriptionDrug,
    ];

    /// Internal field key, shared with the screening form.
    pub fn key(self) -> &'static str {
        match self {
            CategoricalVariable::Gender => "gender",
            CategoricalVariable::EmploymentStatus => "employmentStatus",
            CategoricalVariable::Alcohol => "alcohol",
            CategoricalVariable::Smoking => "smoking",
            CategoricalVariable::Depression => "depression",
            CategoricalVariable::Anxiety => "anxiety",
            CategoricalVariable::Sleeplessness => "sleeplessness",
            CategoricalVariable::Feverish => "feverish",
            CategoricalVariable::PrescriptionDrug => "prescriptionDrug",
        }
    }

    /// Canonical column name used as the key in the `/data` payload.
    pub fn dataset_key(self) -> &'static str {
        match self {
            CategoricalVariable::Gender => "Gender",
            CategoricalVariable::EmploymentStatus => "Employment Status",
            CategoricalVariable::Alcohol => "Alcohol",
            CategoricalVariable::Smoking => "Smoking",
            CategoricalVariable::Depression => "Depression",
            CategoricalVariable::Anxiety => "Anxiety",
            CategoricalVariable::Sleeplessness => "Sleeplessness",
            CategoricalVariable::Feverish => "Feverish",
            CategoricalVariable::PrescriptionDrug => "Prescription Drug Used",
        }
    }

    /// Label shown in the selector dropdown.
    pub fn label(self) -> &'static str {
        match self {
            CategoricalVariable::Gender => "Gender",
            CategoricalVariable::EmploymentStatus => "Employment Status",
            CategoricalVariable::Alcohol => "Alcohol Use",
            CategoricalVariable::Smoking => "Smoking",
            CategoricalVariable::Depression => "Depression",
            CategoricalVariable::Anxiety => "Anxiety",
            CategoricalVariable::Sleeplessness => "Sleeplessness",
            CategoricalVariable::Feverish => "Feverish",
            CategoricalVariable::PrescriptionDrug => "Prescription Drug",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variable| variable.key() == key)
    }
}

/// Numeric columns available on the boxplot side of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericVariable {
    Age,
    PrescriptionDuration,
    DaysSinceFirstUse,
}

impl NumericVariable {
    pub const ALL: [NumericVariable; 3] = [
        NumericVariable::Age,
        NumericVariable::PrescriptionDuration,
        NumericVariable::DaysSinceFirstUse,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NumericVariable::Age => "age",
            NumericVariable::PrescriptionDuration => "prescriptionDuration",
            NumericVariable::DaysSinceFirstUse => "daysSinceFirstUse",
        }
    }

    /// Canonical column name used as the key in the `/boxplot-data` payload.
    /// For the numeric set this doubles as the display label.
    pub fn dataset_key(self) -> &'static str {
        match self {
            NumericVariable::Age => "Age",
            NumericVariable::PrescriptionDuration => "Prescription Duration",
            NumericVariable::DaysSinceFirstUse => "Days Since First Use",
        }
    }

    pub fn label(self) -> &'static str {
        self.dataset_key()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variable| variable.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for variable in CategoricalVariable::ALL {
            assert_eq!(CategoricalVariable::from_key(variable.key()), Some(variable));
        }
        for variable in NumericVariable::ALL {
            assert_eq!(NumericVariable::from_key(variable.key()), Some(variable));
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert_eq!(CategoricalVariable::from_key("bmi"), None);
        assert_eq!(NumericVariable::from_key(""), None);
        // Canonical names are not accepted as internal keys.
        assert_eq!(NumericVariable::from_key("Prescription Duration"), None);
    }
}

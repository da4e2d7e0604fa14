//! Heuristic opioid-risk scorer, run client-side on form submit.
//!
//! The displayed score mixes in uniform jitter so repeated demo submissions
//! do not look canned. Production draws are intentionally non-reproducible;
//! the jitter source is injectable so tests (or a seeded demo) can pin it.

use rand::Rng;

/// Displayed scores never exceed this, regardless of indicator count.
pub const SCORE_CAP: f64 = 95.0;

const POINTS_PER_INDICATOR: f64 = 15.0;

/// Discretized scorer output. Ordering follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    fn from_indicators(indicators: usize) -> Self {
        if indicators >= 5 {
            RiskLevel::High
        } else if indicators >= 3 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Result of one assessment. Never persisted; lives only inside the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: f64,
}

/// Questionnaire state. All twelve answers are held as raw strings exactly as
/// entered, mutated only through [`ScreeningForm::apply`], and never leave
/// the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningForm {
    pub age: String,
    pub gender: String,
    pub employment_status: String,
    pub prescription_duration: String,
    pub prescription_drug: String,
    pub days_since_first_use: String,
    pub alcohol: String,
    pub smoking: String,
    pub depression: String,
    pub anxiety: String,
    pub sleeplessness: String,
    pub feverish: String,
}

/// Identity of one form input, for the single update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningField {
    Age,
    Gender,
    EmploymentStatus,
    PrescriptionDuration,
    PrescriptionDrug,
    DaysSinceFirstUse,
    Alcohol,
    Smoking,
    Depression,
    Anxiety,
    Sleeplessness,
    Feverish,
}

impl ScreeningForm {
    /// Single update path for all form inputs.
    pub fn apply(&mut self, field: ScreeningField, value: String) {
        *self.slot(field) = value;
    }

    /// Current raw value of one input.
    pub fn value(&self, field: ScreeningField) -> &str {
        match field {
            ScreeningField::Age => &self.age,
            ScreeningField::Gender => &self.gender,
            ScreeningField::EmploymentStatus => &self.employment_status,
            ScreeningField::PrescriptionDuration => &self.prescription_duration,
            ScreeningField::PrescriptionDrug => &self.prescription_drug,
            ScreeningField::DaysSinceFirstUse => &self.days_since_first_use,
            ScreeningField::Alcohol => &self.alcohol,
            ScreeningField::Smoking => &self.smoking,
            ScreeningField::Depression => &self.depression,
            ScreeningField::Anxiety => &self.anxiety,
            ScreeningField::Sleeplessness => &self.sleeplessness,
            ScreeningField::Feverish => &self.feverish,
        }
    }

    fn slot(&mut self, field: ScreeningField) -> &mut String {
        match field {
            ScreeningField::Age => &mut self.age,
            ScreeningField::Gender => &mut self.gender,
            ScreeningField::EmploymentStatus => &mut self.employment_status,
            ScreeningField::PrescriptionDuration => &mut self.prescription_duration,
            ScreeningField::PrescriptionDrug => &mut self.prescription_drug,
            ScreeningField::DaysSinceFirstUse => &mut self.days_since_first_use,
            ScreeningField::Alcohol => &mut self.alcohol,
            ScreeningField::Smoking => &mut self.smoking,
            ScreeningField::Depression => &mut self.depression,
            ScreeningField::Anxiety => &mut self.anxiety,
            ScreeningField::Sleeplessness => &mut self.sleeplessness,
            ScreeningField::Feverish => &mut self.feverish,
        }
    }

    /// Number of the seven risk indicators currently answered true.
    /// Unparseable numeric fields fail their threshold comparison rather than
    /// counting as risk.
    pub fn indicator_count(&self) -> usize {
        [
            exceeds(&self.prescription_duration, 90),
            exceeds(&self.days_since_first_use, 180),
            is_yes(&self.alcohol),
            is_yes(&self.smoking),
            is_yes(&self.depression),
            is_yes(&self.anxiety),
            is_yes(&self.sleeplessness),
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

fn exceeds(raw: &str, threshold: i64) -> bool {
    raw.trim()
        .parse::<i64>()
        .map(|days| days > threshold)
        .unwrap_or(false)
}

fn is_yes(raw: &str) -> bool {
    raw == "yes"
}

/// Uniform jitter in `[0, 10)` mixed into the displayed score.
pub trait JitterSource {
    fn draw(&mut self) -> f64;
}

/// Production jitter backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadJitter;

impl JitterSource for ThreadJitter {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..10.0)
    }
}

/// Deterministic jitter for tests and seeded demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Scores a questionnaire: fifteen points per true indicator plus jitter,
/// capped at [`SCORE_CAP`].
pub fn assess(form: &ScreeningForm, jitter: &mut impl JitterSource) -> RiskAssessment {
    let indicators = form.indicator_count();
    let score = (indicators as f64 * POINTS_PER_INDICATOR + jitter.draw()).min(SCORE_CAP);
    RiskAssessment {
        level: RiskLevel::from_indicators(indicators),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no_form(yes_count: usize) -> ScreeningForm {
        // Fill binary indicators in declaration order; thresholds stay unmet.
        let mut form = ScreeningForm::default();
        let binary = [
            ScreeningField::Alcohol,
            ScreeningField::Smoking,
            ScreeningField::Depression,
            ScreeningField::Anxiety,
            ScreeningField::Sleeplessness,
        ];
        for field in binary.into_iter().take(yes_count) {
            form.apply(field, "yes".to_string());
        }
        form
    }

    #[test]
    fn three_indicators_score_moderate() {
        let mut form = ScreeningForm::default();
        form.apply(ScreeningField::PrescriptionDuration, "120".to_string());
        form.apply(ScreeningField::DaysSinceFirstUse, "10".to_string());
        form.apply(ScreeningField::Alcohol, "yes".to_string());
        form.apply(ScreeningField::Smoking, "no".to_string());
        form.apply(ScreeningField::Depression, "yes".to_string());
        form.apply(ScreeningField::Anxiety, "no".to_string());
        form.apply(ScreeningField::Sleeplessness, "no".to_string());

        assert_eq!(form.indicator_count(), 3);
        let assessment = assess(&form, &mut FixedJitter(0.0));
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.level.label(), "Moderate Risk");
        assert_eq!(assessment.score, 45.0);
    }

    #[test]
    fn five_indicators_score_high() {
        let form = yes_no_form(5);
        assert_eq!(form.indicator_count(), 5);
        assert_eq!(assess(&form, &mut FixedJitter(0.0)).level, RiskLevel::High);
    }

    #[test]
    fn blank_form_scores_low() {
        let form = ScreeningForm::default();
        assert_eq!(form.indicator_count(), 0);
        let assessment = assess(&form, &mut FixedJitter(7.5));
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.score, 7.5);
    }

    #[test]
    fn unparseable_numbers_are_not_risk_indicators() {
        let mut form = ScreeningForm::default();
        form.apply(ScreeningField::PrescriptionDuration, String::new());
        form.apply(ScreeningField::DaysSinceFirstUse, "soon".to_string());
        assert_eq!(form.indicator_count(), 0);
    }

    #[test]
    fn threshold_comparisons_are_strict() {
        let mut form = ScreeningForm::default();
        form.apply(ScreeningField::PrescriptionDuration, "90".to_string());
        form.apply(ScreeningField::DaysSinceFirstUse, "180".to_string());
        assert_eq!(form.indicator_count(), 0);

        form.apply(ScreeningField::PrescriptionDuration, "91".to_string());
        form.apply(ScreeningField::DaysSinceFirstUse, "181".to_string());
        assert_eq!(form.indicator_count(), 2);
    }

    #[test]
    fn tier_is_monotonic_in_indicator_count_under_fixed_jitter() {
        let mut previous = RiskLevel::Low;
        for yes_count in 0..=5 {
            let form = yes_no_form(yes_count);
            let assessment = assess(&form, &mut FixedJitter(4.2));
            assert!(assessment.level >= previous);
            previous = assessment.level;
        }
    }

    #[test]
    fn assessment_is_idempotent_under_fixed_jitter() {
        let form = yes_no_form(4);
        let first = assess(&form, &mut FixedJitter(9.99));
        let second = assess(&form, &mut FixedJitter(9.99));
        assert_eq!(first, second);
    }

    #[test]
    fn score_is_capped_at_ninety_five() {
        let mut form = yes_no_form(5);
        form.apply(ScreeningField::PrescriptionDuration, "365".to_string());
        form.apply(ScreeningField::DaysSinceFirstUse, "400".to_string());
        assert_eq!(form.indicator_count(), 7);

        // 7 * 15 = 105 before the cap.
        let assessment = assess(&form, &mut FixedJitter(9.0));
        assert_eq!(assessment.score, SCORE_CAP);
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn production_jitter_stays_in_range() {
        let mut jitter = ThreadJitter;
        for _ in 0..100 {
            let draw = jitter.draw();
            assert!((0.0..10.0).contains(&draw));
        }
    }
}

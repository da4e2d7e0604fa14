//! Declarative description of the questionnaire inputs. Keeping the field
//! table in one place keeps the modal markup generic.

use crate::core::risk::ScreeningField;

pub(crate) enum FieldControl {
    Number { placeholder: &'static str },
    Select { options: &'static [(&'static str, &'static str)] },
}

pub(crate) struct FieldSpec {
    pub field: ScreeningField,
    pub label: &'static str,
    pub control: FieldControl,
}

const YES_NO: &[(&str, &str)] = &[("yes", "Yes"), ("no", "No")];

const GENDERS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female")];

const EMPLOYMENT: &[(&str, &str)] = &[
    ("employed", "Employed"),
    ("unemployed", "Unemployed"),
    ("retired", "Retired"),
];

const DRUGS: &[(&str, &str)] = &[
    ("Codeine", "Codeine"),
    ("Fentanyl", "Fentanyl"),
    ("Hydrocodone", "Hydrocodone"),
    ("Hydromorphone", "Hydromorphone"),
    ("Meperidine", "Meperidine"),
    ("Morphine", "Morphine"),
    ("Oxycodone", "Oxycodone"),
    ("Oxymorphone", "Oxymorphone"),
    ("Tapentadol", "Tapentadol"),
    ("Tramadol", "Tramadol"),
];

const FEVERISH: &[(&str, &str)] = &[
    ("regularly", "Regularly"),
    ("randomly", "Randomly"),
    ("no", "No"),
];

pub(crate) const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        field: ScreeningField::Age,
        label: "Age",
        control: FieldControl::Number { placeholder: "Enter age" },
    },
    FieldSpec {
        field: ScreeningField::Gender,
        label: "Gender",
        control: FieldControl::Select { options: GENDERS },
    },
    FieldSpec {
        field: ScreeningField::EmploymentStatus,
        label: "Employment Status",
        control: FieldControl::Select { options: EMPLOYMENT },
    },
    FieldSpec {
        field: ScreeningField::PrescriptionDuration,
        label: "Prescription Duration (days)",
        control: FieldControl::Number { placeholder: "Enter duration" },
    },
    FieldSpec {
        field: ScreeningField::PrescriptionDrug,
        label: "Prescription Drug Used",
        control: FieldControl::Select { options: DRUGS },
    },
    FieldSpec {
        field: ScreeningField::DaysSinceFirstUse,
        label: "Days Since First Use",
        control: FieldControl::Number { placeholder: "Enter days" },
    },
    FieldSpec {
        field: ScreeningField::Alcohol,
        label: "Alcohol Use",
        control: FieldControl::Select { options: YES_NO },
    },
    FieldSpec {
        field: ScreeningField::Smoking,
        label: "Smoking",
        control: FieldControl::Select { options: YES_NO },
    },
    FieldSpec {
        field: ScreeningField::Depression,
        label: "Depression",
        control: FieldControl::Select { options: YES_NO },
    },
    FieldSpec {
        field: ScreeningField::Anxiety,
        label: "Anxiety",
        control: FieldControl::Select { options: YES_NO },
    },
    FieldSpec {
        field: ScreeningField::Sleeplessness,
        label: "Sleeplessness",
        control: FieldControl::Select { options: YES_NO },
    },
    FieldSpec {
        field: ScreeningField::Feverish,
        label: "Feverish",
        control: FieldControl::Select { options: FEVERISH },
    },
];

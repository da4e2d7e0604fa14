//! Risk-assessment modal: a twelve-field questionnaire scored locally on
//! submit. Form state lives inside the modal and is discarded on close.

mod fields;

use dioxus::prelude::*;

use crate::core::risk::{self, RiskAssessment, RiskLevel, ScreeningForm, ThreadJitter};
use fields::{FieldControl, FieldSpec, FIELD_SPECS};

#[component]
pub fn AssessmentModal(open: Signal<bool>) -> Element {
    let mut form = use_signal(ScreeningForm::default);
    let mut outcome = use_signal(|| Option::<RiskAssessment>::None);

    if !open() {
        return rsx! {};
    }

    let mut open_signal = open;
    let close = move |_| {
        open_signal.set(false);
        form.set(ScreeningForm::default());
        outcome.set(None);
    };

    let submit = move |_| {
        let assessment = risk::assess(&form.read(), &mut ThreadJitter);
        outcome.set(Some(assessment));
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal assessment",
                header { class: "assessment__header",
                    h2 { "Opioid Addiction Risk Assessment" }
                    button {
                        r#type: "button",
                        class: "assessment__close",
                        aria_label: "Close assessment",
                        onclick: close,
                        "×"
                    }
                }

                div { class: "assessment__body",
                    div { class: "assessment__grid",
                        for spec in FIELD_SPECS.iter() {
                            {render_field(spec, form)}
                        }
                    }

                    button {
                        r#type: "button",
                        class: "button button--primary assessment__submit",
                        onclick: submit,
                        "Assess Risk"
                    }

                    if let Some(result) = outcome() {
                        {result_panel(&result)}
                    }
                }
            }
        }
    }
}

fn render_field(spec: &FieldSpec, mut form: Signal<ScreeningForm>) -> Element {
    let field = spec.field;
    let current = form.read().value(field).to_string();

    let control = match spec.control {
        FieldControl::Number { placeholder } => rsx! {
            input {
                r#type: "number",
                value: "{current}",
                placeholder: "{placeholder}",
                oninput: move |evt| form.write().apply(field, evt.value()),
            }
        },
        FieldControl::Select { options } => rsx! {
            select {
                value: "{current}",
                oninput: move |evt| form.write().apply(field, evt.value()),
                option { value: "", "Select" }
                for (value, label) in options.iter() {
                    option { key: "{value}", value: "{value}", "{label}" }
                }
            }
        },
    };

    rsx! {
        div { class: "assessment__field",
            label { "{spec.label}" }
            {control}
        }
    }
}

fn result_panel(result: &RiskAssessment) -> Element {
    let (modifier, advice) = match result.level {
        RiskLevel::High => (
            "assessment__result--high",
            "Immediate professional consultation recommended.",
        ),
        RiskLevel::Moderate => (
            "assessment__result--moderate",
            "Regular monitoring and support advised.",
        ),
        RiskLevel::Low => (
            "assessment__result--low",
            "Continue regular wellness practices.",
        ),
    };

    rsx! {
        div { class: "assessment__result {modifier}",
            h3 { "Assessment Result" }
            p { class: "assessment__result-level", "{result.level.label()}" }
            p { class: "assessment__result-score", "Risk Score: {result.score:.1}%" }
            p { class: "assessment__result-advice", "{advice}" }
        }
    }
}

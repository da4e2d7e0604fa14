use dioxus::prelude::*;

use crate::assessment::AssessmentModal;

#[component]
pub fn Home() -> Element {
    let show_assessment = use_signal(|| false);
    let mut open_signal = show_assessment;

    rsx! {
        section { class: "page page-home",
            // Workplace screening pitch
            div { class: "hero hero--detect",
                div { class: "hero__copy",
                    h1 { "Detect" }
                    p { class: "hero__tagline", "For your business" }
                    p {
                        "Protect your business, employees and customers with opioid addiction "
                        "screening to help ensure optimal workplace welfare."
                    }
                }

                div { class: "hero__panel",
                    h3 { "Understanding Opioid Crisis" }
                    p {
                        "Opioid addiction affects millions worldwide, impacting productivity, "
                        "safety, and wellbeing in workplaces. Early detection through reliable "
                        "screening helps create supportive environments and connects individuals "
                        "with life-saving resources."
                    }

                    div { class: "stat-grid",
                        {stat_card("2.7M", "People affected in US")}
                        {stat_card("$78.5B", "Annual economic burden")}
                        {stat_card("75%", "Start with prescription")}
                        {stat_card("24/7", "Support available")}
                    }
                }
            }

            // Assessment call-to-action
            div { class: "hero hero--assess",
                div { class: "hero__copy",
                    h1 { "AI powered Detection" }
                    p { class: "hero__tagline", "For a Healthier Lifestyle" }
                    p {
                        "Protect your business, employees and customers with opioid addiction "
                        "screening with our AI powered solutions guaranteed by professionals "
                        "all over the world."
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost hero__cta",
                        onclick: move |_| open_signal.set(true),
                        "Take The Test"
                    }
                }
            }

            AssessmentModal { open: show_assessment }
        }
    }
}

fn stat_card(value: &str, caption: &str) -> Element {
    rsx! {
        div { class: "stat-grid__card",
            p { class: "stat-grid__value", "{value}" }
            p { class: "stat-grid__caption", "{caption}" }
        }
    }
}

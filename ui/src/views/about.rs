use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            div { class: "hero hero--about",
                div { class: "hero__copy",
                    h1 { "Detect With Us" }
                    p { class: "hero__tagline", "Empowering prevention through data" }
                    p {
                        "SureScreen Diagnostics builds screening tools that turn clinical "
                        "research into practical, early-warning insight for workplaces and "
                        "healthcare providers."
                    }
                }

                div { class: "hero__panel",
                    h3 { "Why Work With Us" }
                    p {
                        "Our assessments combine established clinical risk indicators with "
                        "aggregate population data, so organisations can act early, "
                        "confidentially and with confidence."
                    }

                    div { class: "stat-grid",
                        {stat_card("95%", "Screening accuracy")}
                        {stat_card("50+", "Partner organisations")}
                        {stat_card("100K+", "Assessments completed")}
                        {stat_card("24/7", "Support available")}
                    }
                }
            }
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

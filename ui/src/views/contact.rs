use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            header { class: "page-contact__hero",
                h1 { "Contact us" }
                p {
                    "Questions about screening programmes, the dashboard, or partnership "
                    "opportunities? We would love to hear from you."
                }
            }

            div { class: "contact-grid",
                div { class: "contact-grid__card",
                    h3 { "Email" }
                    p { "General enquiries and support." }
                    a {
                        class: "contact-grid__link",
                        href: "mailto:contact@surescreendx.com",
                        "contact@surescreendx.com"
                    }
                }
                div { class: "contact-grid__card",
                    h3 { "Phone" }
                    p { "Weekdays, 9am to 5pm." }
                    a {
                        class: "contact-grid__link",
                        href: "tel:0112729729",
                        "0112 729 729"
                    }
                }
            }
        }
    }
}

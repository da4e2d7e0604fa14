use dioxus::prelude::*;

use crate::analytics::{
    CategoryBarChart, GroupBoxplot, GroupSummaryCards, RemoteData, VisualizationKind,
};
use crate::core::fetch;
use crate::core::stats::CategoryData;
use crate::core::summary::BoxplotData;
use crate::core::variables::{CategoricalVariable, NumericVariable};

// User-facing prefixes for the two independent failure panels.
const CATEGORY_FETCH_CONTEXT: &str = "Failed to fetch data";
const BOXPLOT_FETCH_CONTEXT: &str = "Failed to fetch boxplot data";

/// Analytics dashboard. Both payloads are fetched once when the page becomes
/// active; the futures are dropped with the page, so a torn-down view is
/// never written to. Selecting a variable only reshapes the loaded snapshot.
#[component]
pub fn Analytics() -> Element {
    let base = use_hook(fetch::base_url);

    let categories = use_resource({
        let base = base.clone();
        move || {
            let base = base.clone();
            async move { fetch::fetch_category_data(&base).await }
        }
    });
    let boxplots = use_resource({
        let base = base.clone();
        move || {
            let base = base.clone();
            async move { fetch::fetch_boxplot_data(&base).await }
        }
    });

    let mut kind = use_signal(VisualizationKind::default);
    let mut selected_category = use_signal(|| Option::<CategoricalVariable>::None);
    let mut selected_numeric = use_signal(|| Option::<NumericVariable>::None);

    let category_state = RemoteData::from_result(categories.read().as_ref(), CATEGORY_FETCH_CONTEXT);
    let boxplot_state = RemoteData::from_result(boxplots.read().as_ref(), BOXPLOT_FETCH_CONTEXT);

    let panel = match kind() {
        VisualizationKind::Categorical => categorical_panel(&category_state, selected_category),
        VisualizationKind::Numeric => numeric_panel(&boxplot_state, selected_numeric),
    };

    rsx! {
        section { class: "page page-analytics",
            header { class: "page-analytics__hero",
                h1 { "Analytics Dashboard" }
                p { class: "page-analytics__tagline", "Data-Driven Insights" }
                p {
                    "Explore opioid addiction patterns through interactive visualizations. "
                    "Select different variables to understand risk factors and trends."
                }
            }

            div { class: "viz-toggle",
                button {
                    r#type: "button",
                    class: toggle_class(kind(), VisualizationKind::Categorical),
                    onclick: move |_| {
                        kind.set(VisualizationKind::Categorical);
                        selected_numeric.set(None);
                    },
                    "Categorical Variables"
                }
                button {
                    r#type: "button",
                    class: toggle_class(kind(), VisualizationKind::Numeric),
                    onclick: move |_| {
                        kind.set(VisualizationKind::Numeric);
                        selected_category.set(None);
                    },
                    "Numeric Variables (Boxplots)"
                }
            }

            div { class: "viz-panel",
                {panel}
            }
        }
    }
}

fn toggle_class(active: VisualizationKind, this: VisualizationKind) -> &'static str {
    if active == this {
        "viz-toggle__button viz-toggle__button--active"
    } else {
        "viz-toggle__button"
    }
}

fn categorical_panel(
    state: &RemoteData<CategoryData>,
    mut selected: Signal<Option<CategoricalVariable>>,
) -> Element {
    match state {
        RemoteData::Loading => loading_panel(),
        RemoteData::Failed(message) => error_panel(message),
        RemoteData::Loaded(data) => {
            let selector = rsx! {
                div { class: "viz-selector",
                    label { r#for: "categorical-select", "Select Categorical Variable" }
                    select {
                        id: "categorical-select",
                        value: selected().map(CategoricalVariable::key).unwrap_or(""),
                        oninput: move |evt| selected.set(CategoricalVariable::from_key(&evt.value())),
                        option { value: "", "Choose a variable..." }
                        for variable in CategoricalVariable::ALL {
                            option {
                                key: "{variable.key()}",
                                value: "{variable.key()}",
                                "{variable.label()}"
                            }
                        }
                    }
                }
            };

            match selected() {
                None => rsx! {
                    {selector}
                    {prompt_panel(
                        "Select a categorical variable to view the visualization",
                        "Choose from the dropdown above to explore addiction patterns",
                    )}
                },
                Some(variable) => {
                    let shares = data.shares_for(variable);
                    rsx! {
                        {selector}
                        CategoryBarChart {
                            shares,
                            title: format!("Addiction Rates by {}", variable.label()),
                        }
                        p { class: "viz-panel__note",
                            strong { "Note: " }
                            "This visualization shows the percentage distribution of individuals "
                            "with opioid addiction versus those without, categorized by the "
                            "selected variable."
                        }
                    }
                }
            }
        }
    }
}

fn numeric_panel(
    state: &RemoteData<BoxplotData>,
    mut selected: Signal<Option<NumericVariable>>,
) -> Element {
    match state {
        RemoteData::Loading => loading_panel(),
        RemoteData::Failed(message) => error_panel(message),
        RemoteData::Loaded(data) => {
            let selector = rsx! {
                div { class: "viz-selector",
                    label { r#for: "numeric-select", "Select Numeric Variable" }
                    select {
                        id: "numeric-select",
                        value: selected().map(NumericVariable::key).unwrap_or(""),
                        oninput: move |evt| selected.set(NumericVariable::from_key(&evt.value())),
                        option { value: "", "Choose a variable..." }
                        for variable in NumericVariable::ALL {
                            option {
                                key: "{variable.key()}",
                                value: "{variable.key()}",
                                "{variable.label()}"
                            }
                        }
                    }
                }
            };

            match selected() {
                None => rsx! {
                    {selector}
                    {prompt_panel(
                        "Select a numeric variable to view the boxplot",
                        "Choose from the dropdown above to explore distributions",
                    )}
                },
                Some(variable) => {
                    // A column missing from the payload renders as nothing,
                    // not as an error.
                    let groups = data.for_variable(variable).copied();
                    rsx! {
                        {selector}
                        if let Some(summaries) = groups {
                            h3 { class: "viz-panel__heading",
                                "Distribution of {variable.label()} by Addiction Status"
                            }
                            GroupSummaryCards { summaries }
                            GroupBoxplot { summaries, title: variable.label().to_string() }
                            p { class: "viz-panel__note",
                                strong { "Note: " }
                                "This boxplot shows the distribution of {variable.label()} "
                                "separated by addiction status. The box represents the "
                                "interquartile range (Q1-Q3), the line inside shows the median, "
                                "the circle shows the mean, and the whiskers extend to the "
                                "minimum and maximum values."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn loading_panel() -> Element {
    rsx! {
        div { class: "viz-panel__status viz-panel__status--loading",
            div { class: "spinner", aria_hidden: "true" }
            p { "Loading data..." }
        }
    }
}

fn error_panel(message: &str) -> Element {
    rsx! {
        div { class: "viz-panel__status viz-panel__status--error",
            p { class: "viz-panel__status-title", "Error loading data" }
            p { "{message}" }
        }
    }
}

fn prompt_panel(title: &str, hint: &str) -> Element {
    rsx! {
        div { class: "viz-panel__status viz-panel__status--empty",
            p { class: "viz-panel__status-title", "{title}" }
            p { "{hint}" }
        }
    }
}

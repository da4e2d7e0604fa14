use dioxus::prelude::*;

use crate::core::chart::Group;
use crate::core::format::format_stat;
use crate::core::summary::{FiveNumberSummary, GroupSummaries};

/// Numeric companion to the boxplot: one card per group listing the full
/// five-number summary plus mean and sample count.
#[component]
pub fn GroupSummaryCards(summaries: GroupSummaries) -> Element {
    rsx! {
        div { class: "summary-cards",
            {summary_card(Group::Addicted, &summaries.addicted)}
            {summary_card(Group::NotAddicted, &summaries.not_addicted)}
        }
    }
}

fn summary_card(group: Group, stats: &FiveNumberSummary) -> Element {
    let rows = [
        ("Minimum", format_stat(stats.min)),
        ("Q1 (25th percentile)", format_stat(stats.q1)),
        ("Median (50th percentile)", format_stat(stats.median)),
        ("Q3 (75th percentile)", format_stat(stats.q3)),
        ("Maximum", format_stat(stats.max)),
        ("Mean", format_stat(stats.mean)),
        ("Count", stats.count.to_string()),
    ];

    rsx! {
        div { class: "summary-card summary-card--{group.css_suffix()}",
            h4 { class: "summary-card__title", "{group.label()} Group" }
            dl { class: "summary-card__rows",
                for (label, value) in rows.into_iter() {
                    div { class: "summary-card__row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::chart::{bar_chart, Group, PlotArea};
use crate::core::format;
use crate::core::stats::CategoryShare;

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 48.0;

const PLOT: PlotArea = PlotArea::new(
    VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
    VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
);

/// Grouped bar chart: two bars per category, percent scale fixed at 0-100 so
/// every variable reads on the same axis.
#[component]
pub fn CategoryBarChart(shares: Vec<CategoryShare>, title: String) -> Element {
    let layout = bar_chart(&shares, PLOT);

    // Gridline y positions for the fixed percent ticks.
    let gridlines: Vec<(f64, f64)> = [0.0, 25.0, 50.0, 75.0, 100.0]
        .into_iter()
        .map(|pct| (pct, PLOT.height - pct / 100.0 * PLOT.height))
        .collect();

    let axis_title_y = PLOT.height / 2.0;

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-card__title", "{title}" }

            svg {
                class: "chart chart--bars",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",

                g { transform: "translate({MARGIN_LEFT}, {MARGIN_TOP})",
                    for (pct, y) in gridlines.into_iter() {
                        line {
                            class: "chart__grid",
                            x1: "0",
                            y1: "{y}",
                            x2: "{PLOT.width}",
                            y2: "{y}",
                        }
                        text {
                            class: "chart__tick",
                            x: "-10",
                            y: "{y + 4.0}",
                            text_anchor: "end",
                            "{format::format_tick(pct)}"
                        }
                    }

                    text {
                        class: "chart__axis-title",
                        transform: "rotate(-90)",
                        x: "-{axis_title_y}",
                        y: "-40",
                        text_anchor: "middle",
                        "Percentage (%)"
                    }

                    for slot in layout.slots.iter() {
                        for bar in slot.bars.iter() {
                            rect {
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                rx: "2",
                                fill: "{bar.group.color()}",
                                title { "{bar.group.label()}: {format::format_pct(bar.value)}" }
                            }
                        }
                        text {
                            class: "chart__label",
                            x: "{slot.center_x}",
                            y: "{PLOT.height + 22.0}",
                            text_anchor: "middle",
                            "{slot.label}"
                        }
                    }
                }
            }

            div { class: "chart-legend",
                {legend_entry(Group::Addicted, "Addicted (%)")}
                {legend_entry(Group::NotAddicted, "Not Addicted (%)")}
            }
        }
    }
}

fn legend_entry(group: Group, label: &str) -> Element {
    rsx! {
        span { class: "chart-legend__entry",
            span {
                class: "chart-legend__swatch chart-legend__swatch--{group.css_suffix()}",
                style: "background: {group.color()}",
            }
            "{label}"
        }
    }
}

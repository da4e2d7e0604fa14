use dioxus::prelude::*;

use crate::core::chart::{boxplot_layout, BoxGeometry, PlotArea};
use crate::core::format;
use crate::core::summary::GroupSummaries;

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 460.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 52.0;

const PLOT: PlotArea = PlotArea::new(
    VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
    VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
);

/// Side-by-side boxplots for the two addiction-status groups, projected onto
/// one shared vertical scale so the distributions stay comparable.
#[component]
pub fn GroupBoxplot(summaries: GroupSummaries, title: String) -> Element {
    let layout = boxplot_layout(&summaries, PLOT);

    // Quarter-interval gridlines across the shared range.
    let span = layout.scale_max - layout.scale_min;
    let gridlines: Vec<(String, f64)> = [0.0, 0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|fraction| {
            let value = layout.scale_min + span * fraction;
            (format::format_tick(value), layout.project(value, PLOT))
        })
        .collect();

    let axis_title_y = PLOT.height / 2.0;

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-card__title", "{title}" }

            svg {
                class: "chart chart--boxplot",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",

                g { transform: "translate({MARGIN_LEFT}, {MARGIN_TOP})",
                    for (label, y) in gridlines.into_iter() {
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
                            "{label}"
                        }
                    }

                    text {
                        class: "chart__axis-title",
                        transform: "rotate(-90)",
                        x: "-{axis_title_y}",
                        y: "-46",
                        text_anchor: "middle",
                        "{title}"
                    }

                    for geometry in layout.groups.into_iter() {
                        {box_glyph(geometry)}
                        text {
                            class: "chart__label",
                            x: "{geometry.center_x}",
                            y: "{PLOT.height + 26.0}",
                            text_anchor: "middle",
                            "{geometry.group.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Whiskers with end caps, Q1-Q3 box, median line, and a mean marker.
fn box_glyph(geometry: BoxGeometry) -> Element {
    let color = geometry.group.color();
    let center = geometry.center_x;
    let half_box = geometry.box_width / 2.0;
    let cap = geometry.box_width / 4.0;

    rsx! {
        g { class: "chart__box chart__box--{geometry.group.css_suffix()}",
            // Whisker spine from min to max
            line {
                x1: "{center}",
                y1: "{geometry.min_y}",
                x2: "{center}",
                y2: "{geometry.max_y}",
                stroke: "{color}",
                stroke_width: "2",
            }
            // Min cap
            line {
                x1: "{center - cap}",
                y1: "{geometry.min_y}",
                x2: "{center + cap}",
                y2: "{geometry.min_y}",
                stroke: "{color}",
                stroke_width: "2",
            }
            // Max cap
            line {
                x1: "{center - cap}",
                y1: "{geometry.max_y}",
                x2: "{center + cap}",
                y2: "{geometry.max_y}",
                stroke: "{color}",
                stroke_width: "2",
            }
            // Interquartile box
            rect {
                x: "{center - half_box}",
                y: "{geometry.q3_y}",
                width: "{geometry.box_width}",
                height: "{geometry.q1_y - geometry.q3_y}",
                fill: "{color}",
                fill_opacity: "0.3",
                stroke: "{color}",
                stroke_width: "2",
            }
            // Median line
            line {
                x1: "{center - half_box}",
                y1: "{geometry.median_y}",
                x2: "{center + half_box}",
                y2: "{geometry.median_y}",
                stroke: "{color}",
                stroke_width: "3",
            }
            // Mean marker
            circle {
                cx: "{center}",
                cy: "{geometry.mean_y}",
                r: "4",
                fill: "white",
                stroke: "{color}",
                stroke_width: "2",
            }
        }
    }
}

//! Translates normalized data into drawable chart geometry.
//!
//! Charts render as inline SVG, so the adapter emits plain coordinates in SVG
//! user units (y grows downward); components only print them into elements.

use super::stats::CategoryShare;
use super::summary::{FiveNumberSummary, GroupSummaries};

/// Addiction-status series identity shared by both chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Addicted,
    NotAddicted,
}

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Group::Addicted => "Addicted",
            Group::NotAddicted => "Not Addicted",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Group::Addicted => "#ef4444",
            Group::NotAddicted => "#10b981",
        }
    }

    pub fn css_suffix(self) -> &'static str {
        match self {
            Group::Addicted => "addicted",
            Group::NotAddicted => "not-addicted",
        }
    }
}

/// Drawing area for the plot body, excluding axis margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One positioned bar of the categorical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub group: Group,
    /// Percentage value the bar encodes.
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One category slot: label anchor plus its two bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlot {
    pub label: String,
    pub center_x: f64,
    pub bars: [Bar; 2],
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChartLayout {
    pub slots: Vec<CategorySlot>,
}

const BAR_GAP: f64 = 4.0;
const MAX_BAR_WIDTH: f64 = 48.0;

/// Lays out two bars per category (addicted %, not-addicted %) against a
/// fixed 0-100 percent axis. Empty input produces an empty layout; the chart
/// then shows only its axis.
pub fn bar_chart(shares: &[CategoryShare], plot: PlotArea) -> BarChartLayout {
    if shares.is_empty() {
        return BarChartLayout::default();
    }

    let slot_width = plot.width / shares.len() as f64;
    let bar_width = (slot_width * 0.3).min(MAX_BAR_WIDTH);

    let slots = shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            let center_x = slot_width * (index as f64 + 0.5);
            let bars = [
                positioned_bar(
                    Group::Addicted,
                    share.addicted_pct,
                    center_x - bar_width - BAR_GAP / 2.0,
                    bar_width,
                    plot,
                ),
                positioned_bar(
                    Group::NotAddicted,
                    share.not_addicted_pct,
                    center_x + BAR_GAP / 2.0,
                    bar_width,
                    plot,
                ),
            ];
            CategorySlot {
                label: share.category.clone(),
                center_x,
                bars,
            }
        })
        .collect();

    BarChartLayout { slots }
}

fn positioned_bar(group: Group, value: f64, x: f64, width: f64, plot: PlotArea) -> Bar {
    let clamped = value.clamp(0.0, 100.0);
    let height = clamped / 100.0 * plot.height;
    Bar {
        group,
        value,
        x,
        y: plot.height - height,
        width,
        height,
    }
}

/// Per-group boxplot geometry in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub group: Group,
    pub center_x: f64,
    pub box_width: f64,
    pub min_y: f64,
    pub q1_y: f64,
    pub median_y: f64,
    pub q3_y: f64,
    pub max_y: f64,
    pub mean_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxplotLayout {
    /// Bottom of the shared vertical scale (global minimum across groups).
    pub scale_min: f64,
    /// Top of the shared vertical scale (global maximum across groups).
    pub scale_max: f64,
    pub groups: [BoxGeometry; 2],
}

impl BoxplotLayout {
    /// Projects a data value onto the layout's vertical axis.
    pub fn project(&self, value: f64, plot: PlotArea) -> f64 {
        project(value, self.scale_min, self.scale_max, plot.height)
    }
}

/// Shared-scale boxplot layout: both groups are projected onto one vertical
/// axis spanning the global min/max, keeping the boxes visually comparable.
pub fn boxplot_layout(summaries: &GroupSummaries, plot: PlotArea) -> BoxplotLayout {
    let scale_min = summaries.addicted.min.min(summaries.not_addicted.min);
    let scale_max = summaries.addicted.max.max(summaries.not_addicted.max);

    let box_width = (plot.width * 0.18).min(60.0);
    let geometry = |group: Group, stats: &FiveNumberSummary, center_x: f64| BoxGeometry {
        group,
        center_x,
        box_width,
        min_y: project(stats.min, scale_min, scale_max, plot.height),
        q1_y: project(stats.q1, scale_min, scale_max, plot.height),
        median_y: project(stats.median, scale_min, scale_max, plot.height),
        q3_y: project(stats.q3, scale_min, scale_max, plot.height),
        max_y: project(stats.max, scale_min, scale_max, plot.height),
        mean_y: project(stats.mean, scale_min, scale_max, plot.height),
    };

    BoxplotLayout {
        scale_min,
        scale_max,
        groups: [
            geometry(Group::Addicted, &summaries.addicted, plot.width * 0.3),
            geometry(Group::NotAddicted, &summaries.not_addicted, plot.width * 0.7),
        ],
    }
}

/// Linear interpolation over the shared range, inverted for SVG space.
/// A degenerate range (all values equal) pins everything to the baseline.
fn project(value: f64, scale_min: f64, scale_max: f64, height: f64) -> f64 {
    let span = scale_max - scale_min;
    if span > 0.0 {
        height - (value - scale_min) / span * height
    } else {
        height
    }
}

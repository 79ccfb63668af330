//! SVG rendering of the weight history.

use dioxus::prelude::*;
use store::chart::{MARGIN_LEFT, MARGIN_RIGHT};
use store::models::format_weight;
use store::{ChartGeometry, WeightRecord, WeightSummary};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;

/// Line chart of weight over time, oldest on the left.
#[component]
pub fn WeightChart(
    records: Vec<WeightRecord>,
    #[props(default = "lb".to_string())] unit: String,
) -> Element {
    let Some(geometry) = ChartGeometry::compute(&records, CHART_WIDTH, CHART_HEIGHT) else {
        return rsx! {
            div { class: "chart-container chart-empty", "No data" }
        };
    };

    let baseline = geometry.baseline();
    let left = MARGIN_LEFT;
    let right = geometry.width - MARGIN_RIGHT;
    let label_x = left - 8.0;
    let label_y = baseline + 20.0;
    let polyline = geometry.polyline();

    rsx! {
        div {
            class: "chart-container",
            h3 { "Weight Progress" }
            svg {
                class: "chart",
                view_box: "0 0 {geometry.width} {geometry.height}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                for grid_line in geometry.grid.iter() {
                    line {
                        class: "chart-grid",
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{grid_line.y}",
                        y2: "{grid_line.y}",
                    }
                    text {
                        class: "chart-label chart-label--y",
                        x: "{label_x}",
                        y: "{grid_line.y}",
                        dy: "4",
                        text_anchor: "end",
                        "{grid_line.label}"
                    }
                }
                line {
                    class: "chart-axis",
                    x1: "{left}",
                    x2: "{right}",
                    y1: "{baseline}",
                    y2: "{baseline}",
                }
                for label in geometry.x_labels.iter() {
                    text {
                        class: "chart-label chart-label--x",
                        x: "{label.x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{label.label}"
                    }
                }
                polyline {
                    class: "chart-line",
                    fill: "none",
                    points: "{polyline}",
                }
                for (point, tooltip) in geometry.points.iter().map(|p| (p, format_weight(p.weight))) {
                    circle {
                        key: "{point.weight_id}",
                        class: "chart-point",
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "4",
                        title { "{tooltip} {unit}" }
                    }
                }
            }
        }
    }
}

/// Latest/lowest/highest/average cards shown above the chart.
#[component]
pub fn WeightSummaryCards(
    records: Vec<WeightRecord>,
    #[props(default = "lb".to_string())] unit: String,
) -> Element {
    let Some(summary) = WeightSummary::from_records(&records) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "summary-cards",
            SummaryCard { label: "Latest", value: format!("{:.1} {unit}", summary.latest) }
            SummaryCard { label: "Change", value: format!("{} {unit}", summary.display_change()) }
            SummaryCard { label: "Lowest", value: format!("{:.1} {unit}", summary.lowest) }
            SummaryCard { label: "Highest", value: format!("{:.1} {unit}", summary.highest) }
            SummaryCard { label: "Average", value: format!("{:.1} {unit}", summary.average) }
            SummaryCard { label: "Entries", value: summary.entries.to_string() }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "summary-card",
            span { class: "summary-label", "{label}" }
            span { class: "summary-value", "{value}" }
        }
    }
}

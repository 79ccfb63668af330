//! # Weight chart geometry and summary
//!
//! Turns a list of [`WeightRecord`]s into coordinates for an SVG line chart.
//! The renderer only draws what [`ChartGeometry`] computes, so all scaling
//! rules are testable here.
//!
//! ## Layout
//!
//! | Element | Rule |
//! |---------|------|
//! | Plot area | the canvas minus [`MARGIN_LEFT`], [`MARGIN_RIGHT`], [`MARGIN_TOP`], [`MARGIN_BOTTOM`] |
//! | Y range | min/max of the series padded by 10 %, or ±1 lb for a flat series |
//! | X position | linear in time between the first and last record; a single record sits in the middle |
//! | Grid | [`GRID_LINES`] + 1 horizontal lines, labelled with one decimal |
//! | X labels | at most [`X_LABELS`] dates (`%m/%d`), evenly picked from the series |
//!
//! [`WeightSummary`] gives the figures shown above the chart.

use chrono::NaiveDateTime;

use crate::models::WeightRecord;

pub const MARGIN_LEFT: f64 = 56.0;
pub const MARGIN_RIGHT: f64 = 16.0;
pub const MARGIN_TOP: f64 = 16.0;
pub const MARGIN_BOTTOM: f64 = 32.0;
pub const GRID_LINES: usize = 5;
pub const X_LABELS: usize = 5;

/// A plotted record.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub weight_id: i64,
    pub weight: f64,
}

/// A horizontal grid line and its value label.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: String,
}

/// A date label under the x-axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub points: Vec<ChartPoint>,
    pub grid: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartGeometry {
    /// Lay out `records` on a `width` × `height` canvas. `None` when there is
    /// nothing to plot.
    pub fn compute(records: &[WeightRecord], width: f64, height: f64) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut series: Vec<&WeightRecord> = records.iter().collect();
        series.sort_by_key(|r| r.timestamp);

        let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

        let (mut y_min, mut y_max) = series
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.weight), hi.max(r.weight))
            });
        let spread = y_max - y_min;
        if spread > 0.0 {
            y_min -= spread * 0.1;
            y_max += spread * 0.1;
        } else {
            y_min -= 1.0;
            y_max += 1.0;
        }

        let first = series[0].timestamp;
        let last = series[series.len() - 1].timestamp;
        let span_ms = (last - first).num_milliseconds() as f64;

        let x_of = |ts: NaiveDateTime| -> f64 {
            if span_ms <= 0.0 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + ((ts - first).num_milliseconds() as f64 / span_ms) * plot_width
            }
        };
        let y_of = |value: f64| -> f64 { MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * plot_height };

        let points = series
            .iter()
            .map(|r| ChartPoint {
                x: x_of(r.timestamp),
                y: y_of(r.weight),
                weight_id: r.weight_id,
                weight: r.weight,
            })
            .collect();

        let grid = (0..=GRID_LINES)
            .map(|i| {
                let frac = i as f64 / GRID_LINES as f64;
                GridLine {
                    y: MARGIN_TOP + frac * plot_height,
                    label: format!("{:.1}", y_max - frac * (y_max - y_min)),
                }
            })
            .collect();

        let x_labels = label_indices(series.len(), X_LABELS)
            .into_iter()
            .map(|i| AxisLabel {
                x: x_of(series[i].timestamp),
                label: series[i].timestamp.format("%m/%d").to_string(),
            })
            .collect();

        Some(Self {
            width,
            height,
            points,
            grid,
            x_labels,
            y_min,
            y_max,
        })
    }

    /// The `points` attribute of an SVG `<polyline>`.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bottom edge of the plot area (the x-axis).
    pub fn baseline(&self) -> f64 {
        self.height - MARGIN_BOTTOM
    }
}

/// Pick up to `max` evenly spread indices out of `len`, always including the
/// first and last.
fn label_indices(len: usize, max: usize) -> Vec<usize> {
    if len == 0 || max == 0 {
        return Vec::new();
    }
    if len <= max {
        return (0..len).collect();
    }
    if max == 1 {
        return vec![0];
    }
    let mut out: Vec<usize> = (0..max)
        .map(|i| (i * (len - 1) + (max - 1) / 2) / (max - 1))
        .collect();
    out.dedup();
    out
}

/// Figures shown above the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightSummary {
    pub latest: f64,
    pub lowest: f64,
    pub highest: f64,
    pub average: f64,
    /// Latest minus earliest, chronologically.
    pub change: f64,
    pub entries: usize,
}

impl WeightSummary {
    pub fn from_records(records: &[WeightRecord]) -> Option<Self> {
        let earliest = records.iter().min_by_key(|r| r.timestamp)?;
        let latest = records.iter().max_by_key(|r| r.timestamp)?;
        let lowest = records.iter().map(|r| r.weight).fold(f64::INFINITY, f64::min);
        let highest = records
            .iter()
            .map(|r| r.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = records.iter().map(|r| r.weight).sum();
        Some(Self {
            latest: latest.weight,
            lowest,
            highest,
            average: sum / records.len() as f64,
            change: latest.weight - earliest.weight,
            entries: records.len(),
        })
    }

    /// Signed change with one decimal: `+1.5`, `-2.0`, `0.0`.
    pub fn display_change(&self) -> String {
        if self.change > 0.0 {
            format!("+{:.1}", self.change)
        } else {
            format!("{:.1}", self.change)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn record(weight_id: i64, weight: f64, ts: &str) -> WeightRecord {
        WeightRecord {
            weight_id,
            user_id: 1,
            weight,
            timestamp: parse_timestamp(ts).unwrap(),
        }
    }

    #[test]
    fn test_empty_series_has_no_chart() {
        assert!(ChartGeometry::compute(&[], 640.0, 260.0).is_none());
        assert!(WeightSummary::from_records(&[]).is_none());
    }

    #[test]
    fn test_points_sorted_and_scaled() {
        // Out of order on purpose
        let records = vec![
            record(2, 190.0, "2024-03-03T00:00:00"),
            record(1, 180.0, "2024-03-01T00:00:00"),
        ];
        let chart = ChartGeometry::compute(&records, 640.0, 260.0).unwrap();

        assert_eq!(chart.points[0].weight_id, 1);
        assert_eq!(chart.points[1].weight_id, 2);

        // First point on the left edge, last on the right edge
        assert_eq!(chart.points[0].x, MARGIN_LEFT);
        assert_eq!(chart.points[1].x, 640.0 - MARGIN_RIGHT);

        // Range padded by 10% of the spread
        assert!((chart.y_min - 179.0).abs() < 1e-9);
        assert!((chart.y_max - 191.0).abs() < 1e-9);

        // Heavier weight is drawn higher (smaller y)
        assert!(chart.points[1].y < chart.points[0].y);
    }

    #[test]
    fn test_flat_series_padded_by_one() {
        let records = vec![
            record(1, 150.0, "2024-03-01T00:00:00"),
            record(2, 150.0, "2024-03-02T00:00:00"),
        ];
        let chart = ChartGeometry::compute(&records, 640.0, 260.0).unwrap();
        assert_eq!(chart.y_min, 149.0);
        assert_eq!(chart.y_max, 151.0);
        assert_eq!(chart.grid.len(), GRID_LINES + 1);
        assert_eq!(chart.grid[0].label, "151.0");
        assert_eq!(chart.grid[GRID_LINES].label, "149.0");
    }

    #[test]
    fn test_single_point_centred() {
        let records = vec![record(1, 150.0, "2024-03-01T00:00:00")];
        let chart = ChartGeometry::compute(&records, 200.0, 100.0).unwrap();
        let plot_width = 200.0 - MARGIN_LEFT - MARGIN_RIGHT;
        assert_eq!(chart.points[0].x, MARGIN_LEFT + plot_width / 2.0);
        assert_eq!(chart.x_labels.len(), 1);
        assert_eq!(chart.x_labels[0].label, "03/01");
    }

    #[test]
    fn test_polyline_format() {
        let records = vec![
            record(1, 180.0, "2024-03-01T00:00:00"),
            record(2, 190.0, "2024-03-03T00:00:00"),
        ];
        let chart = ChartGeometry::compute(&records, 640.0, 260.0).unwrap();
        let line = chart.polyline();
        assert_eq!(line.split(' ').count(), 2);
        assert!(line.starts_with("56.0,"));
    }

    #[test]
    fn test_label_indices_spread() {
        assert_eq!(label_indices(3, 5), vec![0, 1, 2]);
        let picked = label_indices(20, 5);
        assert_eq!(picked.len(), 5);
        assert_eq!(picked[0], 0);
        assert_eq!(picked[4], 19);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            record(3, 178.0, "2024-03-05T00:00:00"),
            record(1, 182.0, "2024-03-01T00:00:00"),
            record(2, 180.0, "2024-03-03T00:00:00"),
        ];
        let summary = WeightSummary::from_records(&records).unwrap();
        assert_eq!(summary.latest, 178.0);
        assert_eq!(summary.lowest, 178.0);
        assert_eq!(summary.highest, 182.0);
        assert_eq!(summary.average, 180.0);
        assert_eq!(summary.change, -4.0);
        assert_eq!(summary.display_change(), "-4.0");
        assert_eq!(summary.entries, 3);
    }
}

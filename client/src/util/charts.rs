//! Geometry for the dashboard's inline SVG charts.
//!
//! Everything here is plain arithmetic over the fetched series; the chart
//! components only turn the results into SVG elements.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::net::types::{BarPoint, PieSlice};

/// Pie fill colors, cycled by slice index.
pub const PIE_COLORS: [&str; 2] = ["#3b82f6", "#22c55e"];
pub const BAR_COLOR: &str = "#f59e0b";

/// Shape for one pie slice.
#[derive(Clone, Debug, PartialEq)]
pub enum SliceShape {
    /// The slice covers the whole pie.
    Circle,
    /// SVG path data for a wedge.
    Path(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub shape: SliceShape,
    /// Share of the total, 0..=100.
    pub percent: f64,
}

pub fn pie_color(index: usize) -> &'static str {
    PIE_COLORS[index % PIE_COLORS.len()]
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Lay out pie wedges clockwise from twelve o'clock. Negative or non-finite
/// values count as zero; a zero total yields no segments.
pub fn pie_segments(slices: &[PieSlice], cx: f64, cy: f64, r: f64) -> Vec<PieSegment> {
    let values: Vec<f64> = slices.iter().map(|s| sanitize(s.value)).collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut segments = Vec::with_capacity(slices.len());
    for (index, (slice, value)) in slices.iter().zip(values).enumerate() {
        if value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * TAU;
        let shape = if fraction >= 1.0 {
            SliceShape::Circle
        } else {
            let end = start + sweep;
            let (x1, y1) = point_on_circle(cx, cy, r, start);
            let (x2, y2) = point_on_circle(cx, cy, r, end);
            let large_arc = u8::from(sweep > std::f64::consts::PI);
            SliceShape::Path(format!(
                "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
            ))
        };
        segments.push(PieSegment {
            label: slice.name.clone(),
            value,
            color: pie_color(index),
            shape,
            percent: fraction * 100.0,
        });
        start += sweep;
    }
    segments
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Round the largest value up to a readable axis maximum (1, 2, or 5 times
/// a power of ten). Empty or all-zero series get an axis of 1.
pub fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().map(sanitize).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = 10_f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// Plot area for the bar chart, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarFrame {
    pub width: f64,
    pub height: f64,
    /// Left gutter for the axis labels.
    pub inset_left: f64,
    /// Bottom gutter for the date labels.
    pub inset_bottom: f64,
}

impl BarFrame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.inset_left).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.inset_bottom).max(0.0)
    }

    /// Y coordinate of the baseline.
    pub fn baseline(&self) -> f64 {
        self.plot_height()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Fraction of each band a bar fills.
const BAR_FILL: f64 = 0.6;

/// One bar per point, evenly banded across the plot, scaled to `axis_max`.
pub fn bar_layout(points: &[BarPoint], frame: BarFrame) -> Vec<BarRect> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = axis_max(points.iter().map(|p| p.stalls));
    #[allow(clippy::cast_precision_loss)]
    let band = frame.plot_width() / points.len() as f64;
    let width = band * BAR_FILL;
    let baseline = frame.baseline();

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let value = sanitize(point.stalls);
            let height = frame.plot_height() * (value / max);
            #[allow(clippy::cast_precision_loss)]
            let x = frame.inset_left + band * i as f64 + (band - width) / 2.0;
            BarRect { label: point.date.clone(), value, x, y: baseline - height, width, height }
        })
        .collect()
}

/// Axis tick values from 0 to `max`, inclusive.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    #[allow(clippy::cast_precision_loss)]
    let step = max / count as f64;
    #[allow(clippy::cast_precision_loss)]
    (0..=count).map(|i| step * i as f64).collect()
}

/// Tick label without a trailing `.0` for whole numbers.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 { format!("{value:.0}") } else { format!("{value:.1}") }
}

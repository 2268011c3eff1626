//! Inline SVG charts for the analytics screen.

use leptos::prelude::*;

use crate::net::types::{BarPoint, PieSlice};
use crate::util::charts::{
    BAR_COLOR, BarFrame, SliceShape, axis_max, axis_ticks, bar_layout, format_tick, pie_segments,
};

const PIE_SIZE: f64 = 220.0;
const PIE_RADIUS: f64 = 90.0;
const BAR_FRAME: BarFrame = BarFrame { width: 480.0, height: 240.0, inset_left: 36.0, inset_bottom: 28.0 };
const TICK_COUNT: usize = 4;

#[component]
pub fn PieChart(title: &'static str, slices: Vec<PieSlice>) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let segments = pie_segments(&slices, center, center, PIE_RADIUS);
    let empty = segments.is_empty();

    let shapes = segments
        .iter()
        .map(|segment| match &segment.shape {
            SliceShape::Circle => {
                view! { <circle cx=center cy=center r=PIE_RADIUS fill=segment.color></circle> }.into_any()
            }
            SliceShape::Path(d) => view! { <path d=d.clone() fill=segment.color></path> }.into_any(),
        })
        .collect_view();

    let legend = segments
        .iter()
        .map(|segment| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background:{}", segment.color)></span>
                    {format!("{}: {} ({:.0}%)", segment.label, format_tick(segment.value), segment.percent)}
                </li>
            }
        })
        .collect_view();

    let body = if empty {
        view! { <p class="chart__empty">"No data yet."</p> }.into_any()
    } else {
        view! {
            <svg viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}") class="chart__svg" role="img">
                {shapes}
            </svg>
        }
            .into_any()
    };

    view! {
        <figure class="chart chart--pie">
            <figcaption class="chart__title">{title}</figcaption>
            {body}
            <ul class="chart__legend">{legend}</ul>
        </figure>
    }
}

#[component]
pub fn BarChart(title: &'static str, points: Vec<BarPoint>) -> impl IntoView {
    let bars = bar_layout(&points, BAR_FRAME);
    let max = axis_max(points.iter().map(|p| p.stalls));
    let baseline = BAR_FRAME.baseline();
    let empty = bars.is_empty();

    let gridlines = axis_ticks(max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = baseline - BAR_FRAME.plot_height() * (tick / max);
            view! {
                <g class="chart__tick">
                    <line x1=BAR_FRAME.inset_left x2=BAR_FRAME.width y1=y y2=y></line>
                    <text x={BAR_FRAME.inset_left - 6.0} y={y + 4.0} text-anchor="end">
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let rects = bars
        .into_iter()
        .map(|bar| {
            let label_y = baseline + 18.0;
            let center_x = bar.center_x();
            view! {
                <g class="chart__bar">
                    <rect x=bar.x y=bar.y width=bar.width height=bar.height fill=BAR_COLOR></rect>
                    <text x=center_x y=label_y text-anchor="middle">
                        {bar.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let body = if empty {
        view! { <p class="chart__empty">"No data yet."</p> }.into_any()
    } else {
        view! {
            <svg viewBox=format!("0 0 {} {}", BAR_FRAME.width, BAR_FRAME.height) class="chart__svg" role="img">
                {gridlines}
                {rects}
            </svg>
        }
            .into_any()
    };

    view! {
        <figure class="chart chart--bar">
            <figcaption class="chart__title">{title}</figcaption>
            {body}
        </figure>
    }
}

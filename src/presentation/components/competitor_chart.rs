// Competitor comparison: app rating bars and estimated market share pie
use super::{axis_colors, coord, AxisColors, ChartProps};
use crate::domain::charts::{market_share, rating_comparison, BarChart, PieChart};
use yew::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_TOP: f64 = 8.0;
const FALLBACK_COLOR: &str = "#94a3b8";

fn chart_container(title: &'static str, subtitle: &'static str, body: Html) -> Html {
    html! {
        <div class="chart-container">
            <div class="chart-container__header">
                <h3 class="chart-container__title">{title}</h3>
                <p class="chart-container__subtitle">{subtitle}</p>
            </div>
            <div class="chart-wrapper">{body}</div>
        </div>
    }
}

fn bar_svg(chart: &BarChart, axis: AxisColors) -> Html {
    let plot_width = WIDTH - MARGIN_LEFT;
    let plot_height = HEIGHT - MARGIN_BOTTOM - MARGIN_TOP;
    let y = |value: f64| MARGIN_TOP + plot_height - (value.clamp(0.0, chart.y_max) / chart.y_max) * plot_height;

    // Integer ticks from zero to the scale maximum.
    let ticks = (0..=chart.y_max as u32).map(|tick| {
        let tick = f64::from(tick);
        html! {
            <>
                <line x1={coord(MARGIN_LEFT)} x2={coord(WIDTH)} y1={coord(y(tick))} y2={coord(y(tick))} stroke={axis.grid} />
                <text x={coord(MARGIN_LEFT - 6.0)} y={coord(y(tick) + 4.0)} fill={axis.ticks} font-size="11" text-anchor="end">{tick.to_string()}</text>
            </>
        }
    });

    let slot = plot_width / chart.labels.len().max(1) as f64;
    let bars = chart.labels.iter().zip(&chart.values).enumerate().map(|(index, (label, value))| {
        let color = chart.colors.get(index).copied().unwrap_or(FALLBACK_COLOR);
        let x = MARGIN_LEFT + slot * index as f64 + slot * 0.2;
        let top = y(*value);
        html! {
            <>
                <rect x={coord(x)} y={coord(top)} width={coord(slot * 0.6)} height={coord(MARGIN_TOP + plot_height - top)}
                    fill={color} fill-opacity="0.8" stroke={color} stroke-width="2">
                    <title>{format!("{label}: {value}")}</title>
                </rect>
                <text x={coord(x + slot * 0.3)} y={coord(HEIGHT - 8.0)} fill={axis.ticks} font-size="12" text-anchor="middle">{label.clone()}</text>
            </>
        }
    });

    html! {
        <svg class="bar-chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img" aria-label={chart.dataset_label}>
            { for ticks }
            { for bars }
        </svg>
    }
}

fn pie(chart: &PieChart, axis: AxisColors) -> Html {
    let total: f64 = chart.values.iter().sum();
    let mut stops = Vec::with_capacity(chart.values.len());
    let mut legend = Vec::with_capacity(chart.values.len());
    let mut start = 0.0;

    for (index, (label, value)) in chart.labels.iter().zip(&chart.values).enumerate() {
        let color = chart.colors.get(index).copied().unwrap_or(FALLBACK_COLOR);
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        stops.push(format!("{color} {start:.2}% {:.2}%", start + share));
        start += share;
        legend.push(html! {
            <li style={format!("color: {}", axis.ticks)}>
                <span class="legend__swatch" style={format!("background: {color}")}></span>
                {format!("{label}: {value}%")}
            </li>
        });
    }

    html! {
        <div class="pie-chart">
            <div class="pie-chart__disc" style={format!("background: conic-gradient({})", stops.join(", "))}></div>
            <ul class="pie-chart__legend">{ for legend }</ul>
        </div>
    }
}

/// Empty when the payload has no competitor mapping
#[function_component(CompetitorCharts)]
pub fn competitor_charts(props: &ChartProps) -> Html {
    let Some(ratings) = rating_comparison(&props.payload) else {
        return html! {};
    };
    let axis = axis_colors(props.theme);
    let shares = market_share(&props.payload)
        .map(|shares| chart_container(shares.title, shares.subtitle, pie(&shares, axis)));

    html! {
        <div class="charts-grid">
            {chart_container(ratings.title, ratings.subtitle, bar_svg(&ratings, axis))}
            { for shares }
        </div>
    }
}

// Search interest line chart for the growth section
use super::{axis_colors, coord, placeholder, AxisColors, ChartProps};
use crate::domain::charts::{search_trends, LineChart};
use yew::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 36.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 30.0;
const GRID_LINES: usize = 4;

fn line_svg(chart: &LineChart, axis: AxisColors) -> Html {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let y_max = chart
        .series
        .iter()
        .flat_map(|series| series.values.iter().copied())
        .fold(0.0, f64::max)
        .max(1.0);
    let step = if chart.labels.len() > 1 {
        plot_width / (chart.labels.len() - 1) as f64
    } else {
        0.0
    };
    let x = |index: usize| MARGIN_LEFT + step * index as f64;
    let y = |value: f64| MARGIN_TOP + plot_height - (value.max(0.0) / y_max) * plot_height;

    let grid = (0..=GRID_LINES).map(|line| {
        let value = y_max * line as f64 / GRID_LINES as f64;
        html! {
            <>
                <line x1={coord(MARGIN_LEFT)} x2={coord(WIDTH - MARGIN_RIGHT)} y1={coord(y(value))} y2={coord(y(value))} stroke={axis.grid} />
                <text x={coord(MARGIN_LEFT - 6.0)} y={coord(y(value) + 4.0)} fill={axis.ticks} font-size="11" text-anchor="end">{format!("{value:.0}")}</text>
            </>
        }
    });

    // Label every bucket when few, otherwise thin them out to keep text readable.
    let label_every = chart.labels.len().div_ceil(12).max(1);
    let labels = chart.labels.iter().enumerate().step_by(label_every).map(|(index, label)| {
        html! {
            <text x={coord(x(index))} y={coord(HEIGHT - 10.0)} fill={axis.ticks} font-size="11" text-anchor="middle">{label.clone()}</text>
        }
    });

    let lines = chart.series.iter().map(|series| {
        let points: Vec<String> = series
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{},{}", coord(x(index)), coord(y(*value))))
            .collect();
        html! {
            <polyline points={points.join(" ")} fill="none" stroke={series.color} stroke-width="2">
                <title>{series.label}</title>
            </polyline>
        }
    });

    html! {
        <svg class="line-chart" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img" aria-label="Search interest">
            { for grid }
            { for labels }
            { for lines }
        </svg>
    }
}

fn legend(chart: &LineChart, axis: AxisColors) -> Html {
    html! {
        <ul class="chart-legend">
            { for chart.series.iter().map(|series| html! {
                <li style={format!("color: {}", axis.ticks)}>
                    <span class="legend__swatch" style={format!("background: {}", series.color)}></span>
                    {series.label}
                </li>
            }) }
        </ul>
    }
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &ChartProps) -> Html {
    let Some(chart) = search_trends(&props.payload) else {
        return html! {
            <div class="chart-container">
                <div class="chart-container__header">
                    <h3 class="chart-container__title">{"Search Interest Trends"}</h3>
                    <p class="chart-container__subtitle">{"12-month Google Trends data"}</p>
                </div>
                {placeholder("No trend data available. Run the data fetch script.")}
            </div>
        };
    };
    let axis = axis_colors(props.theme);

    html! {
        <div class="chart-container">
            <div class="chart-container__header">
                <h3 class="chart-container__title">{chart.title}</h3>
                <p class="chart-container__subtitle">{chart.subtitle}</p>
            </div>
            {legend(&chart, axis)}
            <div class="chart-wrapper">{line_svg(&chart, axis)}</div>
        </div>
    }
}

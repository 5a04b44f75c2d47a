// Chart and card datasets shaped from the dashboard payload
use super::format::{format_count, format_currency, format_month_label, format_rating};
use super::payload::DashboardPayload;
use serde::Serialize;

/// Label of the subject company in comparison charts
pub const SUBJECT_LABEL: &str = "Jumia";

/// Search terms plotted on the trend chart, in legend order.
/// `Ouedkniss` and `ouedkniss` are tracked as distinct terms.
pub const TRACKED_SERIES: [&str; 5] = ["Jumia Algeria", "Ouedkniss", "Batolis", "ouedkniss", "Soukshop"];

pub const PALETTE: [&str; 5] = ["#f68b1e", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899"];

/// Placeholder market shares. Not derived from any payload field.
pub const ESTIMATED_MARKET_SHARE: [f64; 4] = [35.0, 25.0, 25.0, 15.0];

pub const RATING_SCALE_MAX: f64 = 5.0;

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRow {
    pub country: String,
    pub interest: f64,
    pub fill_percent: f64,
}

/// KPI cards for the overview section; `None` when the payload has no company block
pub fn kpi_cards(payload: &DashboardPayload) -> Option<Vec<KpiCard>> {
    let company = payload.company.as_ref()?;

    Some(vec![
        KpiCard {
            title: "Revenue",
            value: format_currency(company.revenue),
            label: "Annual Revenue (Estimated)",
            icon: "💰",
        },
        KpiCard {
            title: "GMV",
            value: format_currency(company.gmv),
            label: "Gross Merchandise Value",
            icon: "🛒",
        },
        KpiCard {
            title: "Active Users",
            value: format_count(company.active_users),
            label: "Monthly Active Users",
            icon: "👥",
        },
        KpiCard {
            title: "Countries",
            value: company.countries.as_ref().map_or(0, Vec::len).to_string(),
            label: "Operating Countries",
            icon: "🌍",
        },
        KpiCard {
            title: "App Rating",
            value: format_rating(payload.play_store_rating()),
            label: "Google Play Store",
            icon: "⭐",
        },
        KpiCard {
            title: "Total Funding",
            value: format_currency(company.funding_total),
            label: "Lifetime Funding",
            icon: "💼",
        },
    ])
}

// Subject first, then competitors exactly as they arrived.
fn comparison_labels(payload: &DashboardPayload) -> Option<Vec<String>> {
    let competitors = payload.competitors.as_ref()?;
    let mut labels = vec![SUBJECT_LABEL.to_string()];
    labels.extend(competitors.names().map(str::to_string));
    Some(labels)
}

/// App rating bar chart; `None` when the payload has no competitor mapping
pub fn rating_comparison(payload: &DashboardPayload) -> Option<BarChart> {
    let competitors = payload.competitors.as_ref()?;
    let labels = comparison_labels(payload)?;

    let mut values = Vec::with_capacity(labels.len());
    values.push(payload.play_store_rating().unwrap_or(0.0));
    values.extend(
        competitors
            .iter()
            .map(|(_, metrics)| metrics.app_rating.unwrap_or(0.0)),
    );

    Some(BarChart {
        title: "App Ratings Comparison",
        subtitle: "Google Play Store ratings",
        dataset_label: "App Rating",
        colors: (0..labels.len()).map(palette_color).collect(),
        labels,
        values,
        y_max: RATING_SCALE_MAX,
    })
}

/// Market share pie built from the placeholder shares
pub fn market_share(payload: &DashboardPayload) -> Option<PieChart> {
    let (labels, values): (Vec<String>, Vec<f64>) = comparison_labels(payload)?
        .into_iter()
        .zip(ESTIMATED_MARKET_SHARE)
        .unzip();

    Some(PieChart {
        title: "Market Share (Estimated)",
        subtitle: "Placeholder estimate, not derived from fetched data",
        colors: (0..labels.len()).map(palette_color).collect(),
        labels,
        values,
        estimated: true,
    })
}

/// Search interest line chart; `None` when there are no time buckets
pub fn search_trends(payload: &DashboardPayload) -> Option<LineChart> {
    let timeseries = payload.timeseries();
    if timeseries.is_empty() {
        return None;
    }

    let labels = timeseries
        .iter()
        .map(|point| format_month_label(point.date()))
        .collect();

    let series = TRACKED_SERIES
        .into_iter()
        .enumerate()
        .map(|(index, name)| Series {
            label: name,
            color: palette_color(index),
            values: timeseries.iter().map(|point| point.value(name)).collect(),
        })
        .collect();

    Some(LineChart {
        title: "Search Interest Trends (Algeria)",
        subtitle: "12-month Google Trends comparison for Algeria e-commerce",
        labels,
        series,
    })
}

/// Rows for the country interest table, bars scaled against the largest value
pub fn country_interest(payload: &DashboardPayload) -> Vec<CountryRow> {
    let entries = payload.interest_by_country();
    let max_interest = entries
        .iter()
        .filter_map(|entry| entry.interest)
        .fold(f64::NEG_INFINITY, f64::max);

    entries
        .iter()
        .map(|entry| {
            let interest = entry.interest.unwrap_or(0.0);
            let fill_percent = if max_interest > 0.0 {
                interest / max_interest * 100.0
            } else {
                0.0
            };
            CountryRow {
                country: entry.country.clone().unwrap_or_default(),
                interest,
                fill_percent,
            }
        })
        .collect()
}

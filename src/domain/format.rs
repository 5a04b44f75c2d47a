// Number and date formatting for dashboard cards, charts and lists
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown for a missing or zero metric
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown when the payload carries no fetch timestamp
pub const UNKNOWN_TIMESTAMP: &str = "Unknown";

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

// Absent, zero and NaN all count as "no value".
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n != 0.0 && !n.is_nan())
}

/// Compact monetary magnitude: `$1.20B`, `$185.0M`, `4.5K`, `999`
pub fn format_currency(value: Option<f64>) -> String {
    let Some(n) = present(value) else {
        return NOT_AVAILABLE.to_string();
    };

    if n >= BILLION {
        format!("${:.2}B", n / BILLION)
    } else if n >= MILLION {
        format!("${:.1}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("{:.1}K", n / THOUSAND)
    } else {
        format_localized(n)
    }
}

/// Compact count without currency prefix: `3.5M`, `12.0K`, `950`
pub fn format_count(value: Option<f64>) -> String {
    let Some(n) = present(value) else {
        return NOT_AVAILABLE.to_string();
    };

    if n >= MILLION {
        format!("{:.1}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("{:.1}K", n / THOUSAND)
    } else {
        format_localized(n)
    }
}

pub fn format_rating(value: Option<f64>) -> String {
    match value {
        Some(rating) if !rating.is_nan() => format!("{:.1}", rating),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// en-US style number: thousands grouped with commas, at most three decimals
pub fn format_localized(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + integer.len() / 3 + 1);
    if value < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Parse the timestamp shapes the backend emits: RFC 3339, naive ISO 8601, or a bare date
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Long article date, e.g. `March 1, 2025`. Unparseable input is shown verbatim.
pub fn format_article_date(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => String::new(),
        Some(raw) => parse_timestamp(raw)
            .map(|ts| ts.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Trend bucket label, e.g. `Jan 2025`
pub fn format_month_label(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some(raw) => parse_timestamp(raw)
            .map(|ts| ts.format("%b %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

pub fn format_fetched_at(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%B %-d, %Y at %I:%M %p").to_string())
        .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string())
}

use chrono::NaiveDate;

use crate::utils::utc_datetime;

/// Placeholder for any statistic that has no value
pub const SENTINEL: &str = "—";

/// Format epoch seconds as `2025-01-01 00:00:00 UTC`
pub fn format_timestamp(ts: Option<f64>) -> String {
    ts.and_then(utc_datetime)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Hour of day in 12-hour form: "12:00 AM", "9:00 AM", "1:00 PM"
pub fn format_hour_12h(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        1..=11 => format!("{}:00 AM", hour),
        12 => "12:00 PM".to_string(),
        _ => format!("{}:00 PM", hour - 12),
    }
}

/// Fixed-precision display of an optional value
pub fn format_decimal(value: Option<f64>, precision: usize) -> String {
    value.map(|v| format!("{:.*}", precision, v)).unwrap_or_else(|| SENTINEL.to_string())
}

/// Percentage with one decimal, e.g. "42.9%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

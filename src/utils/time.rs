use chrono::{DateTime, NaiveDate, Utc};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Convert epoch seconds to a UTC datetime. Out-of-range values yield `None`.
pub fn utc_datetime(ts: f64) -> Option<DateTime<Utc>> {
    if !ts.is_finite() {
        return None;
    }
    let secs = ts.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    let nanos = ((ts - secs) * NANOS_PER_SECOND).round().min(NANOS_PER_SECOND - 1.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

/// UTC calendar date of epoch seconds
pub fn utc_date(ts: f64) -> Option<NaiveDate> {
    utc_datetime(ts).map(|dt| dt.date_naive())
}

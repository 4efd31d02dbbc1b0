//! UTC calendar statistics over conversation start timestamps.
//!
//! Starts that cannot be placed on the calendar (out of chrono's range) are ignored here.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use crate::models::{DayCount, Gap, HourCount, Streak, WeekSplit};
use crate::utils::{utc_date, utc_datetime};

/// Largest gap between consecutive sorted starts; the first such gap wins ties
pub fn longest_break(starts: &[f64]) -> Option<Gap> {
    let mut sorted = starts.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best: Option<Gap> = None;
    for pair in sorted.windows(2) {
        let seconds = pair[1] - pair[0];
        if best.is_none_or(|gap| seconds > gap.seconds) {
            best = Some(Gap { seconds, from: pair[0], to: pair[1] });
        }
    }
    best
}

/// Date with the most starts; ties go to the later date
pub fn most_active_day(starts: &[f64]) -> Option<DayCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in starts.iter().filter_map(|&ts| utc_date(ts)) {
        *counts.entry(date).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(date, count)| (count, date))
        .map(|(date, count)| DayCount { date, count })
}

/// Longest run of consecutive active dates; the earliest such run wins ties
pub fn longest_streak(starts: &[f64]) -> Option<Streak> {
    let mut days: Vec<NaiveDate> = starts.iter().filter_map(|&ts| utc_date(ts)).collect();
    days.sort_unstable();
    days.dedup();

    let first = *days.first()?;
    let mut best = Streak { length: 1, start: first, end: first };
    let mut current = best;

    for pair in days.windows(2) {
        if pair[1].signed_duration_since(pair[0]).num_days() == 1 {
            current.length += 1;
            current.end = pair[1];
        } else {
            current = Streak { length: 1, start: pair[1], end: pair[1] };
        }
        if current.length > best.length {
            best = current;
        }
    }

    Some(best)
}

/// Starts per UTC hour of day
pub fn hourly_histogram(starts: &[f64]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for dt in starts.iter().filter_map(|&ts| utc_datetime(ts)) {
        hours[dt.hour() as usize] += 1;
    }
    hours
}

/// Starts per UTC weekday, Monday first
pub fn weekday_histogram(starts: &[f64]) -> [usize; 7] {
    let mut weekdays = [0usize; 7];
    for dt in starts.iter().filter_map(|&ts| utc_datetime(ts)) {
        weekdays[dt.weekday().num_days_from_monday() as usize] += 1;
    }
    weekdays
}

/// Most frequent hour; ties go to the lowest hour
pub fn peak_hour(hourly: &[usize; 24]) -> Option<HourCount> {
    let mut best: Option<HourCount> = None;
    for (hour, &count) in hourly.iter().enumerate() {
        if count > 0 && best.is_none_or(|peak| count > peak.count) {
            best = Some(HourCount { hour: hour as u32, count });
        }
    }
    best
}

pub fn week_split(weekdays: &[usize; 7]) -> WeekSplit {
    let weekend = weekdays[Weekday::Sat.num_days_from_monday() as usize]
        + weekdays[Weekday::Sun.num_days_from_monday() as usize];
    let total: usize = weekdays.iter().sum();
    WeekSplit { weekend, weekday: total - weekend }
}

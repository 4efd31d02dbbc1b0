//! Metrics engine over a set of conversations and their resolved spans
//!
//! Every statistic is recomputed from scratch on each call. Missing data degrades to the
//! statistic's sentinel (`None`, an empty list or zero counts) instead of failing:
//!
//! - **builder**: orchestrates one pass and computes volume, cadence and turn metrics
//! - **calendar**: UTC date, hour and weekday statistics over start timestamps
//! - **politeness**: politeness marker ratio over user messages
//! - **themes**: keyword theme tally over conversation titles

pub mod builder;
pub mod calendar;
pub mod politeness;
pub mod themes;

pub use builder::{average_per_day, build_snapshot, build_snapshot_with_spans};
pub use politeness::{is_polite, politeness};
pub use themes::{theme_summary, title_themes};

use std::fmt;

use super::format::{
    SENTINEL, format_date, format_decimal, format_hour_12h, format_percent, format_timestamp,
};
use crate::models::MetricsSnapshot;
use crate::pipeline::Analysis;
use crate::stats::theme_summary;

/// Render an analysis as the plain-text summary printed by `chat-wrapped analyze`
pub fn render_summary(analysis: &Analysis) -> String {
    Summary(analysis).to_string()
}

/// Plain-text view of one analysis
pub struct Summary<'a>(pub &'a Analysis);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let heading = match analysis.year {
            Some(year) => format!("Chat Wrapped {}", year),
            None => "Chat Wrapped (all years)".to_string(),
        };

        writeln!(f, "{}", heading)?;
        writeln!(f, "{}", "=".repeat(heading.chars().count()))?;
        writeln!(f, "Chats in export: {}", analysis.total_in_export)?;
        write_snapshot(f, &analysis.snapshot)
    }
}

fn write_snapshot(f: &mut fmt::Formatter<'_>, snapshot: &MetricsSnapshot) -> fmt::Result {
    writeln!(f, "Total chats: {}", snapshot.total_conversations)?;
    writeln!(f, "First chat: {}", format_timestamp(snapshot.earliest))?;
    writeln!(f, "Latest chat: {}", format_timestamp(snapshot.latest))?;
    writeln!(f, "Average chats per day: {}", format_decimal(snapshot.average_per_day, 2))?;

    let longest_break = match &snapshot.longest_break {
        Some(gap) => format!(
            "{:.2} days ({} → {})",
            gap.days(),
            format_timestamp(Some(gap.from)),
            format_timestamp(Some(gap.to))
        ),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Longest break: {}", longest_break)?;

    let politeness = match snapshot.politeness.score {
        Some(score) => format!("{}/5", score),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Politeness score: {}", politeness)?;

    let most_active = match &snapshot.most_active_day {
        Some(day) => format!("{} chats on {} UTC", day.count, format_date(day.date)),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Most active day: {}", most_active)?;

    let longest_conversation = match &snapshot.longest_conversation {
        Some(conv) => format!("{} turns ({})", conv.turns, conv.title),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Longest conversation: {}", longest_conversation)?;
    writeln!(
        f,
        "Average conversation length: {} turns",
        format_decimal(snapshot.average_turns, 1)
    )?;

    let streak = match &snapshot.longest_streak {
        Some(streak) => format!(
            "{} days ({} → {} UTC)",
            streak.length,
            format_date(streak.start),
            format_date(streak.end)
        ),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Longest streak: {}", streak)?;

    let peak = match &snapshot.peak_hour {
        Some(peak) => format!("{} UTC ({} chats)", format_hour_12h(peak.hour), peak.count),
        None => SENTINEL.to_string(),
    };
    writeln!(f, "Peak hour: {}", peak)?;

    let split = &snapshot.week_split;
    writeln!(f, "Weekend chats: {} ({})", split.weekend, format_percent(split.weekend_percent()))?;
    writeln!(f, "Weekday chats: {} ({})", split.weekday, format_percent(split.weekday_percent()))?;
    writeln!(f, "{}", theme_summary(&snapshot.themes))
}

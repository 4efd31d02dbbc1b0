use tracing::{debug, warn};

use super::calendar::{
    hourly_histogram, longest_break, longest_streak, most_active_day, peak_hour, week_split,
    weekday_histogram,
};
use super::politeness::politeness;
use super::themes::title_themes;
use crate::models::{Conversation, LongestConversation, MetricsSnapshot, ResolvedSpan};
use crate::parsers::{resolve_span, resolve_spans};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Compute every statistic over `conversations`.
///
/// Conversations without a resolvable start or end still count toward the total, turns and
/// politeness, but are left out of every time-indexed statistic.
pub fn build_snapshot(conversations: &[Conversation]) -> MetricsSnapshot {
    let spans = resolve_spans(conversations);
    build_snapshot_with_spans(conversations, &spans)
}

/// Same as [`build_snapshot`] with spans already resolved.
///
/// `spans[i]` belongs to `conversations[i]`. Conversations past the end of `spans` are
/// resolved here, and spans past the end of `conversations` are ignored.
pub fn build_snapshot_with_spans(
    conversations: &[Conversation],
    spans: &[ResolvedSpan],
) -> MetricsSnapshot {
    if spans.len() != conversations.len() {
        warn!(
            conversations = conversations.len(),
            spans = spans.len(),
            "span count does not match conversation count"
        );
    }
    let spans: Vec<ResolvedSpan> = conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            spans.get(index).copied().unwrap_or_else(|| resolve_span(conversation))
        })
        .collect();

    let starts: Vec<f64> = spans.iter().filter_map(|span| span.start).collect();
    let ends: Vec<f64> = spans.iter().filter_map(|span| span.end).collect();

    let unplaceable = spans.iter().filter(|span| span.start.is_none()).count();
    if unplaceable > 0 {
        debug!(unplaceable, "conversations without a resolvable start");
    }

    let earliest = starts.iter().copied().reduce(f64::min);
    let latest = ends.iter().copied().reduce(f64::max);

    let turns: Vec<usize> = conversations.iter().map(Conversation::turns).collect();
    let hourly = hourly_histogram(&starts);
    let weekdays = weekday_histogram(&starts);

    MetricsSnapshot {
        total_conversations: conversations.len(),
        earliest,
        latest,
        average_per_day: average_per_day(conversations.len(), earliest, latest),
        longest_break: longest_break(&starts),
        most_active_day: most_active_day(&starts),
        average_turns: average_turns(&turns),
        longest_conversation: longest_conversation(conversations, &turns),
        longest_streak: longest_streak(&starts),
        politeness: politeness(conversations),
        peak_hour: peak_hour(&hourly),
        hourly,
        weekdays,
        week_split: week_split(&weekdays),
        themes: title_themes(conversations),
    }
}

/// `count / max(1, window_days)`, only when both bounds exist and are ordered
pub fn average_per_day(count: usize, earliest: Option<f64>, latest: Option<f64>) -> Option<f64> {
    let (earliest, latest) = (earliest?, latest?);
    if latest < earliest {
        return None;
    }
    let window_days = ((latest - earliest) / SECONDS_PER_DAY).max(1.0);
    Some(count as f64 / window_days)
}

fn average_turns(turns: &[usize]) -> Option<f64> {
    if turns.is_empty() {
        return None;
    }
    Some(turns.iter().sum::<usize>() as f64 / turns.len() as f64)
}

/// Conversation with the most turns; the first one encountered wins ties
fn longest_conversation(
    conversations: &[Conversation],
    turns: &[usize],
) -> Option<LongestConversation> {
    let mut best: Option<(usize, usize)> = None;
    for (index, &count) in turns.iter().enumerate() {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((index, count));
        }
    }

    best.map(|(index, turns)| LongestConversation {
        index,
        title: conversations[index].display_title().to_string(),
        turns,
    })
}

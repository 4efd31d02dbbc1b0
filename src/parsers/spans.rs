use crate::models::{Conversation, ResolvedSpan};

/// Resolve a conversation's (start, end) bounds.
///
/// Explicit `create_time`/`update_time` win. Only a missing side is filled from the
/// message timestamps: the earliest for `start`, the latest for `end`. Both sides may stay
/// `None` when nothing coerces.
pub fn resolve_span(conversation: &Conversation) -> ResolvedSpan {
    let mut start = conversation.create_time();
    let mut end = conversation.update_time();

    if start.is_none() || end.is_none() {
        let mut earliest: Option<f64> = None;
        let mut latest: Option<f64> = None;
        for ts in conversation.messages().filter_map(|message| message.timestamp()) {
            earliest = Some(earliest.map_or(ts, |current| current.min(ts)));
            latest = Some(latest.map_or(ts, |current| current.max(ts)));
        }
        start = start.or(earliest);
        end = end.or(latest);
    }

    ResolvedSpan::new(start, end)
}

/// Resolve spans for a whole sequence, index-aligned with the input
pub fn resolve_spans(conversations: &[Conversation]) -> Vec<ResolvedSpan> {
    conversations.iter().map(resolve_span).collect()
}

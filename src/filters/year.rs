use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Conversation;
use crate::parsers::resolve_span;
use crate::utils::{current_utc_year, utc_datetime};

/// Which calendar year an analysis pass covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearSelection {
    /// Current UTC year at analysis time
    #[default]
    Current,
    Year(i32),
    /// No filtering
    AllYears,
}

impl YearSelection {
    /// The concrete year to filter on, `None` for [`YearSelection::AllYears`]
    pub fn resolve(self) -> Option<i32> {
        match self {
            YearSelection::Current => Some(current_utc_year()),
            YearSelection::Year(year) => Some(year),
            YearSelection::AllYears => None,
        }
    }
}

/// Keep conversations whose resolved start falls in `year` (UTC).
///
/// Conversations without a resolvable start are dropped; `end` is never consulted.
pub fn filter_by_year(conversations: Vec<Conversation>, year: i32) -> Vec<Conversation> {
    let before = conversations.len();
    let kept: Vec<Conversation> = conversations
        .into_iter()
        .filter(|conversation| start_year(conversation) == Some(year))
        .collect();

    debug!(year, kept = kept.len(), dropped = before - kept.len(), "applied year filter");
    kept
}

fn start_year(conversation: &Conversation) -> Option<i32> {
    resolve_span(conversation).start.and_then(utc_datetime).map(|dt| dt.year())
}

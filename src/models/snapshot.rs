use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolved (start, end) time bounds of a conversation, in POSIX seconds (UTC)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSpan {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ResolvedSpan {
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        Self { start, end }
    }
}

/// Largest gap between consecutive sorted starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub seconds: f64,
    pub from: f64,
    pub to: f64,
}

impl Gap {
    pub fn days(&self) -> f64 {
        self.seconds / 86_400.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

/// Run of consecutive active UTC dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub length: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestConversation {
    /// Position within the analysed sequence
    pub index: usize,
    pub title: String,
    pub turns: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politeness {
    pub polite_messages: usize,
    pub user_messages: usize,
    /// 1..=5, `None` when there are no user messages
    pub score: Option<u8>,
}

impl Politeness {
    pub fn ratio(&self) -> Option<f64> {
        (self.user_messages > 0).then(|| self.polite_messages as f64 / self.user_messages as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSplit {
    pub weekend: usize,
    pub weekday: usize,
}

impl WeekSplit {
    pub fn total(&self) -> usize {
        self.weekend + self.weekday
    }

    /// Share of weekend starts in percent, 0 when there are no starts
    pub fn weekend_percent(&self) -> f64 {
        percent(self.weekend, self.total())
    }

    pub fn weekday_percent(&self) -> f64 {
        percent(self.weekday, self.total())
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 * 100.0 / total as f64 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub theme: String,
    pub count: usize,
}

/// Every derived statistic for one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_conversations: usize,
    pub earliest: Option<f64>,
    pub latest: Option<f64>,
    pub average_per_day: Option<f64>,
    pub longest_break: Option<Gap>,
    pub most_active_day: Option<DayCount>,
    pub average_turns: Option<f64>,
    pub longest_conversation: Option<LongestConversation>,
    pub longest_streak: Option<Streak>,
    pub politeness: Politeness,
    pub peak_hour: Option<HourCount>,
    /// Starts per UTC hour of day
    pub hourly: [usize; 24],
    /// Starts per UTC weekday, Monday first
    pub weekdays: [usize; 7],
    pub week_split: WeekSplit,
    pub themes: Vec<ThemeCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_split_percentages() {
        let split = WeekSplit { weekend: 1, weekday: 3 };
        assert_eq!(split.weekend_percent(), 25.0);
        assert_eq!(split.weekday_percent(), 75.0);
    }

    #[test]
    fn test_week_split_empty() {
        let split = WeekSplit::default();
        assert_eq!(split.total(), 0);
        assert_eq!(split.weekend_percent(), 0.0);
        assert_eq!(split.weekday_percent(), 0.0);
    }

    #[test]
    fn test_politeness_ratio() {
        assert_eq!(Politeness::default().ratio(), None);
        let politeness = Politeness { polite_messages: 2, user_messages: 4, score: Some(3) };
        assert_eq!(politeness.ratio(), Some(0.5));
    }

    #[test]
    fn test_gap_days() {
        let gap = Gap { seconds: 172_800.0, from: 0.0, to: 172_800.0 };
        assert_eq!(gap.days(), 2.0);
    }
}

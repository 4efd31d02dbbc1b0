//! Data models for chat-export analysis.
//!
//! - [`RawDocument`] - Parsed top-level export value, classified by shape
//! - [`Conversation`] / [`Message`] - Lenient views over conversation records and the
//!   message objects wrapped by their mapping nodes
//! - [`ResolvedSpan`] - Resolved (start, end) bounds of one conversation
//! - [`MetricsSnapshot`] - Every statistic derived in one analysis pass
//! - [`PersonaContent`] / [`ClassificationRequest`] / [`PersonaVerdict`] - Persona
//!   classifier boundary types
//!
//! Conversations are kept as JSON maps rather than strict serde structs: every field is
//! optional and a malformed field must degrade to "absent" instead of failing the record.

pub mod conversation;
pub mod persona;
pub mod snapshot;

pub use conversation::{Conversation, Message, RawDocument, Role, UNTITLED};
pub use persona::{
    ClassificationRequest, LabelDescription, PersonaContent, PersonaLabel, PersonaVerdict,
};
pub use snapshot::{
    DayCount, Gap, HourCount, LongestConversation, MetricsSnapshot, Politeness, ResolvedSpan,
    Streak, ThemeCount, WeekSplit,
};

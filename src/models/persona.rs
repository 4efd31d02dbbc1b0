use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::deserializers::confidence_score;

/// Closed set of personas an external classifier may assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaLabel {
    Builder,
    Scholar,
    Wordsmith,
    Strategist,
    Confidant,
    Explorer,
}

impl PersonaLabel {
    pub const ALL: [PersonaLabel; 6] = [
        PersonaLabel::Builder,
        PersonaLabel::Scholar,
        PersonaLabel::Wordsmith,
        PersonaLabel::Strategist,
        PersonaLabel::Confidant,
        PersonaLabel::Explorer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PersonaLabel::Builder => "The Builder",
            PersonaLabel::Scholar => "The Scholar",
            PersonaLabel::Wordsmith => "The Wordsmith",
            PersonaLabel::Strategist => "The Strategist",
            PersonaLabel::Confidant => "The Confidant",
            PersonaLabel::Explorer => "The Explorer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonaLabel::Builder => {
                "Writes and debugs code, designs systems, and asks for working implementations."
            }
            PersonaLabel::Scholar => {
                "Studies concepts, asks for explanations, and uses chats as a patient tutor."
            }
            PersonaLabel::Wordsmith => {
                "Drafts, edits, and polishes prose: essays, stories, posts, and messages."
            }
            PersonaLabel::Strategist => {
                "Plans projects, prepares reports and meetings, and weighs business decisions."
            }
            PersonaLabel::Confidant => {
                "Talks through personal life, health, relationships, and everyday decisions."
            }
            PersonaLabel::Explorer => {
                "Follows curiosity across unrelated topics without one dominant interest."
            }
        }
    }

    /// Match a free-form label, case-insensitive, with or without the leading "The "
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        let bare = normalized.strip_prefix("the ").unwrap_or(&normalized).trim();
        Self::ALL.into_iter().find(|label| {
            let own = label.name().to_lowercase();
            own.strip_prefix("the ").is_some_and(|own_bare| own_bare == bare)
        })
    }
}

/// Label and description as sent to the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDescription {
    pub label: String,
    pub description: String,
}

impl From<PersonaLabel> for LabelDescription {
    fn from(label: PersonaLabel) -> Self {
        Self { label: label.name().to_string(), description: label.description().to_string() }
    }
}

/// User and assistant text of one conversation, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaContent {
    pub title: String,
    pub user_messages: Vec<String>,
    pub agent_messages: Vec<String>,
}

/// Outbound payload for the persona classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub labels: Vec<LabelDescription>,
    pub conversations: Vec<PersonaContent>,
}

/// Validated classifier reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaVerdict {
    pub persona: String,
    /// Raw value as sent; see [`PersonaVerdict::confidence_score`]
    pub confidence: Value,
    pub reasoning: String,
    pub theme_summary: String,
    pub evidence: Vec<String>,
}

impl PersonaVerdict {
    /// The closed-set label the reply names, if it names one
    pub fn label(&self) -> Option<PersonaLabel> {
        PersonaLabel::from_name(&self.persona)
    }

    /// Confidence as a number, when the classifier sent one
    pub fn confidence_score(&self) -> Option<f64> {
        confidence_score(&self.confidence)
    }
}

use serde_json::Value;
use tracing::debug;

use crate::models::{Conversation, RawDocument};

const CONVERSATIONS_KEY: &str = "conversations";

/// Normalize a parsed export into an ordered sequence of conversations.
///
/// A bare list, or an object with a list-valued `conversations` key, keeps every element
/// that is itself an object (others are dropped silently). Any other shape yields an empty
/// sequence rather than an error.
pub fn extract_conversations(document: &RawDocument) -> Vec<Conversation> {
    match document {
        RawDocument::List(items) => keep_objects(items),
        RawDocument::Object(map) => match map.get(CONVERSATIONS_KEY) {
            Some(Value::Array(items)) => keep_objects(items),
            _ => {
                debug!("export object has no list-valued `conversations` key");
                Vec::new()
            }
        },
        RawDocument::Other(_) => {
            debug!("export top-level value is neither a list nor an object");
            Vec::new()
        }
    }
}

fn keep_objects(items: &[Value]) -> Vec<Conversation> {
    let conversations: Vec<Conversation> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|fields| Conversation::new(fields.clone()))
        .collect();

    let dropped = items.len() - conversations.len();
    if dropped > 0 {
        debug!(dropped, kept = conversations.len(), "dropped non-object conversation entries");
    }

    conversations
}

/// First `limit` titles in sequence order, `(untitled)` where missing.
///
/// The limit counts extracted conversations, so non-object entries dropped by
/// [`extract_conversations`] never use up a slot.
pub fn titles(conversations: &[Conversation], limit: usize) -> Vec<String> {
    conversations.iter().take(limit).map(|conv| conv.display_title().to_string()).collect()
}

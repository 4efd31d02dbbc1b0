use serde_json::Value;
use serde_json::map::Values;

use crate::models::{Conversation, Message};

/// Lazy walk over the messages wrapped by a conversation's mapping nodes.
///
/// The mapping is treated as a flat bag: node values are visited in mapping order and
/// parent/child links are never followed, so branch duplicates are all yielded. A missing
/// or non-object mapping yields nothing; nodes without an object `message` are skipped.
pub struct Messages<'a> {
    nodes: Option<Values<'a>>,
}

impl<'a> Messages<'a> {
    pub fn new(conversation: &'a Conversation) -> Self {
        Self { nodes: conversation.mapping().map(|mapping| mapping.values()) }
    }
}

impl<'a> Iterator for Messages<'a> {
    type Item = Message<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes.as_mut()?;
        nodes.find_map(|node| match node.get("message") {
            Some(Value::Object(message)) => Some(Message::new(message)),
            _ => None,
        })
    }
}

use serde_json::{Map, Value};

use crate::parsers::deserializers::coerce_timestamp;
use crate::parsers::messages::Messages;

pub const UNTITLED: &str = "(untitled)";

/// Top-level value of a parsed export, classified by shape
#[derive(Debug, Clone, PartialEq)]
pub enum RawDocument {
    List(Vec<Value>),
    Object(Map<String, Value>),
    Other(Value),
}

impl From<Value> for RawDocument {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => RawDocument::List(items),
            Value::Object(map) => RawDocument::Object(map),
            other => RawDocument::Other(other),
        }
    }
}

/// One chat session record. Every field is optional; accessors degrade to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    fields: Map<String, Value>,
}

impl Conversation {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Title when present as a string
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// Title for display, falling back to `(untitled)`
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or(UNTITLED)
    }

    pub fn create_time(&self) -> Option<f64> {
        self.fields.get("create_time").and_then(coerce_timestamp)
    }

    pub fn update_time(&self) -> Option<f64> {
        self.fields.get("update_time").and_then(coerce_timestamp)
    }

    /// The node mapping, only when it is a keyed collection
    pub fn mapping(&self) -> Option<&Map<String, Value>> {
        self.fields.get("mapping").and_then(Value::as_object)
    }

    /// Lazily walk every message wrapped by a node in the mapping
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Number of messages the walker yields
    pub fn turns(&self) -> usize {
        self.messages().count()
    }
}

/// Borrowed view over a `message` object inside a mapping node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Message<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Message<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn role(&self) -> Option<&'a str> {
        self.fields.get("author").and_then(|author| author.get("role")).and_then(Value::as_str)
    }

    pub fn role_kind(&self) -> Role {
        match self.role() {
            Some("user") => Role::User,
            Some("assistant") => Role::Assistant,
            _ => Role::Other,
        }
    }

    /// Message text: string parts of `content.parts` joined by a space, or `content`
    /// itself when it is a plain string. Anything else yields an empty string.
    pub fn text(&self) -> String {
        match self.fields.get("content") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Object(content)) => match content.get("parts") {
                Some(Value::Array(parts)) => {
                    parts.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(" ")
                }
                _ => String::new(),
            },
            _ => String::new(),
        }
    }

    pub fn create_time(&self) -> Option<f64> {
        self.fields.get("create_time").and_then(coerce_timestamp)
    }

    pub fn update_time(&self) -> Option<f64> {
        self.fields.get("update_time").and_then(coerce_timestamp)
    }

    /// `create_time`, or `update_time` when `create_time` does not coerce
    pub fn timestamp(&self) -> Option<f64> {
        self.create_time().or_else(|| self.update_time())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Other,
}

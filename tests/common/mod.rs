//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::{Cursor, Write};

use serde_json::{Map, Value, json};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 2025-01-01T00:00:00Z, a Wednesday
pub const JAN_1_2025: f64 = 1_735_689_600.0;
pub const DAY: f64 = 86_400.0;
pub const HOUR: f64 = 3_600.0;

/// Builder for a single conversation record
pub struct ConversationBuilder {
    fields: Map<String, Value>,
    mapping: Map<String, Value>,
    has_mapping: bool,
}

impl ConversationBuilder {
    /// Create a new conversation with no fields
    pub fn new() -> Self {
        Self { fields: Map::new(), mapping: Map::new(), has_mapping: false }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.fields.insert("title".to_string(), json!(title));
        self
    }

    /// Set create_time to any JSON value
    pub fn create_time(mut self, value: impl Into<Value>) -> Self {
        self.fields.insert("create_time".to_string(), value.into());
        self
    }

    /// Set update_time to any JSON value
    pub fn update_time(mut self, value: impl Into<Value>) -> Self {
        self.fields.insert("update_time".to_string(), value.into());
        self
    }

    /// Replace the mapping with an arbitrary JSON value
    pub fn raw_mapping(mut self, value: Value) -> Self {
        self.fields.insert("mapping".to_string(), value);
        self
    }

    /// Add a message node with the given role, text and timestamp
    pub fn message(self, role: &str, text: &str, create_time: Option<f64>) -> Self {
        let mut message = json!({
            "author": {"role": role},
            "content": {"content_type": "text", "parts": [text]},
        });
        if let Some(ts) = create_time {
            message["create_time"] = json!(ts);
        }
        self.node(json!({ "message": message }))
    }

    /// Add a user message without a timestamp
    pub fn user(self, text: &str) -> Self {
        self.message("user", text, None)
    }

    /// Add an assistant message without a timestamp
    pub fn assistant(self, text: &str) -> Self {
        self.message("assistant", text, None)
    }

    /// Add an arbitrary node value to the mapping
    pub fn node(mut self, node: Value) -> Self {
        let id = format!("node-{}", self.mapping.len());
        self.mapping.insert(id, node);
        self.has_mapping = true;
        self
    }

    /// Convert to a JSON value
    pub fn build(self) -> Value {
        let mut fields = self.fields;
        if self.has_mapping {
            fields.insert("mapping".to_string(), Value::Object(self.mapping));
        }
        Value::Object(fields)
    }
}

impl Default for ConversationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a whole export document
pub struct ExportBuilder {
    conversations: Vec<Value>,
    wrapped: bool,
}

impl ExportBuilder {
    /// Create an export serialized as a bare list
    pub fn new() -> Self {
        Self { conversations: Vec::new(), wrapped: false }
    }

    /// Serialize as `{"conversations": [...]}` instead of a bare list
    pub fn wrapped(mut self) -> Self {
        self.wrapped = true;
        self
    }

    /// Add a conversation
    pub fn with(mut self, conversation: ConversationBuilder) -> Self {
        self.conversations.push(conversation.build());
        self
    }

    /// Add a raw (possibly non-object) entry
    pub fn with_raw(mut self, value: Value) -> Self {
        self.conversations.push(value);
        self
    }

    /// Convert to JSON bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let document = if self.wrapped {
            json!({ "conversations": self.conversations })
        } else {
            Value::Array(self.conversations.clone())
        };
        serde_json::to_vec(&document).expect("Failed to serialize export")
    }

    /// Write the export to a temp file
    pub fn to_file(&self) -> NamedTempFile {
        write_temp_file(&self.to_bytes())
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an in-memory ZIP archive from (name, contents) pairs, in the given order
pub fn zip_export(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in members {
        writer.start_file(*name, options).expect("Failed to start zip member");
        writer.write_all(contents).expect("Failed to write zip member");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

/// Write bytes to a temp file
pub fn write_temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A small but realistic 2025 export
///
/// - Jan 1 09:00 "Debug Python function" (4 turns, 1 polite of 2 user)
/// - Jan 2 09:30 "Explain ownership" (message-derived times only)
/// - Jan 3 22:00 "Write a blog post" (Friday)
/// - Jan 4 10:00 "Weekend plans" (Saturday, polite)
/// - Jan 10 09:15 "SQL report for work"
/// - one conversation with no resolvable time
pub fn realistic_export() -> ExportBuilder {
    ExportBuilder::new()
        .with(
            ConversationBuilder::new()
                .title("Debug Python function")
                .create_time(JAN_1_2025 + 9.0 * HOUR)
                .update_time(JAN_1_2025 + 10.0 * HOUR)
                .user("my function throws, please help")
                .assistant("Share the traceback.")
                .user("here it is")
                .assistant("Fixed."),
        )
        .with(
            ConversationBuilder::new()
                .title("Explain ownership")
                .message("user", "explain ownership", Some(JAN_1_2025 + DAY + 9.5 * HOUR))
                .message("assistant", "Ownership means...", Some(JAN_1_2025 + DAY + 11.0 * HOUR)),
        )
        .with(
            ConversationBuilder::new()
                .title("Write a blog post")
                .create_time(JAN_1_2025 + 2.0 * DAY + 22.0 * HOUR)
                .user("draft an intro"),
        )
        .with(
            ConversationBuilder::new()
                .title("Weekend plans")
                .create_time(JAN_1_2025 + 3.0 * DAY + 10.0 * HOUR)
                .user("thanks for the ideas"),
        )
        .with(
            ConversationBuilder::new()
                .title("SQL report for work")
                .create_time(JAN_1_2025 + 9.0 * DAY + 9.25 * HOUR),
        )
        .with(ConversationBuilder::new().title("Lost in time").user("hello?"))
}

//! Parsers that turn a chat export into conversations with resolved time spans
//!
//! # Error Handling Strategy
//!
//! Only the load step can fail:
//!
//! - **Document loading**: Bytes that are neither UTF-8 JSON nor a ZIP archive holding a
//!   qualifying `.json` member produce a [`FormatError`]. Nothing is analysed in that case.
//!
//! - **Everything after loading**: Malformed shapes degrade instead of failing. Non-object
//!   conversation entries are dropped, non-object mappings yield no messages, and time
//!   fields that do not coerce to a finite float are treated as absent. A document where
//!   every record is malformed still produces a (mostly empty) result.

pub mod deserializers;
pub mod extractor;
pub mod loader;
pub mod messages;
pub mod spans;

pub use deserializers::coerce_timestamp;
pub use extractor::{extract_conversations, titles};
pub use loader::{FormatError, load_document};
pub use messages::Messages;
pub use spans::{resolve_span, resolve_spans};

//! Chat Wrapped - Yearly statistics from a chat history export
//!
//! This library turns a conversation export (a JSON document, or a ZIP archive holding
//! one) into descriptive statistics about chatting behavior. It supports:
//!
//! - Loading exports from raw bytes, falling back to the first `.json` member of a ZIP
//! - Normalizing bare lists or `{"conversations": [...]}` wrappers into conversations
//! - Walking each conversation's node mapping as a flat bag of messages
//! - Resolving per-conversation time spans from explicit fields or message timestamps
//! - Computing volume, cadence, gaps, streaks, turn counts, politeness and hour/weekday
//!   distributions for one UTC calendar year
//! - Building a bounded payload for an external persona classifier and validating its reply
//!
//! # Example
//!
//! ```no_run
//! use chat_wrapped::{AnalysisOptions, analyze};
//!
//! let bytes = std::fs::read("conversations.zip")?;
//! let analysis = analyze(&bytes, &AnalysisOptions::default())?;
//! println!("{} chats this year", analysis.snapshot.total_conversations);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod persona;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use models::{Conversation, MetricsSnapshot, RawDocument, ResolvedSpan};
pub use parsers::{FormatError, extract_conversations, load_document, resolve_span};
pub use persona::{ClassificationError, PersonaClassifier, classify_persona};
pub use pipeline::{Analysis, AnalysisOptions, analyze};
pub use stats::build_snapshot;

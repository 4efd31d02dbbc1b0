//! One-shot analysis of an export, from raw bytes to a metrics snapshot.
//!
//! # Error Handling Strategy
//!
//! - **Load failures**: bytes that are neither JSON nor a ZIP holding a JSON member fail
//!   with [`FormatError`] before anything is computed.
//! - **Shape failures**: never raised. The extractor, walker and resolver absorb malformed
//!   fields locally, so a loadable document always yields a snapshot.
//! - **Classifier failures**: kept out of this pass entirely. [`Analysis::persona_request`]
//!   is handed to a [`PersonaClassifier`](crate::persona::PersonaClassifier) by the caller,
//!   whose errors never touch the snapshot.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::filters::{YearSelection, filter_by_year};
use crate::models::{ClassificationRequest, Conversation, MetricsSnapshot};
use crate::parsers::{FormatError, extract_conversations, load_document};
use crate::persona::{MAX_PERSONA_CONVERSATIONS, build_request};
use crate::stats::build_snapshot;

/// Knobs for one analysis pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub year: YearSelection,
    /// Conversations included in the persona payload
    pub persona_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { year: YearSelection::Current, persona_limit: MAX_PERSONA_CONVERSATIONS }
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Year the snapshot covers, `None` when every year was kept
    pub year: Option<i32>,
    /// Conversations in the export before year filtering
    pub total_in_export: usize,
    pub snapshot: MetricsSnapshot,
    #[serde(skip)]
    pub conversations: Vec<Conversation>,
    #[serde(skip)]
    pub persona_request: ClassificationRequest,
}

/// Load, extract, filter and compute in one pass
///
/// # Errors
///
/// Returns [`FormatError`] when the bytes cannot be loaded as an export. Every later stage
/// degrades instead of failing.
///
/// # Examples
///
/// ```
/// use chat_wrapped::filters::YearSelection;
/// use chat_wrapped::{AnalysisOptions, analyze};
///
/// let export = br#"[{"title": "Hello", "create_time": 1735689600}]"#;
/// let options = AnalysisOptions { year: YearSelection::Year(2025), ..Default::default() };
/// let analysis = analyze(export, &options)?;
/// assert_eq!(analysis.snapshot.total_conversations, 1);
/// # Ok::<(), chat_wrapped::parsers::FormatError>(())
/// ```
pub fn analyze(bytes: &[u8], options: &AnalysisOptions) -> Result<Analysis, FormatError> {
    let document = load_document(bytes)?;
    let conversations = extract_conversations(&document);
    Ok(analyze_conversations(conversations, options))
}

/// The post-load half of [`analyze`]
pub fn analyze_conversations(
    conversations: Vec<Conversation>,
    options: &AnalysisOptions,
) -> Analysis {
    let total_in_export = conversations.len();
    let year = options.year.resolve();

    let conversations = match year {
        Some(year) => filter_by_year(conversations, year),
        None => conversations,
    };

    let snapshot = build_snapshot(&conversations);
    let persona_request = build_request(&conversations, options.persona_limit);

    info!(
        total_in_export,
        analysed = snapshot.total_conversations,
        year = ?year,
        "analysis complete"
    );

    Analysis { year, total_in_export, snapshot, conversations, persona_request }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &[u8] = br#"{"conversations": [
        {"title": "2024 chat", "create_time": 1704067200, "update_time": 1704070800},
        {"title": "Debug code", "create_time": 1735689600, "update_time": 1735693200},
        "junk",
        {"title": "Essay draft", "create_time": 1735776000}
    ]}"#;

    fn options(year: YearSelection) -> AnalysisOptions {
        AnalysisOptions { year, ..AnalysisOptions::default() }
    }

    #[test]
    fn test_analyze_filters_to_year() {
        let analysis = analyze(EXPORT, &options(YearSelection::Year(2025))).unwrap();
        assert_eq!(analysis.year, Some(2025));
        assert_eq!(analysis.total_in_export, 3);
        assert_eq!(analysis.snapshot.total_conversations, 2);
        assert_eq!(analysis.persona_request.conversations.len(), 2);
        assert_eq!(analysis.conversations[0].title(), Some("Debug code"));
    }

    #[test]
    fn test_analyze_all_years() {
        let analysis = analyze(EXPORT, &options(YearSelection::AllYears)).unwrap();
        assert_eq!(analysis.year, None);
        assert_eq!(analysis.snapshot.total_conversations, 3);
        assert_eq!(analysis.snapshot.earliest, Some(1_704_067_200.0));
    }

    #[test]
    fn test_analyze_persona_limit() {
        let opts = AnalysisOptions { year: YearSelection::AllYears, persona_limit: 1 };
        let analysis = analyze(EXPORT, &opts).unwrap();
        assert_eq!(analysis.persona_request.conversations.len(), 1);
        assert_eq!(analysis.persona_request.conversations[0].title, "2024 chat");
    }

    #[test]
    fn test_analyze_rejects_unloadable_bytes() {
        assert!(analyze(b"<html>", &AnalysisOptions::default()).is_err());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let opts = options(YearSelection::Year(2025));
        let first = analyze(EXPORT, &opts).unwrap();
        let second = analyze(EXPORT, &opts).unwrap();
        assert_eq!(first, second);
    }
}

use thiserror::Error;
use tracing::warn;

use crate::models::{ClassificationRequest, PersonaVerdict};

/// Persona classification failed. Reported to the caller, never fatal to the metrics.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("persona classifier unavailable: {0}")]
    Unavailable(String),
    #[error("classifier reply contains no JSON object")]
    MissingObject,
    #[error("classifier reply is not a valid persona object: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// External capability that turns a persona payload into a raw text reply.
///
/// Implementations own transport, credentials and prompting. A single call is made per
/// classification and it is never retried.
pub trait PersonaClassifier {
    fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassificationError>;
}

impl<F> PersonaClassifier for F
where
    F: Fn(&ClassificationRequest) -> Result<String, ClassificationError>,
{
    fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassificationError> {
        self(request)
    }
}

/// Call the classifier once and validate its reply
pub fn classify_persona(
    classifier: &dyn PersonaClassifier,
    request: &ClassificationRequest,
) -> Result<PersonaVerdict, ClassificationError> {
    let reply = classifier.classify(request).inspect_err(|e| {
        warn!(error = %e, "persona classifier call failed");
    })?;
    parse_classifier_reply(&reply).inspect_err(|e| {
        warn!(error = %e, "persona classifier reply rejected");
    })
}

/// Parse the outermost `{...}` span of a reply into a [`PersonaVerdict`].
///
/// Surrounding prose or code fences are tolerated; all five fields are required and
/// `evidence` must be a list of strings.
pub fn parse_classifier_reply(reply: &str) -> Result<PersonaVerdict, ClassificationError> {
    let object = json_object_span(reply).ok_or(ClassificationError::MissingObject)?;
    Ok(serde_json::from_str(object)?)
}

fn json_object_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabelDescription, PersonaLabel};

    const VALID_REPLY: &str = r#"{
        "persona": "The Builder",
        "confidence": 0.9,
        "reasoning": "Most chats are about code.",
        "theme_summary": "Rust services and SQL tuning",
        "evidence": ["Debug my tokio runtime", "Optimize this query"]
    }"#;

    fn request() -> ClassificationRequest {
        ClassificationRequest {
            labels: PersonaLabel::ALL.into_iter().map(LabelDescription::from).collect(),
            conversations: Vec::new(),
        }
    }

    #[test]
    fn test_parse_plain_object() {
        let verdict = parse_classifier_reply(VALID_REPLY).unwrap();
        assert_eq!(verdict.persona, "The Builder");
        assert_eq!(verdict.label(), Some(PersonaLabel::Builder));
        assert_eq!(verdict.evidence.len(), 2);
    }

    #[test]
    fn test_parse_object_wrapped_in_prose_and_fences() {
        let reply = format!("Sure! Here is the result:\n```json\n{}\n```\nHope it helps.", VALID_REPLY);
        let verdict = parse_classifier_reply(&reply).unwrap();
        assert_eq!(verdict.theme_summary, "Rust services and SQL tuning");
    }

    #[test]
    fn test_parse_missing_braces() {
        let err = parse_classifier_reply("I cannot classify this user.").unwrap_err();
        assert!(matches!(err, ClassificationError::MissingObject));

        let err = parse_classifier_reply("} backwards {").unwrap_err();
        assert!(matches!(err, ClassificationError::MissingObject));
    }

    #[test]
    fn test_parse_missing_field() {
        let reply = r#"{"persona": "The Builder", "confidence": 0.5, "reasoning": "r", "evidence": []}"#;
        let err = parse_classifier_reply(reply).unwrap_err();
        assert!(matches!(err, ClassificationError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_accepts_non_numeric_confidence() {
        let reply = r#"{"persona": "The Scholar", "confidence": "high", "reasoning": "r", "theme_summary": "t", "evidence": ["why?"]}"#;
        let verdict = parse_classifier_reply(reply).unwrap();
        assert_eq!(verdict.label(), Some(PersonaLabel::Scholar));
        assert_eq!(verdict.confidence_score(), None);
    }

    #[test]
    fn test_parse_evidence_must_be_strings() {
        let reply = r#"{"persona": "x", "confidence": 1, "reasoning": "r", "theme_summary": "t", "evidence": [1, 2]}"#;
        assert!(matches!(
            parse_classifier_reply(reply).unwrap_err(),
            ClassificationError::InvalidJson(_)
        ));
    }

    #[test]
    fn test_classify_persona_with_closure() {
        let classifier = |req: &ClassificationRequest| -> Result<String, ClassificationError> {
            assert_eq!(req.labels.len(), 6);
            Ok(VALID_REPLY.to_string())
        };
        let verdict = classify_persona(&classifier, &request()).unwrap();
        assert_eq!(verdict.confidence_score(), Some(0.9));
    }

    #[test]
    fn test_classify_persona_surfaces_unavailable() {
        let classifier = |_: &ClassificationRequest| -> Result<String, ClassificationError> {
            Err(ClassificationError::Unavailable("missing API key".to_string()))
        };
        let err = classify_persona(&classifier, &request()).unwrap_err();
        assert!(err.to_string().contains("missing API key"));
    }

    #[test]
    fn test_classify_persona_rejects_garbage_reply() {
        let classifier =
            |_: &ClassificationRequest| -> Result<String, ClassificationError> {
                Ok("{not json}".to_string())
            };
        let err = classify_persona(&classifier, &request()).unwrap_err();
        assert!(matches!(err, ClassificationError::InvalidJson(_)));
    }
}

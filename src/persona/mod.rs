//! Persona classification boundary
//!
//! The core builds a bounded payload (six fixed labels plus user/assistant text of the
//! first conversations) and validates whatever the external classifier replies. Transport
//! and prompting live behind [`PersonaClassifier`], so nothing here touches the network.

pub mod classifier;
pub mod payload;

pub use classifier::{
    ClassificationError, PersonaClassifier, classify_persona, parse_classifier_reply,
};
pub use payload::{MAX_PERSONA_CONVERSATIONS, build_request, extract_content};

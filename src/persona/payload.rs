use crate::models::{
    ClassificationRequest, Conversation, LabelDescription, PersonaContent, PersonaLabel, Role,
};

/// Upper bound on conversations sent to the classifier
pub const MAX_PERSONA_CONVERSATIONS: usize = 20;

/// Split a conversation's messages into user and assistant text, in encounter order.
/// Other roles and blank texts are skipped.
pub fn extract_content(conversation: &Conversation) -> PersonaContent {
    let mut content = PersonaContent {
        title: conversation.display_title().to_string(),
        ..PersonaContent::default()
    };

    for message in conversation.messages() {
        let bucket = match message.role_kind() {
            Role::User => &mut content.user_messages,
            Role::Assistant => &mut content.agent_messages,
            Role::Other => continue,
        };
        let text = message.text();
        if !text.trim().is_empty() {
            bucket.push(text);
        }
    }

    content
}

/// Classifier payload over the first `limit` conversations (capped at
/// [`MAX_PERSONA_CONVERSATIONS`]), in sequence order
pub fn build_request(conversations: &[Conversation], limit: usize) -> ClassificationRequest {
    ClassificationRequest {
        labels: PersonaLabel::ALL.into_iter().map(LabelDescription::from).collect(),
        conversations: conversations
            .iter()
            .take(limit.min(MAX_PERSONA_CONVERSATIONS))
            .map(extract_content)
            .collect(),
    }
}

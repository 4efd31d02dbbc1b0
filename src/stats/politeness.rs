use crate::models::{Conversation, Politeness, Role};

const POLITE_MARKERS: &[&str] = &["please", "thank you", "thanks"];

/// Whether a message text contains a politeness marker (case-insensitive)
pub fn is_polite(text: &str) -> bool {
    let lower = text.to_lowercase();
    POLITE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Politeness over every user-authored message.
///
/// Score is `round(1 + 4 * polite / total)` with ties rounded to even, so it stays in
/// 1..=5. No user messages means no score.
pub fn politeness(conversations: &[Conversation]) -> Politeness {
    let mut polite_messages = 0;
    let mut user_messages = 0;

    for message in conversations.iter().flat_map(|conversation| conversation.messages()) {
        if message.role_kind() != Role::User {
            continue;
        }
        user_messages += 1;
        if is_polite(&message.text()) {
            polite_messages += 1;
        }
    }

    let score = (user_messages > 0).then(|| {
        let ratio = polite_messages as f64 / user_messages as f64;
        (1.0 + 4.0 * ratio).round_ties_even() as u8
    });

    Politeness { polite_messages, user_messages, score }
}

use crate::models::{Conversation, ThemeCount, UNTITLED};

const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "coding",
        &[
            "code",
            "programming",
            "python",
            "javascript",
            "function",
            "debug",
            "api",
            "database",
            "sql",
            "html",
            "css",
            "react",
            "node",
            "git",
            "github",
        ],
    ),
    (
        "learning",
        &[
            "learn",
            "study",
            "tutorial",
            "course",
            "education",
            "explain",
            "understand",
            "concept",
            "theory",
        ],
    ),
    (
        "writing",
        &["write", "essay", "article", "blog", "content", "story", "poem", "creative", "draft", "edit"],
    ),
    (
        "work",
        &[
            "work",
            "job",
            "career",
            "project",
            "meeting",
            "presentation",
            "report",
            "business",
            "professional",
        ],
    ),
    (
        "personal",
        &[
            "personal",
            "life",
            "relationship",
            "family",
            "friend",
            "health",
            "fitness",
            "travel",
            "hobby",
        ],
    ),
];

/// How many themes the summary line names
const SUMMARY_TOP_THEMES: usize = 3;

/// Count titles per keyword theme, highest first. Untitled conversations are skipped.
pub fn title_themes(conversations: &[Conversation]) -> Vec<ThemeCount> {
    let titles: Vec<String> = conversations
        .iter()
        .filter_map(Conversation::title)
        .filter(|title| *title != UNTITLED)
        .map(str::to_lowercase)
        .collect();

    let mut themes: Vec<ThemeCount> = THEME_KEYWORDS
        .iter()
        .map(|(theme, keywords)| {
            let count = titles
                .iter()
                .filter(|title| keywords.iter().any(|keyword| title.contains(keyword)))
                .count();
            ThemeCount { theme: theme.to_string(), count }
        })
        .filter(|theme| theme.count > 0)
        .collect();

    // Stable sort keeps declaration order on ties
    themes.sort_by(|a, b| b.count.cmp(&a.count));
    themes
}

/// One-line summary such as `Top themes: coding (4), work (2)`
pub fn theme_summary(themes: &[ThemeCount]) -> String {
    if themes.is_empty() {
        return "No clear themes detected".to_string();
    }
    let top: Vec<String> = themes
        .iter()
        .take(SUMMARY_TOP_THEMES)
        .map(|theme| format!("{} ({})", theme.theme, theme.count))
        .collect();
    format!("Top themes: {}", top.join(", "))
}

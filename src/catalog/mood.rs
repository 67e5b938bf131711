/// Keyword table for free-text mood detection. Checked in order, the
/// first mood with a matching keyword wins.
const MOOD_KEYWORDS: &[(&str, &[&str])] = &[
    ("happy", &["happy", "joy", "excited", "funny", "laugh"]),
    ("sad", &["sad", "upset", "down", "emotional"]),
    ("motivated", &["motivate", "inspire", "goal", "hustle"]),
    ("relaxed", &["calm", "relaxed", "chill", "peace"]),
    ("angry", &["angry", "mad", "frustrated", "annoyed"]),
];

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "hii",
    "what’s up",
    "whats up",
    "yo",
    "good morning",
    "good evening",
];

const SEARCH_QUERIES: &[(&str, &str)] = &[
    ("happy", "funny trending comedy shorts"),
    ("sad", "emotional sad breakup shorts"),
    ("motivated", "motivational speech hustle shorts"),
    ("relaxed", "chill lofi music relaxing shorts"),
    ("angry", "funny rage fails shorts"),
];

/// Map free text to one of the known moods by substring keyword match.
pub fn detect_mood(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(mood, _)| *mood)
}

/// Substring match, so "this" counts as a greeting just like "hi".
pub fn is_greeting(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    GREETINGS.iter().any(|g| text.contains(g))
}

/// Search phrase used for the live lookup of a mood.
pub fn search_query(mood: &str) -> String {
    let mood_lc = mood.to_lowercase();
    SEARCH_QUERIES
        .iter()
        .find(|(m, _)| *m == mood_lc)
        .map(|(_, q)| q.to_string())
        .unwrap_or_else(|| format!("{} shorts", mood))
}

/// Normalize a requested mood: a detected mood if the text names one,
/// otherwise the trimmed, lowercased text itself.
pub fn resolve_mood(text: &str) -> String {
    detect_mood(text)
        .map(str::to_string)
        .unwrap_or_else(|| text.trim().to_lowercase())
}

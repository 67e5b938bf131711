use super::result::ReelResult;

pub const LOADING: &str = "Loading...";
pub const NO_REELS: &str =
    "<p>😕 Oops! I don't have reels for that mood yet. Try romantic, cozy, funny, or adventure!</p>";
pub const FAILURE: &str = "<p>❌ Something went wrong. Please try again later.</p>";

/// Render the markup for a finished lookup. Always a full replacement
/// of the output area, never an incremental update.
pub fn render(mood: &str, result: &ReelResult) -> String {
    match result {
        ReelResult::Reels(urls) => {
            let mut html = acknowledgment(mood);
            for url in urls {
                html.push_str(&reel_link(url));
            }
            html
        }
        ReelResult::Empty => NO_REELS.to_string(),
        ReelResult::Failure(_) => FAILURE.to_string(),
    }
}

pub fn acknowledgment(mood: &str) -> String {
    format!(
        "<p>Hey! You're in the mood for something <strong>{}</strong>? Great choice! Here are some reels for you 🎬</p>",
        escape_html(&capitalize_first(mood))
    )
}

pub fn reel_link(url: &str) -> String {
    let url = escape_html(url);
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        url, url
    )
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

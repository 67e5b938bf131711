use serde_json::Value;

/// Outcome of a single reel lookup against the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelResult {
    /// The endpoint answered with a JSON array. May be empty.
    Reels(Vec<String>),
    /// The endpoint answered with any other JSON value.
    Empty,
    /// Transport, body or decode failure.
    Failure(String),
}

impl ReelResult {
    /// Classify a response body. Only the shape of the JSON matters,
    /// an array nested inside an object still counts as `Empty`.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Array(items)) => ReelResult::Reels(items.into_iter().map(item_url).collect()),
            Ok(_) => ReelResult::Empty,
            Err(e) => ReelResult::Failure(format!("invalid JSON body: {}", e)),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ReelResult::Failure(_))
    }
}

// Non-string elements keep their JSON text.
fn item_url(item: Value) -> String {
    match item {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_body() {
        let result = ReelResult::from_body(br#"["https://a.test/1","https://a.test/2"]"#);
        assert_eq!(
            result,
            ReelResult::Reels(vec![
                "https://a.test/1".to_string(),
                "https://a.test/2".to_string()
            ])
        );
    }

    #[test]
    fn test_empty_array_is_not_empty_result() {
        assert_eq!(ReelResult::from_body(b"[]"), ReelResult::Reels(vec![]));
    }

    #[test]
    fn test_non_array_bodies() {
        assert_eq!(ReelResult::from_body(br#"{"reels":["x"]}"#), ReelResult::Empty);
        assert_eq!(ReelResult::from_body(br#""cozy""#), ReelResult::Empty);
        assert_eq!(ReelResult::from_body(b"42"), ReelResult::Empty);
        assert_eq!(ReelResult::from_body(b"null"), ReelResult::Empty);
    }

    #[test]
    fn test_invalid_json() {
        assert!(ReelResult::from_body(b"<html>oops</html>").is_failure());
        assert!(ReelResult::from_body(b"").is_failure());
    }

    #[test]
    fn test_non_string_items() {
        let result = ReelResult::from_body(br#"["https://a.test/1", 7]"#);
        assert_eq!(
            result,
            ReelResult::Reels(vec!["https://a.test/1".to_string(), "7".to_string()])
        );
    }
}

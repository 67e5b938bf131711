use serde::{Deserialize, Serialize};

/// Body of every non-list `/api/reels` answer. Always an object, so
/// clients treat it as "no reels" rather than as a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    pub mood: Option<String>,
    pub greeting: bool,
}

use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::collections::HashMap;

use super::types::*;
use crate::catalog::{detect_mood, is_greeting};
use crate::reels::render;
use crate::server::AppState;

/// Names the catalog source that answered a `/api/reels` request,
/// `youtube` for live results or `fallback` for the static file.
pub const REEL_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-reel-source");

pub async fn get_reels(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(requested) = params.get("mood") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "missing mood parameter".to_string(),
                mood: None,
            }),
        )
            .into_response();
    };

    let lookup = state.catalog.lookup(requested).await;
    let source = match lookup.source {
        Some(source) if !lookup.reels.is_empty() => source,
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "no reels for this mood".to_string(),
                    mood: Some(lookup.mood),
                }),
            )
                .into_response();
        }
    };

    let urls: Vec<String> = lookup.reels.into_iter().map(|r| r.video_url).collect();
    (
        [(REEL_SOURCE_HEADER, HeaderValue::from_static(source))],
        Json(urls),
    )
        .into_response()
}

pub async fn get_mood(Query(params): Query<HashMap<String, String>>) -> Json<MoodInfo> {
    let text = params.get("text").map(String::as_str).unwrap_or("");
    Json(MoodInfo {
        mood: detect_mood(text).map(str::to_string),
        greeting: is_greeting(text),
    })
}

/// Server-rendered result fragment for `mood`, fetched from the
/// configured endpoint.
pub async fn reels_fragment(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let mood = params.get("mood").map(String::as_str).unwrap_or("");
    let result = state.fetcher.fetch(mood).await;
    Html(render(mood, &result))
}

use crate::models::{AnagramsResponse, ResultResponse, WordsRequest};
use crate::params::{parse_flag, parse_limit, parse_size};
use crate::state::AppState;
use crate::WebError;
use anagram_core::LookupOptions;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

// Fixed paths also answer the per-word methods for the word they spell.
const MOST: &str = "most";
const CHECK: &str = "check";

pub fn anagram_routes() -> Router<AppState> {
    Router::new()
        .route("/anagrams", get(list_anagrams))
        .route(
            "/anagrams/most",
            get(most_anagrams).delete(|State(state): State<AppState>| async move {
                remove_group(&state, MOST)
            }),
        )
        .route(
            "/anagrams/check",
            post(check_anagrams)
                .get(
                    |State(state): State<AppState>, Query(query): Query<LookupQuery>| async move {
                        lookup(&state, CHECK, query)
                    },
                )
                .delete(|State(state): State<AppState>| async move {
                    remove_group(&state, CHECK)
                }),
        )
        .route(
            "/anagrams/{word}",
            get(anagrams_by_word).delete(delete_anagrams_by_word),
        )
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    size: Option<String>,
}

async fn list_anagrams(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AnagramsResponse>>, WebError> {
    let min_size = parse_size(query.size.as_deref())?;
    let groups = state
        .service
        .list_groups(min_size)
        .into_iter()
        .map(AnagramsResponse::from)
        .collect();
    Ok(Json(groups))
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    limit: Option<String>,
    #[serde(rename = "self")]
    exclude_self: Option<String>,
}

async fn anagrams_by_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<AnagramsResponse>, WebError> {
    lookup(&state, &word, query)
}

fn lookup(
    state: &AppState,
    word: &str,
    query: LookupQuery,
) -> Result<Json<AnagramsResponse>, WebError> {
    let options = LookupOptions {
        limit: parse_limit(query.limit.as_deref())?,
        exclude_self: parse_flag(query.exclude_self.as_deref()),
    };
    let anagrams = state
        .service
        .lookup_by_word(word, options)
        .unwrap_or_default();
    Ok(Json(anagrams.into()))
}

async fn delete_anagrams_by_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<StatusCode, WebError> {
    remove_group(&state, &word)
}

fn remove_group(state: &AppState, word: &str) -> Result<StatusCode, WebError> {
    if state.service.delete_group_by_word(word) {
        tracing::info!(word = %word, "Anagram group deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::NotFound(format!("No anagrams of '{word}'")))
    }
}

async fn most_anagrams(State(state): State<AppState>) -> Json<AnagramsResponse> {
    Json(
        state
            .service
            .largest_group()
            .map(AnagramsResponse::from)
            .unwrap_or_default(),
    )
}

async fn check_anagrams(
    State(state): State<AppState>,
    Json(req): Json<WordsRequest>,
) -> Json<ResultResponse> {
    Json(state.service.membership_check(&req.words).into())
}

use crate::models::{ResultResponse, WordsRequest};
use crate::state::AppState;
use crate::WebError;
use anagram_core::Summary;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, MethodRouter},
    Json, Router,
};

pub fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/words", delete(delete_words).post(add_words))
        .route("/words/count", or_delete_word(get(count), "count"))
        .route("/words/max", or_delete_word(get(max_length), "max"))
        .route("/words/min", or_delete_word(get(min_length), "min"))
        .route("/words/avg", or_delete_word(get(avg_length), "avg"))
        .route("/words/median", or_delete_word(get(median_length), "median"))
        .route("/words/stats", or_delete_word(get(summary), "stats"))
        .route("/words/{word}", delete(delete_word))
}

/// `DELETE` on a fixed statistics path removes the word spelled like it
fn or_delete_word(route: MethodRouter<AppState>, word: &'static str) -> MethodRouter<AppState> {
    route.delete(move |State(state): State<AppState>| async move { remove_word(&state, word) })
}

async fn add_words(State(state): State<AppState>, Json(req): Json<WordsRequest>) -> StatusCode {
    let submitted = req.words.len();
    let added = state.service.add_words(req.words.into_iter().flatten());
    tracing::info!(submitted, added, "Words added");
    StatusCode::CREATED
}

async fn delete_words(State(state): State<AppState>) -> StatusCode {
    state.service.delete_all_words();
    tracing::info!("All words deleted");
    StatusCode::NO_CONTENT
}

async fn delete_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<StatusCode, WebError> {
    remove_word(&state, &word)
}

fn remove_word(state: &AppState, word: &str) -> Result<StatusCode, WebError> {
    if state.service.delete_word(word) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::NotFound(format!("Word '{word}' not in dictionary")))
    }
}

async fn count(State(state): State<AppState>) -> Json<ResultResponse> {
    Json(state.service.count().into())
}

async fn max_length(State(state): State<AppState>) -> Json<ResultResponse> {
    Json(state.service.max_key_length().into())
}

async fn min_length(State(state): State<AppState>) -> Json<ResultResponse> {
    Json(state.service.min_key_length().into())
}

async fn avg_length(State(state): State<AppState>) -> Json<ResultResponse> {
    Json(state.service.average_key_length().into())
}

async fn median_length(State(state): State<AppState>) -> Json<ResultResponse> {
    Json(state.service.median_key_length().into())
}

async fn summary(State(state): State<AppState>) -> Json<Summary> {
    Json(state.service.summary())
}

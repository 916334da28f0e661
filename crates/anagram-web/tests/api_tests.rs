//! HTTP contract tests against the router, without binding a socket

use anagram_core::AnagramStore;
use anagram_web::{router, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const WORD: &str = "abcde";

fn seeded_app() -> (Router, Arc<AnagramStore>) {
    let store = Arc::new(AnagramStore::with_words([
        "abcde", "edcba", "bcdea", "read", "dare", "solo",
    ]));
    (router(AppState::new(store.clone())), store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn sorted(value: &Value) -> Vec<String> {
    let mut words: Vec<String> = value["anagrams"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap().to_string())
        .collect();
    words.sort();
    words
}

#[tokio::test]
async fn test_health() {
    let (app, _) = seeded_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_anagrams() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/anagrams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_anagrams_with_size() {
    let (app, _) = seeded_app();

    let (_, body) = get(&app, "/anagrams?size=3").await;
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["anagrams"].as_array().unwrap().len(), 3);

    // 1 still means "has anagrams"
    let (_, body) = get(&app, "/anagrams?size=1").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_anagrams_invalid_size() {
    let (app, _) = seeded_app();
    let (status, _) = get(&app, "/anagrams?size=big").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anagrams_by_word() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, &format!("/anagrams/{WORD}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted(&body), vec!["abcde", "bcdea", "edcba"]);

    let (_, body) = get(&app, &format!("/anagrams/{WORD}?limit=1")).await;
    assert_eq!(sorted(&body).len(), 1);

    let (_, body) = get(&app, &format!("/anagrams/{WORD}?self=true")).await;
    assert_eq!(sorted(&body), vec!["bcdea", "edcba"]);

    let (_, body) = get(&app, &format!("/anagrams/{WORD}?self=YES&limit=1")).await;
    let words = sorted(&body);
    assert_eq!(words.len(), 1);
    assert_ne!(words[0], WORD);
}

#[tokio::test]
async fn test_anagrams_by_word_without_anagrams_is_empty() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/anagrams/solo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "anagrams": [] }));
}

#[tokio::test]
async fn test_anagrams_by_word_invalid_limit() {
    let (app, _) = seeded_app();

    let (status, _) = get(&app, &format!("/anagrams/{WORD}?limit=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(&app, &format!("/anagrams/{WORD}?limit=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_words() {
    let (app, store) = seeded_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/words",
        Some(json!({ "words": ["dear", "lives", null, "elvis"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);

    assert!(store.contains("dear"));
    assert_eq!(store.lookup_group("elvis").map(|g| g.len()), Some(2));
}

#[tokio::test]
async fn test_delete_word() {
    let (app, store) = seeded_app();

    let (status, _) = send(&app, Method::DELETE, &format!("/words/{WORD}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!store.contains(WORD));

    let (status, _) = send(&app, Method::DELETE, &format!("/words/{WORD}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_words() {
    let (app, _) = seeded_app();

    let (status, _) = send(&app, Method::DELETE, "/words", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(&app, "/words/count").await;
    assert_eq!(body, json!({ "result": 0 }));
    let (_, body) = get(&app, "/anagrams").await;
    assert_eq!(body, json!([]));
    let (_, body) = get(&app, "/anagrams/most").await;
    assert_eq!(body, json!({ "anagrams": [] }));
}

#[tokio::test]
async fn test_delete_anagrams_by_word() {
    let (app, store) = seeded_app();

    let (status, _) = send(&app, Method::DELETE, "/anagrams/solo", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/anagrams/{WORD}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(store.lookup_group(WORD), None);
    assert!(store.contains("read"));
}

#[tokio::test]
async fn test_statistics() {
    let (app, _) = seeded_app();

    for (path, expected) in [
        ("/words/count", 6),
        ("/words/max", 5),
        ("/words/min", 4),
        ("/words/avg", 4),
        ("/words/median", 4),
    ] {
        let (status, body) = get(&app, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, json!({ "result": expected }), "{path}");
    }

    let (_, body) = get(&app, "/words/stats").await;
    assert_eq!(body["count"], 6);
    assert_eq!(body["anagram_groups"], 2);
}

#[tokio::test]
async fn test_most_anagrams() {
    let (app, _) = seeded_app();
    let (status, body) = get(&app, "/anagrams/most").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted(&body), vec!["abcde", "bcdea", "edcba"]);
}

#[tokio::test]
async fn test_check_anagrams() {
    let (app, _) = seeded_app();

    for (words, expected) in [
        (json!(["read", "dare"]), 1),
        (json!(["read", "dare", "xyz"]), 0),
        (json!(["read", "dear"]), 0),
        (json!(["solo"]), 0),
        (json!([]), 0),
        (json!(["read", null]), 0),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/anagrams/check",
            Some(json!({ "words": words })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": expected }), "{words}");
    }
}

fn app_with_path_words() -> (Router, Arc<AnagramStore>) {
    let store = Arc::new(AnagramStore::with_words([
        "count", "stats", "most", "toms", "check", "hceck",
    ]));
    (router(AppState::new(store.clone())), store)
}

#[tokio::test]
async fn test_delete_words_named_like_statistics_paths() {
    let (app, store) = app_with_path_words();

    for word in ["count", "stats"] {
        let (status, _) = send(&app, Method::DELETE, &format!("/words/{word}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "{word}");
        assert!(!store.contains(word), "{word}");
    }

    let (status, _) = send(&app, Method::DELETE, "/words/median", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // GET keeps serving the statistic
    let (status, body) = get(&app, "/words/count").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": 4 }));
}

#[tokio::test]
async fn test_anagram_routes_for_words_named_like_paths() {
    let (app, store) = app_with_path_words();

    let (status, body) = get(&app, "/anagrams/check").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted(&body), vec!["check", "hceck"]);

    let (_, body) = get(&app, "/anagrams/check?self=true").await;
    assert_eq!(sorted(&body), vec!["hceck"]);

    let (status, _) = send(&app, Method::DELETE, "/anagrams/most", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!store.contains("most"));
    assert!(!store.contains("toms"));

    let (status, _) = send(&app, Method::DELETE, "/anagrams/check", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(store.lookup_group("check"), None);

    let (status, _) = send(&app, Method::DELETE, "/anagrams/check", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.

use std::sync::Arc;

use serde_json::json;
use serde_json::Value as Json;
use shuttle_axum::axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt as _; // for `oneshot`

use email_tone_analyzer::api::{self, AppState};
use email_tone_analyzer::{ToneConfig, ToneService};

const BODY_LIMIT: usize = 1024 * 1024;

fn state_with(cfg: &ToneConfig, debug_routes: bool) -> AppState {
    AppState {
        service: Arc::new(ToneService::new(cfg)),
        limits: cfg.limits.clone(),
        debug_routes,
    }
}

fn test_state() -> AppState {
    state_with(&ToneConfig::default(), false)
}

fn app(state: &AppState) -> Router {
    api::router(state.clone())
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Json) {
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, v)
}

fn post_json(uri: &str, payload: Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET")
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let resp = app(&test_state()).oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap().trim(), "OK");
}

#[tokio::test]
async fn analyze_returns_full_envelope() {
    let state = test_state();
    let payload = json!({
        "email_content": "This is completely unacceptable. I demand a refund immediately."
    });
    let (status, v) = send(app(&state), post_json("/v1/analyze", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["success"], json!(true));
    let data = &v["data"];
    for key in [
        "id",
        "email_content",
        "timestamp",
        "overall_sentiment",
        "confidence",
        "tones",
        "suggestions",
        "keywords",
        "processing_time_ms",
    ] {
        assert!(data.get(key).is_some(), "missing '{key}' in {data}");
    }
    assert_eq!(data["overall_sentiment"], json!("negative"));
    assert!(!data["suggestions"].as_array().unwrap().is_empty());
    assert_eq!(state.service.history_len(), 1);
}

#[tokio::test]
async fn high_confidence_threshold_omits_tones() {
    let payload = json!({
        "email_content": "Hi, the report is attached.",
        "options": { "confidence_threshold": 1.0 }
    });
    let (status, v) = send(app(&test_state()), post_json("/v1/analyze", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(v["data"].get("tones").is_none(), "tones should be omitted: {v}");
    assert!(v["data"].get("confidence").is_some());
}

#[tokio::test]
async fn suggestions_can_be_disabled() {
    let payload = json!({
        "email_content": "This is completely unacceptable. I demand a refund immediately.",
        "options": { "include_suggestions": false }
    });
    let (_, v) = send(app(&test_state()), post_json("/v1/analyze", payload)).await;
    assert_eq!(v["data"]["suggestions"], json!([]));
    assert!(v["data"].get("tones").is_some());
}

#[tokio::test]
async fn unsupported_language_is_422() {
    let state = test_state();
    let payload = json!({ "email_content": "Hola", "options": { "language": "es" } });
    let (status, v) = send(app(&state), post_json("/v1/analyze", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["success"], json!(false));
    assert!(v["error"].as_str().unwrap().contains("es"));
    assert_eq!(state.service.history_len(), 0);
}

#[tokio::test]
async fn oversized_email_is_413() {
    let mut cfg = ToneConfig::default();
    cfg.limits.max_chars = 20;
    let state = state_with(&cfg, false);

    let payload = json!({ "email_content": "x".repeat(21) });
    let (status, v) = send(app(&state), post_json("/v1/analyze", payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(v["success"], json!(false));

    let payload = json!({ "email_content": "x".repeat(20) });
    let (status, _) = send(app(&state), post_json("/v1/analyze", payload)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn analysis_lookup_by_id() {
    let state = test_state();
    let (_, v) = send(
        app(&state),
        post_json("/v1/analyze", json!({ "email_content": "Thanks for the update." })),
    )
    .await;
    let id = v["data"]["id"].as_str().unwrap().to_string();

    let (status, found) = send(app(&state), get(&format!("/v1/analysis/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["data"]["id"], json!(id));
    assert_eq!(found["data"]["email_content"], json!("Thanks for the update."));

    let (status, missing) = send(app(&state), get("/v1/analysis/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], json!(false));
}

#[tokio::test]
async fn history_is_insertion_ordered_and_limited() {
    let state = test_state();
    for text in ["first email", "second email", "third email"] {
        let (status, _) = send(
            app(&state),
            post_json("/v1/analyze", json!({ "email_content": text })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = send(app(&state), get("/v1/history")).await;
    let texts: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["email_content"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first email", "second email", "third email"]);

    let (_, last) = send(app(&state), get("/v1/history?limit=2")).await;
    let texts: Vec<&str> = last["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["email_content"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["second email", "third email"]);
}

#[tokio::test]
async fn batch_keeps_input_order() {
    let state = test_state();
    let payload = json!({ "emails": [
        "Thank you so much, this is wonderful and amazing!",
        "",
        "This is completely unacceptable. I demand a refund immediately."
    ]});
    let (status, v) = send(app(&state), post_json("/v1/batch", payload)).await;

    assert_eq!(status, StatusCode::OK);
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i["success"] == json!(true)));
    assert_eq!(items[0]["data"]["overall_sentiment"], json!("positive"));
    assert_eq!(items[1]["data"]["overall_sentiment"], json!("neutral"));
    assert_eq!(items[2]["data"]["overall_sentiment"], json!("negative"));
    assert_eq!(state.service.history_len(), 3);
}

#[tokio::test]
async fn batch_over_limit_is_413_and_long_items_fail_individually() {
    let mut cfg = ToneConfig::default();
    cfg.limits.max_batch = 2;
    cfg.limits.max_chars = 10;
    let state = state_with(&cfg, false);

    let (status, _) = send(
        app(&state),
        post_json("/v1/batch", json!({ "emails": ["a", "b", "c"] })),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let (status, v) = send(
        app(&state),
        post_json("/v1/batch", json!({ "emails": ["short", "far too long for this"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v[0]["success"], json!(true));
    assert_eq!(v[1]["success"], json!(false));
    assert_eq!(state.service.history_len(), 1);
}

#[tokio::test]
async fn samples_are_listed() {
    let (status, v) = send(app(&test_state()), get("/v1/samples")).await;
    assert_eq!(status, StatusCode::OK);
    let items = v["data"].as_array().unwrap();
    assert!(items.len() >= 4);
    assert!(items.iter().any(|s| s["category"] == json!("complaint")));
}

#[tokio::test]
async fn sample_lookup_by_id() {
    let (status, v) = send(app(&test_state()), get("/v1/samples/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["category"], json!("complaint"));
    assert!(v["data"]["content"].as_str().unwrap().contains("unacceptable"));

    let (status, v) = send(app(&test_state()), get("/v1/samples/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["success"], json!(false));
}

#[tokio::test]
async fn malformed_json_bodies_get_the_error_envelope() {
    let state = test_state();
    for uri in ["/v1/analyze", "/v1/batch"] {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from("{\"email_content\": "))
            .expect("build POST");
        let (status, v) = send(app(&state), req).await;
        assert!(status.is_client_error(), "{uri}: {status}");
        assert_eq!(v["success"], json!(false), "{uri}: {v}");
        assert!(v["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    // well-formed JSON missing the required field
    let (status, v) = send(app(&state), post_json("/v1/analyze", json!({ "text": "hi" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["success"], json!(false));

    // no content-type header at all
    let req = Request::builder()
        .method("POST")
        .uri("/v1/analyze")
        .body(Body::from("{}"))
        .expect("build POST");
    let (status, v) = send(app(&state), req).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(v["success"], json!(false));
    assert_eq!(state.service.history_len(), 0);
}

#[tokio::test]
async fn debug_routes_are_gated() {
    let (status, _) = send(app(&test_state()), get("/debug/breakdown?text=hello")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let state = state_with(&ToneConfig::default(), true);
    let (status, v) = send(
        app(&state),
        get("/debug/breakdown?text=I%20demand%20a%20refund%20immediately"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["word_count"], json!(5));
    assert!(v["hits"]["angry"].as_u64().unwrap() >= 2);
    assert!(v["categories"].as_array().unwrap().contains(&json!(["angry", 2])));
    assert!(v["valence"]["negative_words"].as_u64().unwrap() >= 1);
    // diagnostics never touch history
    assert_eq!(state.service.history_len(), 0);

    let (status, rules) = send(app(&state), get("/debug/rules")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(rules.as_array().unwrap().contains(&json!("high-anger")));
}

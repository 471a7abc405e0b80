use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use hackathon_registration::api::create_router;
use hackathon_registration::config::AppConfig;
use hackathon_registration::create_app_state;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_with_config(config: &AppConfig) -> Router {
    create_router(create_app_state(config).unwrap())
}

fn app() -> Router {
    app_with_config(&AppConfig::default())
}

fn valid_payload() -> Value {
    json!({
        "teamName": "Alpha",
        "teamLeaderName": "A",
        "teamLeaderEmail": "a@b.com",
        "teamLeaderPhone": "9876543210",
        "teamSize": "2",
        "members": [{"name": "B", "email": "b@c.com", "phone": "9876543211"}],
        "problemTrack": "sentiment-analysis"
    })
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn register(app: Router, payload: Value) -> (StatusCode, Value) {
    send(app, post_json("/register", payload.to_string())).await
}

async fn wait_for_requests(server: &MockServer, count: usize) -> usize {
    for _ in 0..50 {
        let received = server.received_requests().await.unwrap_or_default().len();
        if received >= count {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn test_valid_registration_is_accepted() {
    let (status, body) = register(app(), valid_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration received successfully");

    let team_id = body["teamId"].as_str().unwrap();
    let suffix = team_id.strip_prefix("nutpam-2025-").unwrap();
    let (millis, random) = suffix.split_once('-').unwrap();
    assert!(millis.parse::<u64>().is_ok());
    assert_eq!(random.len(), 6);
    assert!(random.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[tokio::test]
async fn test_api_prefixed_route() {
    let (status, body) = send(app(), post_json("/api/register", valid_payload().to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_numeric_team_size_is_accepted() {
    let mut payload = valid_payload();
    payload["teamSize"] = json!(2);

    let (status, _) = register(app(), payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_distinct_team_ids() {
    let (_, first) = register(app(), valid_payload()).await;
    let (_, second) = register(app(), valid_payload()).await;

    assert_ne!(first["teamId"], second["teamId"]);
}

#[tokio::test]
async fn test_invalid_leader_email() {
    let mut payload = valid_payload();
    payload["teamLeaderEmail"] = json!("not-an-email");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["teamLeaderEmail"], "Invalid email format");
}

#[tokio::test]
async fn test_invalid_leader_phone() {
    let mut payload = valid_payload();
    payload["teamLeaderPhone"] = json!("12345");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["teamLeaderPhone"], "Invalid phone format");
}

#[tokio::test]
async fn test_non_ascii_digit_phone_rejected() {
    let mut payload = valid_payload();
    payload["teamLeaderPhone"] = json!("٩٨٧٦٥٤٣٢١٠");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["teamLeaderPhone"], "Invalid phone format");
}

#[tokio::test]
async fn test_phone_length_counts_leading_plus() {
    let mut payload = valid_payload();
    payload["teamLeaderPhone"] = json!("+123456789012345");

    let (status, body) = register(app(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["teamLeaderPhone"], "Invalid phone format");

    let mut payload = valid_payload();
    payload["teamLeaderPhone"] = json!("+123456789");

    let (status, _) = register(app(), payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .body(Body::from(valid_payload().to_string()))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_member_count_mismatch() {
    let mut payload = valid_payload();
    payload["members"] = json!([]);

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["members"], "Invalid member count");
}

#[tokio::test]
async fn test_missing_field_is_general_error() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("teamName");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["general"], "Missing required fields");
}

#[tokio::test]
async fn test_whitespace_only_field_is_missing() {
    let mut payload = valid_payload();
    payload["teamLeaderName"] = json!("   ");

    let (_, body) = register(app(), payload).await;
    assert_eq!(body["errors"]["general"], "Missing required fields");
}

#[tokio::test]
async fn test_team_size_out_of_range() {
    let mut payload = valid_payload();
    payload["teamSize"] = json!("5");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["teamSize"], "Team must have 2-3 members");
}

#[tokio::test]
async fn test_first_failing_member_is_reported() {
    let mut payload = valid_payload();
    payload["teamSize"] = json!("3");
    payload["members"] = json!([
        {"name": "B", "email": "b@c.com", "phone": "9876543211"},
        {"name": "C", "email": "c-at-c.com", "phone": "9876543212"}
    ]);

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["members"], "Member 3 has invalid email");
}

#[tokio::test]
async fn test_unknown_track_rejected_when_enforced() {
    let mut payload = valid_payload();
    payload["problemTrack"] = json!("time-travel");

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["problemTrack"], "Unknown problem track");
}

#[tokio::test]
async fn test_unknown_track_accepted_when_not_enforced() {
    let mut config = AppConfig::default();
    config.registration.enforce_track_catalog = false;

    let mut payload = valid_payload();
    payload["problemTrack"] = json!("time-travel");

    let (status, _) = register(app_with_config(&config), payload).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_general_error() {
    let (status, body) = send(app(), post_json("/register", "{not json".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["general"], "Invalid request body");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut payload = valid_payload();
    payload["teamName"] = json!("x".repeat(100 * 1024));

    let (status, body) = register(app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["general"], "Invalid request body");
}

#[tokio::test]
async fn test_relay_receives_accepted_registration() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("teamName=Alpha"))
        .and(body_string_contains("member2Name=B"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.relay.enabled = true;
    config.relay.url = server.uri();

    let (status, body) = register(app_with_config(&config), valid_payload()).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(wait_for_requests(&server, 1).await, 1);
    let requests = server.received_requests().await.unwrap();
    let form = String::from_utf8_lossy(&requests[0].body);
    let team_id = body["teamId"].as_str().unwrap();
    assert!(form.contains(&format!("teamId={}", team_id)));
}

#[tokio::test]
async fn test_relay_failure_does_not_affect_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.relay.enabled = true;
    config.relay.url = server.uri();

    let (status, body) = register(app_with_config(&config), valid_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(wait_for_requests(&server, 1).await, 1);
}

#[tokio::test]
async fn test_rejected_registration_is_not_relayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.relay.enabled = true;
    config.relay.url = server.uri();

    let mut payload = valid_payload();
    payload["teamSize"] = json!("3");

    let (status, _) = register(app_with_config(&config), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tracks_catalog() {
    let request = Request::builder().uri("/tracks").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "2025.1");
    assert_eq!(body["tracks"].as_array().unwrap().len(), 19);
    assert_eq!(body["tracks"][0]["slug"], "sentiment-analysis");
}

#[tokio::test]
async fn test_health_endpoints() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"][0]["name"], "spreadsheet_relay");

    let request = Request::builder().uri("/live").body(Body::empty()).unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = app()
        .oneshot(post_json("/register", valid_payload().to_string()))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}

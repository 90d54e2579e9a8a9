use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::util::ServiceExt; // for `oneshot`
use tower_http::services::ServeDir;

use chatverso_launcher::api;
use chatverso_launcher::config::Config;

// Fake chat server address so no test depends on this machine's interfaces
fn test_config() -> Config {
    Config {
        port: 8550,
        chat_server_host: "192.0.2.10".to_string(),
        chat_server_port: 5000,
    }
}

fn login_request(username: &str) -> Request<Body> {
    let payload = serde_json::json!({ "username": username });
    Request::builder()
        .uri("/login")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body was not valid JSON")
}

// Parse the generated URL and decode its single query parameter
fn decoded_username(url: &str) -> String {
    let parsed = url::Url::parse(url).expect("generated URL did not parse");
    assert_eq!(parsed.path(), "/chat");
    let (key, value) = parsed
        .query_pairs()
        .next()
        .expect("missing query parameter");
    assert_eq!(key, "username");
    value.into_owned()
}

#[tokio::test]
async fn valid_login_returns_the_chat_url() {
    let app = api::api_router(test_config());
    let response = app.oneshot(login_request("Ana Paula")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body["url"],
        "http://192.0.2.10:5000/chat?username=Ana%20Paula"
    );
    assert_eq!(
        body["message"],
        "Chat aberto no seu navegador! Você pode fechar esta janela."
    );
}

#[tokio::test]
async fn username_is_trimmed_before_encoding() {
    let app = api::api_router(test_config());
    let response = app.oneshot(login_request("  Ana  ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(decoded_username(body["url"].as_str().unwrap()), "Ana");
}

#[tokio::test]
async fn empty_and_whitespace_usernames_are_ignored() {
    for raw in ["", "   ", " \t \n "] {
        let app = api::api_router(test_config());
        let response = app.oneshot(login_request(raw)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn query_parameter_round_trips_reserved_and_unicode_characters() {
    for name in ["João & Maria=amigos", "a b", "x&y", "k=v", "café ☕"] {
        let app = api::api_router(test_config());
        let response = app.oneshot(login_request(name)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(decoded_username(body["url"].as_str().unwrap()), name.trim());
    }
}

#[tokio::test]
async fn health_check_reports_the_service() {
    let app = api::api_router(test_config());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "chatverso-launcher");
}

#[tokio::test]
async fn login_page_is_served_at_the_root() {
    // Same wiring as main.rs; cargo runs tests from the crate root, where
    // static/ lives.
    let app = Router::new().nest_service("/", ServeDir::new("static"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("ChatVerso"));
    assert!(page.contains("Iniciar conversa"));
    assert!(page.contains("Digite seu User"));
}

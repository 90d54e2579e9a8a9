//! Login API Endpoint
//!
//! Receives the username from the page and answers with the chat URL to open.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::login::{Action, LoginEvent, LoginState, reduce};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub url: String,
    pub message: String,
}

/// POST /api/login
///
/// Feeds the submitted username through the login state machine. A valid name
/// yields the chat URL for the page to open in a new tab; an empty one is
/// dropped silently and the dialog stays where it is.
pub async fn login(
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let event = LoginEvent::Submit(payload.username);
    let transition = reduce(LoginState::DialogOpen, &event, &config);

    match transition.action {
        Some(Action::OpenChatUrl(url)) => {
            tracing::info!("login accepted, redirecting to {}", url);
            (
                StatusCode::OK,
                Json(LoginResponse {
                    url,
                    message: "Chat aberto no seu navegador! Você pode fechar esta janela."
                        .to_string(),
                }),
            )
                .into_response()
        }
        _ => {
            tracing::debug!("empty username submission ignored");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

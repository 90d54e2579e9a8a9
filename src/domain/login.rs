//! Login state machine.
//!
//! Each user action on the page is an event; `reduce` computes the next state
//! and the side effect the caller must perform (focus the field, open a URL).
//! Keeping this pure means the whole flow is testable without a browser.

use crate::config::Config;

/// Where the login flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Landing page, dialog not shown
    Closed,
    /// Dialog visible, waiting for a username
    DialogOpen,
    /// Username accepted and chat opened; terminal
    Confirmed,
}

/// User interactions the page can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    OpenDialog,
    Submit(String),
}

/// Side effect for the caller to perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FocusUsername,
    OpenChatUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: LoginState,
    pub action: Option<Action>,
}

/// Compute the next state and side effect for a user event.
pub fn reduce(state: LoginState, event: &LoginEvent, config: &Config) -> Transition {
    match (state, event) {
        (LoginState::Closed, LoginEvent::OpenDialog) => Transition {
            next: LoginState::DialogOpen,
            action: Some(Action::FocusUsername),
        },
        (LoginState::DialogOpen, LoginEvent::Submit(raw)) => {
            let username = raw.trim();
            if username.is_empty() {
                // Empty submissions are dropped without feedback; the dialog
                // simply stays open.
                Transition {
                    next: LoginState::DialogOpen,
                    action: None,
                }
            } else {
                Transition {
                    next: LoginState::Confirmed,
                    action: Some(Action::OpenChatUrl(chat_url(config, username))),
                }
            }
        }
        (state, _) => Transition {
            next: state,
            action: None,
        },
    }
}

/// Build the chat server URL for a validated username. Percent-encoding keeps
/// the query parameter intact for spaces, separators and non-ASCII input.
pub fn chat_url(config: &Config, username: &str) -> String {
    format!(
        "http://{}:{}/chat?username={}",
        config.chat_server_host,
        config.chat_server_port,
        urlencoding::encode(username)
    )
}

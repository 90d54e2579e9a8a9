//! Domain layer - Pure login flow logic
//!
//! This layer contains NO framework dependencies (no Axum, no HTTP types).
//! Only the login state machine and the redirect URL construction.

pub mod login;

pub use login::{Action, LoginEvent, LoginState, Transition, chat_url, reduce};

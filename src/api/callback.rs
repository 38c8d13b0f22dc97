use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode};
use reqwest::Client;
use tokio::sync::{Mutex, oneshot};

use crate::{
    config::SpotifyConfig,
    error::AuthError,
    spotify,
    types::{PendingLogin, Token},
    warning,
};

/// Result handed from the callback handler to the waiting login flow.
pub type LoginOutcome = Result<Token, AuthError>;

/// Everything the callback needs to finish one login attempt.
///
/// The sender is taken by the first callback that arrives, so exactly one
/// outcome is ever delivered.
pub struct CallbackState {
    spotify: SpotifyConfig,
    login: PendingLogin,
    http: Client,
    sender: Mutex<Option<oneshot::Sender<LoginOutcome>>>,
}

impl CallbackState {
    pub fn new(
        spotify: SpotifyConfig,
        login: PendingLogin,
        sender: oneshot::Sender<LoginOutcome>,
    ) -> Self {
        Self {
            spotify,
            login,
            http: Client::new(),
            sender: Mutex::new(Some(sender)),
        }
    }
}

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<CallbackState>>,
) -> (StatusCode, &'static str) {
    let Some(sender) = shared_state.sender.lock().await.take() else {
        return (StatusCode::NOT_FOUND, "Login already completed.");
    };

    let outcome = complete_login(&shared_state, &params).await;
    let response = match &outcome {
        Ok(_) => (StatusCode::OK, "Login Completed!"),
        Err(AuthError::StateMismatch { .. }) => (StatusCode::NOT_FOUND, "Not Found"),
        Err(_) => (StatusCode::FORBIDDEN, "Couldn't get token"),
    };

    if sender.send(outcome).is_err() {
        warning!("Login flow is no longer waiting for the callback");
    }

    response
}

async fn complete_login(
    shared_state: &CallbackState,
    params: &HashMap<String, String>,
) -> LoginOutcome {
    if let Some(reason) = params.get("error") {
        return Err(AuthError::Denied(reason.clone()));
    }

    let received = params.get("state").cloned().unwrap_or_default();
    if received != shared_state.login.state {
        return Err(AuthError::StateMismatch {
            received,
            expected: shared_state.login.state.clone(),
        });
    }

    let Some(code) = params.get("code") else {
        return Err(AuthError::MissingCode);
    };

    spotify::auth::exchange_code(
        &shared_state.http,
        &shared_state.spotify,
        code,
        &shared_state.login.code_verifier,
    )
    .await
    .map_err(AuthError::Exchange)
}

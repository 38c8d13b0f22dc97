use chrono::{TimeDelta, Utc};
use reqwest::Client;
use url::Url;

use crate::{
    config::{SCOPES, SpotifyConfig},
    error::SpotifyError,
    types::{PendingLogin, Token, TokenResponse},
    utils,
};

/// Starts a login attempt: fresh anti-forgery state and PKCE verifier.
pub fn new_login() -> PendingLogin {
    PendingLogin {
        state: utils::generate_state(),
        code_verifier: utils::generate_code_verifier(),
    }
}

/// Builds the URL the user has to open to grant access.
///
/// Besides the client id, redirect URI and scopes the URL carries the
/// anti-forgery `state` and an S256 PKCE challenge derived from the
/// verifier kept in `login`.
pub fn authorize_url(config: &SpotifyConfig, login: &PendingLogin) -> Result<Url, SpotifyError> {
    let challenge = utils::generate_code_challenge(&login.code_verifier);
    let scope = SCOPES.join(" ");

    let url = Url::parse_with_params(
        &config.authorize_url(),
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", login.state.as_str()),
            ("code_challenge", challenge.as_str()),
            ("code_challenge_method", "S256"),
        ],
    )?;

    Ok(url)
}

/// Exchanges an authorization code for a token.
pub async fn exchange_code(
    http: &Client,
    config: &SpotifyConfig,
    code: &str,
    verifier: &str,
) -> Result<Token, SpotifyError> {
    let form = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("code_verifier", verifier),
    ];

    let response = request_token(http, config, &form).await?;
    token_from_response(response, None)
}

/// Trades the refresh token of `token` for a new access token.
///
/// Spotify may omit the refresh token in the response, in which case the
/// old one stays valid and is carried over.
pub async fn refresh_token(
    http: &Client,
    config: &SpotifyConfig,
    token: &Token,
) -> Result<Token, SpotifyError> {
    let form = [
        ("grant_type", "refresh_token"),
        ("refresh_token", token.refresh_token.as_str()),
    ];

    let response = request_token(http, config, &form).await?;
    token_from_response(response, Some(token.refresh_token.as_str()))
}

async fn request_token(
    http: &Client,
    config: &SpotifyConfig,
    form: &[(&str, &str)],
) -> Result<TokenResponse, SpotifyError> {
    let endpoint = config.token_url();
    let response = http
        .post(&endpoint)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::Status {
            endpoint,
            status,
            body,
        });
    }

    Ok(response.json::<TokenResponse>().await?)
}

fn token_from_response(
    response: TokenResponse,
    previous_refresh: Option<&str>,
) -> Result<Token, SpotifyError> {
    let access_token = response
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(SpotifyError::TokenResponse("access_token"))?;

    let refresh_token = match (response.refresh_token, previous_refresh) {
        (Some(fresh), _) if !fresh.is_empty() => fresh,
        (_, Some(previous)) => previous.to_string(),
        _ => return Err(SpotifyError::TokenResponse("refresh_token")),
    };

    let expiry = match response.expires_in {
        Some(secs) => Some(
            TimeDelta::try_seconds(secs)
                .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                .ok_or(SpotifyError::TokenResponse("expires_in"))?,
        ),
        None => None,
    };

    Ok(Token {
        access_token,
        token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
        refresh_token,
        expiry,
    })
}

use std::{net::SocketAddr, sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::oneshot;
use url::Url;

use crate::{
    api::CallbackState,
    config::{self, AuthConfig, SpotifyConfig},
    error::{AuthError, SyncError},
    info,
    management::{S3TokenStore, TokenManager, TokenStore},
    server::start_api_server,
    spotify::{self, SpotifyClient},
    success,
    types::{Token, User},
    warning,
};

/// Runs the interactive login and stores the token in S3.
///
/// 1. Starts the callback server on the fixed local port
/// 2. Prints the login URL and tries to open it in the browser
/// 3. Blocks until Spotify redirects back
/// 4. Uploads the token and confirms it by fetching the user profile
pub async fn auth(config: &AuthConfig) -> Result<User, SyncError> {
    let token = acquire_token(&config.spotify, config::SERVER_ADDRESS, |_, url| {
        info!(
            "Please log in to Spotify by visiting the following page in your browser: {}",
            url
        );
        if webbrowser::open(url.as_str()).is_err() {
            warning!("Failed to open browser. Please open the URL above manually.");
        }
    })
    .await?;

    let tokens = TokenManager::new(S3TokenStore::connect(&config.storage).await);
    let user = store_token(&config.spotify, &tokens, token).await?;

    success!("You are logged in as: {}", user.id);
    success!(
        "Token has been saved to s3://{}/{}",
        config.storage.bucket,
        config.storage.key
    );
    Ok(user)
}

/// Serves the login callback on `addr` until one redirect arrives.
///
/// `on_ready` is called once the listener is bound, with the bound address
/// and the authorize URL the user has to visit.
pub async fn acquire_token<F>(
    spotify_config: &SpotifyConfig,
    addr: &str,
    on_ready: F,
) -> Result<Token, AuthError>
where
    F: FnOnce(SocketAddr, &Url),
{
    let login = spotify::auth::new_login();
    let url = spotify::auth::authorize_url(spotify_config, &login).map_err(AuthError::Exchange)?;

    let (sender, receiver) = oneshot::channel();
    let state = Arc::new(CallbackState::new(spotify_config.clone(), login, sender));
    let server = start_api_server(addr, state).await?;

    on_ready(server.local_addr(), &url);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for Spotify login...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let outcome = receiver.await;
    pb.finish_and_clear();

    // let the browser receive its response before anything can exit
    server.shutdown().await?;

    outcome.map_err(|_| AuthError::ChannelClosed)?
}

/// Uploads `token` and checks it works by fetching the user it belongs to.
pub async fn store_token<S: TokenStore>(
    spotify_config: &SpotifyConfig,
    tokens: &TokenManager<S>,
    token: Token,
) -> Result<User, SyncError> {
    tokens.persist(&token).await?;

    let client = SpotifyClient::new(spotify_config.clone(), token);
    client.current_user().await.map_err(SyncError::CurrentUser)
}

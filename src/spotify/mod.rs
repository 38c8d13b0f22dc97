//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API and accounts service this
//! tool needs. Every call is a single request with no retry: failures are
//! returned to the flow, which treats them as fatal.
//!
//! ## Layout
//!
//! - [`auth`] - authorize URL, code exchange and token refresh
//! - [`user`] - the current user's profile
//! - [`playlist`] - listing playlists and their tracks, adding tracks
//! - [`library`] - "are these tracks saved" lookups
//!
//! [`SpotifyClient`] owns the token. [`SpotifyClient::authenticate`] refreshes
//! an expired token before any API call, and [`SpotifyClient::token`] exposes
//! the token in use so callers can detect the refresh and persist it.
//!
//! ## API Coverage
//!
//! - `GET /me`
//! - `GET /users/{user_id}/playlists`
//! - `GET /playlists/{playlist_id}/tracks`
//! - `GET /me/tracks/contains`
//! - `POST /playlists/{playlist_id}/tracks`
//! - `POST /api/token` (accounts service)

pub mod auth;
pub mod library;
pub mod playlist;
pub mod user;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{config::SpotifyConfig, error::SpotifyError, info, types::Token};

pub struct SpotifyClient {
    http: Client,
    config: SpotifyConfig,
    token: Token,
}

impl SpotifyClient {
    /// Wraps `token` without checking its expiry.
    pub fn new(config: SpotifyConfig, token: Token) -> Self {
        Self {
            http: Client::new(),
            config,
            token,
        }
    }

    /// Builds a client whose token is valid right now.
    ///
    /// An expired access token is refreshed with the embedded refresh token;
    /// compare [`SpotifyClient::token`] with the input to find out whether
    /// that happened.
    pub async fn authenticate(config: SpotifyConfig, token: Token) -> Result<Self, SpotifyError> {
        let mut client = Self::new(config, token);
        if client.token.is_expired() {
            info!("Access token expired, refreshing");
            client.token = auth::refresh_token(&client.http, &client.config, &client.token).await?;
        }
        Ok(client)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.url(path))
            .bearer_auth(&self.token.access_token)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.url(path))
            .bearer_auth(&self.token.access_token)
    }

    /// Sends `request` and decodes a JSON body, mapping non-2xx statuses to
    /// [`SpotifyError::Status`] with the response body attached.
    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, SpotifyError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

//! Error types for both flows.
//!
//! Every variant is fatal to the run; the enums exist so callers (and tests)
//! can tell which step failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("cannot load .env file: {0}")]
    EnvFile(String),
}

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("token endpoint response is missing {0}")]
    TokenResponse(&'static str),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to download token file from s3://{bucket}/{key}: {message}")]
    Download {
        bucket: String,
        key: String,
        message: String,
    },
    #[error("could not write token to s3://{bucket}/{key}: {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },
    #[error("could not unmarshal token: {0}")]
    Decode(serde_json::Error),
    #[error("could not marshal token: {0}")]
    Encode(serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("state mismatch: {received} != {expected}")]
    StateMismatch { received: String, expected: String },
    #[error("authorization denied by provider: {0}")]
    Denied(String),
    #[error("callback did not include an authorization code")]
    MissingCode,
    #[error("couldn't get token: {0}")]
    Exchange(#[source] SpotifyError),
    #[error("callback server stopped before the login completed")]
    ChannelClosed,
    #[error("callback server failed: {0}")]
    Server(#[from] std::io::Error),
}

/// The umbrella error for a sync run, one variant per failing step.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("could not refresh token: {0}")]
    Refresh(#[source] SpotifyError),
    #[error("could not get user: {0}")]
    CurrentUser(#[source] SpotifyError),
    #[error("could not get playlists: {0}")]
    Playlists(#[source] SpotifyError),
    #[error("did not get playlist IDs (missing: {})", .0.join(", "))]
    PlaylistsNotFound(Vec<String>),
    #[error("could not get {name} playlist: {source}")]
    PlaylistTracks {
        name: String,
        #[source]
        source: SpotifyError,
    },
    #[error("could not check if tracks exist in library: {0}")]
    LibraryCheck(#[source] SpotifyError),
    #[error("library check returned {results} results for {ids} tracks")]
    Misaligned { ids: usize, results: usize },
    #[error("could not add tracks to playlist: {0}")]
    AddTracks(#[source] SpotifyError),
}

//! Configuration management for discover-sync.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory. Configuration is read once at startup
//! into plain structs that the flows borrow; nothing here is global.
//!
//! The builders take a lookup closure instead of reading `std::env` directly
//! so that tests can supply values without touching the process environment.

use std::{env, path::PathBuf};

use crate::error::ConfigError;

/// Callback address of the local login server.
pub const SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Redirect URI registered with the Spotify application.
pub const REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Name of the playlist Spotify generates every Monday.
pub const DISCOVER_WEEKLY: &str = "Discover Weekly";

/// Scopes needed to read the library and playlists and to add tracks.
pub const SCOPES: &[&str] = &[
    "user-library-read",
    "playlist-read-private",
    "playlist-modify-private",
    "playlist-modify-public",
];

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Loads environment variables from `.env` in the local data directory.
///
/// The file is optional: deployed lambdas get their settings from the
/// function environment. Variables already set in the process win over the
/// file.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/discover-sync/.env`
/// - macOS: `~/Library/Application Support/discover-sync/.env`
/// - Windows: `%LOCALAPPDATA%/discover-sync/.env`
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_file_path();
    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::EnvFile(e.to_string()))
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("discover-sync/.env");
    path
}

/// Collects required values and remembers every one that is missing, so a
/// misconfigured deployment reports all gaps in a single error.
struct Required<F> {
    lookup: F,
    missing: Vec<String>,
}

impl<F> Required<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            missing: Vec::new(),
        }
    }

    fn get(&mut self, key: &str) -> String {
        match (self.lookup)(key).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                self.missing.push(key.to_string());
                String::new()
            }
        }
    }

    fn optional(&self, key: &str, default: &str) -> String {
        (self.lookup)(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    fn finish<T>(self, value: T) -> Result<T, ConfigError> {
        if self.missing.is_empty() {
            Ok(value)
        } else {
            Err(ConfigError::Missing(self.missing))
        }
    }
}

/// Location of the token object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub bucket: String,
    pub key: String,
    pub region: String,
}

impl StorageConfig {
    fn read<F: Fn(&str) -> Option<String>>(env: &mut Required<F>) -> Self {
        Self {
            bucket: env.get("BUCKET"),
            key: env.get("TOKEN_FILE"),
            region: env.get("REGION"),
        }
    }
}

/// Spotify application credentials and endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub accounts_url: String,
    pub redirect_uri: String,
}

impl SpotifyConfig {
    fn read<F: Fn(&str) -> Option<String>>(env: &mut Required<F>) -> Self {
        Self {
            client_id: env.get("SPOTIFY_ID"),
            client_secret: env.get("SPOTIFY_SECRET"),
            api_url: trim_slash(env.optional("SPOTIFY_API_URL", DEFAULT_API_URL)),
            accounts_url: trim_slash(env.optional("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL)),
            redirect_uri: REDIRECT_URI.to_string(),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url)
    }

    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.accounts_url)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Settings for the interactive token acquisition flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub storage: StorageConfig,
    pub spotify: SpotifyConfig,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let mut env = Required::new(lookup);
        let storage = StorageConfig::read(&mut env);
        let spotify = SpotifyConfig::read(&mut env);
        env.finish(Self { storage, spotify })
    }
}

/// Settings for the scheduled sync flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub target_playlist: String,
    pub storage: StorageConfig,
    pub spotify: SpotifyConfig,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let mut env = Required::new(lookup);
        let target_playlist = env.get("TARGET_PLAYLIST");
        let storage = StorageConfig::read(&mut env);
        let spotify = SpotifyConfig::read(&mut env);
        env.finish(Self {
            target_playlist,
            storage,
            spotify,
        })
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// OAuth credential as stored in object storage.
///
/// The field names and the RFC 3339 `expiry` match the oauth2 token JSON
/// that existing token files hold, so they keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl Token {
    /// Seconds before `expiry` at which a token is already treated as expired.
    pub const EXPIRY_LEEWAY_SECS: i64 = 60;

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiry {
            // 0001-01-01T00:00:00Z is the zero timestamp; it means "no expiry".
            Some(expiry) if expiry.timestamp() > 0 => {
                now + Duration::seconds(Self::EXPIRY_LEEWAY_SECS) >= expiry
            }
            _ => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Raw body of the accounts service token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PendingLogin {
    pub state: String,
    pub code_verifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    /// Spotify occasionally returns `null` in place of a playlist.
    pub items: Vec<Option<Playlist>>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Outcome of one sync run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub target_playlist: String,
    pub added: Vec<Track>,
    pub token_refreshed: bool,
}

impl SyncReport {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

#[derive(Tabled)]
pub struct AddedTrackTableRow {
    pub name: String,
    pub artists: String,
}

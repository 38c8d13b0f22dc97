use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Playlist, PlaylistItem, Track};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Anti-forgery value for one login attempt.
pub fn generate_state() -> String {
    random_alphanumeric(32)
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn track_uri(id: &str) -> String {
    format!("spotify:track:{id}")
}

/// Ids of the source and target playlists, as found by [`resolve_playlists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaylists {
    pub source_id: Option<String>,
    pub target_id: Option<String>,
}

/// Scans `playlists` once for exact name matches. The first match wins and
/// `None` entries are skipped.
pub fn resolve_playlists<'a, I>(playlists: I, source: &str, target: &str) -> ResolvedPlaylists
where
    I: IntoIterator<Item = &'a Option<Playlist>>,
{
    let mut resolved = ResolvedPlaylists {
        source_id: None,
        target_id: None,
    };

    for playlist in playlists.into_iter().flatten() {
        if resolved.source_id.is_none() && playlist.name == source {
            resolved.source_id = Some(playlist.id.clone());
        }
        if resolved.target_id.is_none() && playlist.name == target {
            resolved.target_id = Some(playlist.id.clone());
        }
    }

    resolved
}

/// Tracks that can be referenced by id, in listing order.
///
/// Local files and unavailable entries come back without a track or id and
/// are dropped.
pub fn playable_tracks(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .filter(|track| track.id.as_deref().is_some_and(|id| !id.is_empty()))
        .collect()
}

/// Keeps the entries whose positional flag is `true`.
///
/// Returns `None` when the two slices differ in length, since positions would
/// no longer line up.
pub fn filter_saved<T: Clone>(items: &[T], saved: &[bool]) -> Option<Vec<T>> {
    if items.len() != saved.len() {
        return None;
    }

    Some(
        items
            .iter()
            .zip(saved)
            .filter(|(_, has)| **has)
            .map(|(item, _)| item.clone())
            .collect(),
    )
}

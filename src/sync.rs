//! The scheduled flow: load the token, refresh and re-persist it if needed,
//! then copy saved Discover Weekly tracks into the target playlist.

use crate::{
    config::{DISCOVER_WEEKLY, SyncConfig},
    error::SyncError,
    management::{TokenManager, TokenStore},
    spotify::SpotifyClient,
    success,
    types::{SyncReport, Track},
    utils, warning,
};

/// Runs one complete sync against the token held in `tokens`.
pub async fn run<S: TokenStore>(
    config: &SyncConfig,
    tokens: &TokenManager<S>,
) -> Result<SyncReport, SyncError> {
    let original = tokens.load().await?;

    let client = SpotifyClient::authenticate(config.spotify.clone(), original.clone())
        .await
        .map_err(SyncError::Refresh)?;

    let token_refreshed = tokens
        .persist_if_refreshed(&original, client.token())
        .await?;

    let added = sync_discover_weekly(&client, &config.target_playlist).await?;

    success!(
        "successfully added {} tracks to playlist {}",
        added.len(),
        config.target_playlist
    );

    Ok(SyncReport {
        target_playlist: config.target_playlist.clone(),
        added,
        token_refreshed,
    })
}

/// Adds every Discover Weekly track the user saved to `target_playlist`.
///
/// Tracks already present in the target are not filtered out, so running
/// twice in the same week adds them twice.
pub async fn sync_discover_weekly(
    client: &SpotifyClient,
    target_playlist: &str,
) -> Result<Vec<Track>, SyncError> {
    let user = client.current_user().await.map_err(SyncError::CurrentUser)?;

    let playlists = client
        .user_playlists(&user.id)
        .await
        .map_err(SyncError::Playlists)?;
    if playlists.next.is_some() {
        warning!(
            "only the first {} of {} playlists were searched",
            playlists.items.len(),
            playlists.total.unwrap_or_default()
        );
    }

    let resolved = utils::resolve_playlists(&playlists.items, DISCOVER_WEEKLY, target_playlist);
    let (source_id, target_id) = match (resolved.source_id, resolved.target_id) {
        (Some(source), Some(target)) => (source, target),
        (source, target) => {
            let mut missing = Vec::new();
            if source.is_none() {
                missing.push(DISCOVER_WEEKLY.to_string());
            }
            if target.is_none() {
                missing.push(target_playlist.to_string());
            }
            return Err(SyncError::PlaylistsNotFound(missing));
        }
    };

    let listing = client
        .playlist_tracks(&source_id)
        .await
        .map_err(|source| SyncError::PlaylistTracks {
            name: DISCOVER_WEEKLY.to_string(),
            source,
        })?;
    if listing.next.is_some() {
        warning!(
            "only the first {} of {} {} tracks were checked",
            listing.items.len(),
            listing.total.unwrap_or_default(),
            DISCOVER_WEEKLY
        );
    }

    let tracks = utils::playable_tracks(listing.items);
    if tracks.is_empty() {
        return Ok(Vec::new());
    }

    let ids = track_ids(&tracks);
    let saved = client
        .has_saved_tracks(&ids)
        .await
        .map_err(SyncError::LibraryCheck)?;

    let to_add = utils::filter_saved(&tracks, &saved).ok_or(SyncError::Misaligned {
        ids: ids.len(),
        results: saved.len(),
    })?;

    if !to_add.is_empty() {
        client
            .add_tracks(&target_id, &track_ids(&to_add))
            .await
            .map_err(SyncError::AddTracks)?;
    }

    Ok(to_add)
}

fn track_ids(tracks: &[Track]) -> Vec<String> {
    tracks.iter().filter_map(|t| t.id.clone()).collect()
}

use crate::{
    error::SpotifyError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, GetPlaylistItemsResponse,
        GetUserPlaylistsResponse,
    },
    utils,
};

use super::SpotifyClient;

/// Largest page the playlists endpoint hands out.
pub const PLAYLISTS_PAGE_LIMIT: u32 = 50;

/// Tracks fetched from the source playlist. Capped by the library lookup,
/// which accepts at most 50 ids per request.
pub const TRACKS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// First page of the playlists owned or followed by `user_id`.
    ///
    /// No further pages are requested; `next` on the response tells whether
    /// the listing was cut short.
    pub async fn user_playlists(
        &self,
        user_id: &str,
    ) -> Result<GetUserPlaylistsResponse, SpotifyError> {
        let path = format!("/users/{user_id}/playlists");
        let request = self
            .get(&path)
            .query(&[("limit", PLAYLISTS_PAGE_LIMIT.to_string())]);

        self.send_json(&path, request).await
    }

    /// First page of tracks in `playlist_id`.
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> Result<GetPlaylistItemsResponse, SpotifyError> {
        let path = format!("/playlists/{playlist_id}/tracks");
        let request = self
            .get(&path)
            .query(&[("limit", TRACKS_PAGE_LIMIT.to_string())]);

        self.send_json(&path, request).await
    }

    /// Appends `track_ids` to `playlist_id` in one request.
    ///
    /// Tracks already in the playlist are added again; the endpoint does not
    /// deduplicate.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<AddTrackToPlaylistResponse, SpotifyError> {
        let path = format!("/playlists/{playlist_id}/tracks");
        let body = AddTrackToPlaylistRequest {
            uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
        };

        self.send_json(&path, self.post(&path).json(&body)).await
    }
}

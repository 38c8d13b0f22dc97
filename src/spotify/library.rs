use crate::error::SpotifyError;

use super::SpotifyClient;

impl SpotifyClient {
    /// Whether each of `track_ids` is saved in the user's library.
    ///
    /// The answer is positional: entry `i` belongs to `track_ids[i]`.
    pub async fn has_saved_tracks(&self, track_ids: &[String]) -> Result<Vec<bool>, SpotifyError> {
        let path = "/me/tracks/contains";
        let request = self.get(path).query(&[("ids", track_ids.join(","))]);

        self.send_json(path, request).await
    }
}

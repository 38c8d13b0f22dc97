use crate::{error::SpotifyError, types::User};

use super::SpotifyClient;

impl SpotifyClient {
    /// Profile of the user the token belongs to.
    pub async fn current_user(&self) -> Result<User, SpotifyError> {
        self.send_json("/me", self.get("/me")).await
    }
}

use crate::{error::StorageError, info, types::Token};

use super::TokenStore;

/// Reads and writes the token through a [`TokenStore`].
pub struct TokenManager<S> {
    store: S,
}

impl<S: TokenStore> TokenManager<S> {
    pub fn new(store: S) -> Self {
        TokenManager { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Downloads and decodes the stored token.
    pub async fn load(&self) -> Result<Token, StorageError> {
        let blob = self.store.download().await?;
        decode(&blob)
    }

    /// Overwrites the stored token with `token`.
    pub async fn persist(&self, token: &Token) -> Result<(), StorageError> {
        let blob = encode(token)?;
        self.store.upload(blob).await
    }

    /// Persists `current` only when its access token differs from `original`.
    ///
    /// Returns whether an upload happened.
    pub async fn persist_if_refreshed(
        &self,
        original: &Token,
        current: &Token,
    ) -> Result<bool, StorageError> {
        if current.access_token == original.access_token {
            return Ok(false);
        }

        info!("got refreshed token, saving it");
        self.persist(current).await?;
        Ok(true)
    }
}

pub fn encode(token: &Token) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(token).map_err(StorageError::Encode)
}

pub fn decode(blob: &[u8]) -> Result<Token, StorageError> {
    serde_json::from_slice(blob).map_err(StorageError::Decode)
}

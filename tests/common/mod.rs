#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use discover_sync::{
    config::{REDIRECT_URI, SpotifyConfig, StorageConfig, SyncConfig},
    error::StorageError,
    management::{TokenStore, encode_token},
    types::Token,
};

/// Token store kept in memory that records every upload.
pub struct MemoryStore {
    blob: Mutex<Vec<u8>>,
    uploads: Mutex<Vec<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new(blob: Vec<u8>) -> Self {
        Self {
            blob: Mutex::new(blob),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token(token: &Token) -> Self {
        Self::new(encode_token(token).expect("encode token"))
    }

    pub fn uploads(&self) -> Vec<Vec<u8>> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn download(&self) -> Result<Vec<u8>, StorageError> {
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn upload(&self, blob: Vec<u8>) -> Result<(), StorageError> {
        *self.blob.lock().unwrap() = blob.clone();
        self.uploads.lock().unwrap().push(blob);
        Ok(())
    }
}

/// Token store whose download or upload always fails.
pub struct FailingStore {
    blob: Option<Vec<u8>>,
    uploads: Mutex<usize>,
}

impl FailingStore {
    /// Every download fails.
    pub fn unreadable() -> Self {
        Self {
            blob: None,
            uploads: Mutex::new(0),
        }
    }

    /// Downloads return `token`, every upload fails.
    pub fn read_only(token: &Token) -> Self {
        Self {
            blob: Some(encode_token(token).expect("encode token")),
            uploads: Mutex::new(0),
        }
    }

    pub fn upload_attempts(&self) -> usize {
        *self.uploads.lock().unwrap()
    }
}

#[async_trait]
impl TokenStore for FailingStore {
    async fn download(&self) -> Result<Vec<u8>, StorageError> {
        self.blob.clone().ok_or_else(|| StorageError::Download {
            bucket: "bucket".to_string(),
            key: "token.json".to_string(),
            message: "NoSuchKey".to_string(),
        })
    }

    async fn upload(&self, _blob: Vec<u8>) -> Result<(), StorageError> {
        *self.uploads.lock().unwrap() += 1;
        Err(StorageError::Upload {
            bucket: "bucket".to_string(),
            key: "token.json".to_string(),
            message: "AccessDenied".to_string(),
        })
    }
}

pub fn valid_token(access: &str) -> Token {
    Token {
        access_token: access.to_string(),
        token_type: "Bearer".to_string(),
        refresh_token: "refresh-1".to_string(),
        expiry: Some(Utc::now() + Duration::hours(1)),
    }
}

pub fn expired_token(access: &str) -> Token {
    Token {
        expiry: Some(Utc::now() - Duration::minutes(5)),
        ..valid_token(access)
    }
}

pub fn spotify_config(base_url: &str) -> SpotifyConfig {
    SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        api_url: base_url.to_string(),
        accounts_url: base_url.to_string(),
        redirect_uri: REDIRECT_URI.to_string(),
    }
}

pub fn sync_config(base_url: &str, target: &str) -> SyncConfig {
    SyncConfig {
        target_playlist: target.to_string(),
        storage: StorageConfig {
            bucket: "bucket".to_string(),
            key: "token.json".to_string(),
            region: "us-east-1".to_string(),
        },
        spotify: spotify_config(base_url),
    }
}

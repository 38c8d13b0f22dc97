use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{Client, config::Region, error::DisplayErrorContext, primitives::ByteStream};

use crate::{config::StorageConfig, error::StorageError};

/// Blob storage holding the serialized token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn download(&self) -> Result<Vec<u8>, StorageError>;

    async fn upload(&self, blob: Vec<u8>) -> Result<(), StorageError>;
}

/// Token object in an S3 bucket.
pub struct S3TokenStore {
    client: Client,
    bucket: String,
    key: String,
}

impl S3TokenStore {
    /// Builds a client for `config.region` using the default AWS credential
    /// chain (environment, profile, or the lambda execution role).
    pub async fn connect(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            key: config.key.clone(),
        }
    }

    fn download_error(&self, message: String) -> StorageError {
        StorageError::Download {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            message,
        }
    }
}

#[async_trait]
impl TokenStore for S3TokenStore {
    async fn download(&self) -> Result<Vec<u8>, StorageError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| self.download_error(DisplayErrorContext(&e).to_string()))?;

        let body = object
            .body
            .collect()
            .await
            .map_err(|e| self.download_error(e.to_string()))?;

        Ok(body.into_bytes().to_vec())
    }

    async fn upload(&self, blob: Vec<u8>) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .content_type("application/json")
            .body(ByteStream::from(blob))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                bucket: self.bucket.clone(),
                key: self.key.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}

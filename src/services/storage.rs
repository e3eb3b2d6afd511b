use crate::error::{BoxError, PipelineError, Result};
use crate::models::OperationMetadata;
use crate::services::events::{EventSink, PipelineEvent};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::operation::{RequestId, RequestIdExt};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use std::sync::Arc;

/// Object storage provider seam.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `body` as a single object and returns the provider's metadata.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> std::result::Result<OperationMetadata, BoxError>;
}

pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> std::result::Result<OperationMetadata, BoxError> {
        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await?;

        Ok(OperationMetadata {
            request_id: output.request_id().map(str::to_string),
            extended_request_id: output.extended_request_id().map(str::to_string),
            e_tag: output.e_tag().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
        })
    }
}

/// Uploads fetched files through an injected [`ObjectStore`].
pub struct ObjectWriter {
    store: Arc<dyn ObjectStore>,
    events: Arc<dyn EventSink>,
}

impl ObjectWriter {
    pub fn new(store: Arc<dyn ObjectStore>, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    /// One put of `bytes` under `key` in `bucket`. The provider metadata is
    /// returned unchanged.
    pub async fn write(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<OperationMetadata> {
        match self.store.put_object(bucket, key, bytes, content_type).await {
            Ok(metadata) => {
                self.events.emit(PipelineEvent::ObjectWritten {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                });
                Ok(metadata)
            }
            Err(source) => {
                self.events.emit(PipelineEvent::WriteFailed {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    reason: source.to_string(),
                });
                Err(PipelineError::Storage {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    source,
                })
            }
        }
    }

    /// [`ObjectWriter::write`] tagged as `text/csv`.
    pub async fn write_csv(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
    ) -> Result<OperationMetadata> {
        self.write(bucket, key, bytes, mime::TEXT_CSV.as_ref()).await
    }
}

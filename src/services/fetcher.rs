use crate::error::Result;
use crate::models::{FetchedFile, ResourceDescriptor};
use crate::services::events::{EventSink, PipelineEvent};
use crate::utils::validation::validate_descriptor;
use std::sync::Arc;
use std::time::Duration;

/// Downloads one catalog resource into memory.
pub struct FileFetcher {
    http: reqwest::Client,
    events: Arc<dyn EventSink>,
}

impl FileFetcher {
    pub fn new(http: reqwest::Client, events: Arc<dyn EventSink>) -> Self {
        Self { http, events }
    }

    /// Fetches `descriptor.url` and returns the whole body under the descriptor's name.
    ///
    /// An empty descriptor fails with a validation error before any request is sent.
    pub async fn fetch(
        &self,
        descriptor: ResourceDescriptor,
        timeout: Duration,
    ) -> Result<FetchedFile> {
        let url = validate_descriptor(&descriptor)?;

        match self.download(url, timeout).await {
            Ok(bytes) => {
                self.events.emit(PipelineEvent::FileFetched {
                    name: descriptor.name.clone(),
                    size: bytes.len(),
                });
                Ok(FetchedFile {
                    name: descriptor.name,
                    bytes,
                })
            }
            Err(e) => {
                self.events.emit(PipelineEvent::FetchFailed {
                    name: descriptor.name,
                    url: descriptor.url,
                    reason: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    async fn download(
        &self,
        url: url::Url,
        timeout: Duration,
    ) -> std::result::Result<bytes::Bytes, reqwest::Error> {
        self.http
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await
    }
}

use crate::config::{PipelineConfig, StorageTier};
use crate::error::Result;
use crate::models::UploadedObject;
use crate::services::catalog::MetadataResolver;
use crate::services::events::EventSink;
use crate::services::fetcher::FileFetcher;
use crate::services::storage::{ObjectStore, ObjectWriter};
use std::sync::Arc;

/// Copies every CSV resource of the configured dataset into the raw tier.
pub struct Pipeline {
    config: PipelineConfig,
    resolver: MetadataResolver,
    fetcher: FileFetcher,
    writer: ObjectWriter,
}

impl Pipeline {
    pub fn new(
        config: PipelineConfig,
        http: reqwest::Client,
        store: Arc<dyn ObjectStore>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            resolver: MetadataResolver::new(http.clone(), events.clone()),
            fetcher: FileFetcher::new(http, events.clone()),
            writer: ObjectWriter::new(store, events),
        }
    }

    /// Resolves the catalog once, then fetches and writes each file in order.
    ///
    /// The first error aborts the run. Objects written before it stay in the
    /// bucket; later resources are not fetched.
    pub async fn run(&self) -> Result<Vec<UploadedObject>> {
        let config = &self.config;
        let descriptors = self
            .resolver
            .resolve(&config.api_url, &config.dataset_id, config.request_timeout)
            .await?;

        let mut uploaded = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let file = self.fetcher.fetch(descriptor, config.request_timeout).await?;
            let key = config.object_key(StorageTier::Raw, &file.name);
            let metadata = self
                .writer
                .write_csv(&config.bucket, &key, file.bytes)
                .await?;
            uploaded.push(UploadedObject { key, metadata });
        }

        Ok(uploaded)
    }
}

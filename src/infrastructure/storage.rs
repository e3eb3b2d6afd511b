use crate::config::PipelineConfig;
use crate::services::storage::S3ObjectStore;
use aws_config::BehaviorVersion;
use std::sync::Arc;
use tracing::info;

/// Builds the S3 client from the ambient AWS configuration (environment,
/// profile, instance metadata). A configured endpoint switches to path-style
/// addressing for MinIO and other S3-compatible stores.
pub async fn setup_storage(config: &PipelineConfig) -> Arc<S3ObjectStore> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(endpoint_url) = &config.s3_endpoint {
        info!("☁️  S3 Storage: {} (Bucket: {})", endpoint_url, config.bucket);
        loader = loader.endpoint_url(endpoint_url);
    } else {
        info!("☁️  S3 Storage: AWS default endpoint (Bucket: {})", config.bucket);
    }
    let aws_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.s3_endpoint.is_some())
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    Arc::new(S3ObjectStore::new(s3_client))
}

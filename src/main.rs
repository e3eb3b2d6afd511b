use clap::Parser;
use dotenvy::dotenv;
use oklahoma_gl_pipeline::infrastructure::{http, storage};
use oklahoma_gl_pipeline::{Pipeline, PipelineConfig, TracingEventSink};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Destination S3 bucket (overrides GL_S3_BUCKET)
    #[arg(long)]
    bucket: Option<String>,

    /// Catalog dataset identifier (overrides GL_DATASET_ID)
    #[arg(long)]
    dataset_id: Option<String>,

    /// Key prefix for raw files (overrides GL_S3_RAW_DIR)
    #[arg(long)]
    raw_prefix: Option<String>,

    /// Per-request timeout in seconds (overrides GL_REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oklahoma_gl_pipeline=info,pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = PipelineConfig::from_env();
    if let Some(bucket) = args.bucket {
        config.bucket = bucket;
    }
    if let Some(dataset_id) = args.dataset_id {
        config.dataset_id = dataset_id;
    }
    if let Some(raw_prefix) = args.raw_prefix {
        config.raw_prefix = raw_prefix;
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }

    info!(
        "🚀 Starting GL ingest: dataset={} bucket={} prefix={}",
        config.dataset_id, config.bucket, config.raw_prefix
    );

    let http_client = http::setup_http_client()?;
    let store = storage::setup_storage(&config).await;
    let pipeline = Pipeline::new(config, http_client, store, Arc::new(TracingEventSink));

    let uploaded = pipeline.run().await?;

    info!("✅ Pipeline finished: {} object(s) written", uploaded.len());
    Ok(())
}

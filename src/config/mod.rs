use std::env;
use std::time::Duration;

/// Catalog endpoint of the Oklahoma open-data portal (CKAN `package_show`).
pub const DEFAULT_API_URL: &str = "https://data.ok.gov/api/3/action/package_show";

/// CKAN package id of the General Ledger dataset.
pub const DEFAULT_DATASET_ID: &str = "general-ledger";

pub const DEFAULT_BUCKET: &str = "oklahoma-gl-test";

/// Storage tier an object key belongs to.
///
/// Only [`StorageTier::Raw`] is written by the pipeline; the silver and gold
/// prefixes are kept in configuration for later stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    /// Unmodified, as-fetched files
    Raw,
    /// Cleaned files
    Silver,
    /// Curated files
    Gold,
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Catalog API endpoint queried for the dataset's resources
    pub api_url: String,

    /// Dataset identifier sent as the `id` query parameter (default: "general-ledger")
    pub dataset_id: String,

    /// Destination S3 bucket (default: "oklahoma-gl-test")
    pub bucket: String,

    /// Key prefix for raw files (default: "raw")
    pub raw_prefix: String,

    /// Key prefix for the silver tier (default: "silver")
    pub silver_prefix: String,

    /// Key prefix for the gold tier (default: "gold")
    pub gold_prefix: String,

    /// Timeout applied to every HTTP request on its own (default: 60s)
    pub request_timeout: Duration,

    /// Custom S3 endpoint, e.g. MinIO. `None` uses the AWS default resolution.
    pub s3_endpoint: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            raw_prefix: "raw".to_string(),
            silver_prefix: "silver".to_string(),
            gold_prefix: "gold".to_string(),
            request_timeout: Duration::from_secs(60),
            s3_endpoint: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            api_url: env::var("GL_API_URL").unwrap_or(default.api_url),

            dataset_id: env::var("GL_DATASET_ID").unwrap_or(default.dataset_id),

            bucket: env::var("GL_S3_BUCKET").unwrap_or(default.bucket),

            raw_prefix: env::var("GL_S3_RAW_DIR").unwrap_or(default.raw_prefix),

            silver_prefix: env::var("GL_S3_SILVER_DIR").unwrap_or(default.silver_prefix),

            gold_prefix: env::var("GL_S3_GOLD_DIR").unwrap_or(default.gold_prefix),

            request_timeout: env::var("GL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.request_timeout),

            s3_endpoint: env::var("GL_S3_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn prefix(&self, tier: StorageTier) -> &str {
        match tier {
            StorageTier::Raw => &self.raw_prefix,
            StorageTier::Silver => &self.silver_prefix,
            StorageTier::Gold => &self.gold_prefix,
        }
    }

    /// Builds `<tier-prefix>/<file_name>`. The file name is used verbatim.
    pub fn object_key(&self, tier: StorageTier, file_name: &str) -> String {
        format!("{}/{}", self.prefix(tier), file_name)
    }
}

use thiserror::Error;

/// Boxed provider error carried by [`PipelineError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed caller input, rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Catalog response without the expected `result.resources` structure
    #[error("Schema error: {0}")]
    Schema(String),

    /// The object store rejected a write
    #[error("Failed to upload s3://{bucket}/{key}: {source}")]
    Storage {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },
}

impl PipelineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PipelineError::Validation(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, PipelineError::Network(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, PipelineError::Schema(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, PipelineError::Storage { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

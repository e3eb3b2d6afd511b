pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::config::{PipelineConfig, StorageTier};
pub use crate::error::{PipelineError, Result};
pub use crate::models::{FetchedFile, OperationMetadata, ResourceDescriptor, UploadedObject};
pub use crate::services::events::{EventSink, MemoryEventSink, PipelineEvent, TracingEventSink};
pub use crate::services::pipeline::Pipeline;
pub use crate::services::storage::{ObjectStore, ObjectWriter, S3ObjectStore};

use std::fmt;
use std::sync::Mutex;
use tracing::{error, info};

/// Diagnostic emitted by a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    ResourcesResolved { count: usize },
    ResolveFailed { api_url: String, reason: String },
    FileFetched { name: String, size: usize },
    FetchFailed { name: String, url: String, reason: String },
    ObjectWritten { bucket: String, key: String },
    WriteFailed { bucket: String, key: String, reason: String },
}

impl PipelineEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            PipelineEvent::ResolveFailed { .. }
                | PipelineEvent::FetchFailed { .. }
                | PipelineEvent::WriteFailed { .. }
        )
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineEvent::ResourcesResolved { count } => {
                write!(f, "Successfully fetched {} file(s) from API", count)
            }
            PipelineEvent::ResolveFailed { api_url, reason } => {
                write!(f, "Failed to fetch file names and urls from {}: {}", api_url, reason)
            }
            PipelineEvent::FileFetched { name, .. } => {
                write!(f, "Successfully fetched file '{}'", name)
            }
            PipelineEvent::FetchFailed { name, url, reason } => {
                write!(f, "Failed to fetch file '{}' from URL: {}. Error: {}", name, url, reason)
            }
            PipelineEvent::ObjectWritten { bucket, key } => {
                write!(f, "Successfully uploaded {} to bucket {}", key, bucket)
            }
            PipelineEvent::WriteFailed { bucket, key, reason } => {
                write!(f, "Failed to upload {} to bucket {}: {}", key, bucket, reason)
            }
        }
    }
}

/// Receives the events emitted by the resolver, fetcher and writer.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Forwards events to `tracing` under the `pipeline` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: PipelineEvent) {
        match &event {
            PipelineEvent::ResourcesResolved { count } => {
                info!(target: "pipeline", count = *count, "{}", event);
            }
            PipelineEvent::FileFetched { name, size } => {
                info!(target: "pipeline", file = %name, bytes = *size, "{}", event);
            }
            PipelineEvent::ObjectWritten { bucket, key } => {
                info!(target: "pipeline", bucket = %bucket, key = %key, "{}", event);
            }
            PipelineEvent::ResolveFailed { api_url, .. } => {
                error!(target: "pipeline", api_url = %api_url, "{}", event);
            }
            PipelineEvent::FetchFailed { name, url, .. } => {
                error!(target: "pipeline", file = %name, url = %url, "{}", event);
            }
            PipelineEvent::WriteFailed { bucket, key, .. } => {
                error!(target: "pipeline", bucket = %bucket, key = %key, "{}", event);
            }
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: PipelineEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

use crate::error::{PipelineError, Result};
use crate::models::{ResourceDescriptor, is_csv_url};
use crate::services::events::{EventSink, PipelineEvent};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Queries the CKAN catalog for the CSV resources of one dataset.
pub struct MetadataResolver {
    http: reqwest::Client,
    events: Arc<dyn EventSink>,
}

impl MetadataResolver {
    pub fn new(http: reqwest::Client, events: Arc<dyn EventSink>) -> Self {
        Self { http, events }
    }

    /// Sends `GET {api_url}?id={dataset_id}` and returns the resources whose
    /// URL ends in `.csv`, in the order the catalog lists them.
    pub async fn resolve(
        &self,
        api_url: &str,
        dataset_id: &str,
        timeout: Duration,
    ) -> Result<Vec<ResourceDescriptor>> {
        let result = self.query(api_url, dataset_id, timeout).await;

        match &result {
            Ok(resources) => self.events.emit(PipelineEvent::ResourcesResolved {
                count: resources.len(),
            }),
            Err(e) => self.events.emit(PipelineEvent::ResolveFailed {
                api_url: api_url.to_string(),
                reason: e.to_string(),
            }),
        }

        result
    }

    async fn query(
        &self,
        api_url: &str,
        dataset_id: &str,
        timeout: Duration,
    ) -> Result<Vec<ResourceDescriptor>> {
        let response = self
            .http
            .get(api_url)
            .query(&[("id", dataset_id)])
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let data: Value = serde_json::from_slice(&body)
            .map_err(|e| PipelineError::Schema(format!("API response is not valid JSON: {}", e)))?;

        extract_csv_resources(&data)
    }
}

/// Pulls the CSV descriptors out of a catalog response body.
///
/// The `result.resources` shape is checked before any entry is read.
pub fn extract_csv_resources(data: &Value) -> Result<Vec<ResourceDescriptor>> {
    let resources = data
        .as_object()
        .and_then(|root| root.get("result"))
        .and_then(Value::as_object)
        .and_then(|result| result.get("resources"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            PipelineError::Schema(
                "API response does not contain 'result' or 'resources'".to_string(),
            )
        })?;

    let mut descriptors = Vec::new();
    for (index, entry) in resources.iter().enumerate() {
        let url = string_field(entry, "url", index)?;
        if !is_csv_url(url) {
            continue;
        }
        let name = string_field(entry, "name", index)?;
        descriptors.push(ResourceDescriptor::new(name, url));
    }

    Ok(descriptors)
}

fn string_field<'a>(entry: &'a Value, field: &str, index: usize) -> Result<&'a str> {
    entry.get(field).and_then(Value::as_str).ok_or_else(|| {
        PipelineError::Schema(format!("resource #{} has no string '{}' field", index, field))
    })
}

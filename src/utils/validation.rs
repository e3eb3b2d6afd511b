use crate::error::{PipelineError, Result};
use crate::models::ResourceDescriptor;
use url::Url;

/// Checks a descriptor before it is fetched and returns its parsed URL.
///
/// Rejects an empty URL and URLs that are not http(s). The name is not
/// checked; it is used verbatim in the object key.
pub fn validate_descriptor(descriptor: &ResourceDescriptor) -> Result<Url> {
    if descriptor.url.trim().is_empty() {
        return Err(PipelineError::Validation(format!(
            "descriptor '{}' must have a non-empty URL",
            descriptor.name
        )));
    }

    let url = Url::parse(descriptor.url.trim()).map_err(|e| {
        PipelineError::Validation(format!("invalid URL '{}': {}", descriptor.url, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PipelineError::Validation(format!(
            "unsupported URL scheme '{}' for '{}'",
            other, descriptor.name
        ))),
    }
}

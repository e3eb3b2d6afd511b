use bytes::Bytes;

/// One downloadable file listed by the catalog: its display name and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub name: String,
    pub url: String,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// True when `url` ends in `.csv`, ignoring case.
pub fn is_csv_url(url: &str) -> bool {
    url.to_lowercase().ends_with(".csv")
}

/// Body of a fetched file, kept as an opaque blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Operation metadata reported by the object store for a successful put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    pub request_id: Option<String>,
    /// S3 host id (`x-amz-id-2`)
    pub extended_request_id: Option<String>,
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
}

/// One completed fetch+write cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub key: String,
    pub metadata: OperationMetadata,
}

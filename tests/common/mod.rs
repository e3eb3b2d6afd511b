#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use oklahoma_gl_pipeline::error::BoxError;
use oklahoma_gl_pipeline::{ObjectStore, OperationMetadata};
use serde_json::{Value, json};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
}

/// In-memory object store recording every put, optionally failing on one key.
#[derive(Default)]
pub struct MockObjectStore {
    pub calls: Mutex<Vec<PutCall>>,
    pub fail_on_key: Option<String>,
}

impl MockObjectStore {
    pub fn failing_on(key: &str) -> Self {
        Self {
            fail_on_key: Some(key.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<PutCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<OperationMetadata, BoxError> {
        self.calls.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });

        if self.fail_on_key.as_deref() == Some(key) {
            return Err("AccessDenied: bucket policy rejects the write".into());
        }

        Ok(mock_metadata(key))
    }
}

pub fn mock_metadata(key: &str) -> OperationMetadata {
    OperationMetadata {
        request_id: Some(format!("req-{}", key)),
        extended_request_id: Some("host-id".to_string()),
        e_tag: Some("\"d41d8cd98f00b204e9800998ecf8427e\"".to_string()),
        version_id: None,
    }
}

/// CKAN `package_show` body listing the given `(name, url)` resources.
pub fn catalog_body(resources: &[(&str, &str)]) -> Value {
    let resources: Vec<Value> = resources
        .iter()
        .map(|(name, url)| json!({"name": name, "url": url, "format": "CSV"}))
        .collect();
    json!({
        "help": "package_show",
        "success": true,
        "result": {
            "id": "general-ledger",
            "resources": resources
        }
    })
}

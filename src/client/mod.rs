//! Split Admin API client

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod pagination;
pub mod split;

#[cfg(test)]
pub use mock::MockSplitClient;
pub use pagination::{PageParams, list_names};
pub use split::SplitClient;

/// HTTP adapter for the Split Admin API.
///
/// Implementations return `Ok` for every HTTP status so callers can decide
/// what a 404 or 409 means for them. Only transport failures are errors.
#[async_trait]
pub trait SplitApi: Send + Sync {
    /// GET one page of a collection
    async fn get(&self, path: &ResourcePath, page: PageParams) -> Result<ApiResponse>;

    /// DELETE a single item
    async fn delete(&self, path: &ResourcePath) -> Result<ApiResponse>;
}

/// Admin API key.
///
/// Never printed: `Debug` and `Display` both redact the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Path below the API base, kept as raw segments so the client can encode them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// `/{endpoint}/ws/{workspace_id}`
    pub fn collection(endpoint: &str, workspace_id: &str) -> Self {
        Self {
            segments: vec![endpoint.to_string(), "ws".to_string(), workspace_id.to_string()],
        }
    }

    /// `/{endpoint}/ws/{workspace_id}/{name}`
    pub fn item(endpoint: &str, workspace_id: &str, name: &str) -> Self {
        let mut path = Self::collection(endpoint, workspace_id);
        path.segments.push(name.to_string());
        path
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Status and raw body of an Admin API response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// DELETE succeeded (200 or 204)
    pub fn is_deleted(&self) -> bool {
        self.status == StatusCode::OK || self.status == StatusCode::NO_CONTENT
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Best-effort error text: the JSON `message` field, else the raw body,
    /// else the canonical reason phrase.
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.body) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }

        let body = self.body.trim();
        if !body.is_empty() {
            return body.to_string();
        }

        self.status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string()
    }
}

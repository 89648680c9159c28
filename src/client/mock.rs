//! Mock Split Admin API client for testing
//!
//! Responses are scripted per request and consumed in order. Requests with
//! nothing scripted get a default: an empty page for GET, 404 for DELETE.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Mutex;

use super::pagination::{PAGE_SIZE, PageParams};
use super::{ApiResponse, ResourcePath, SplitApi};
use crate::error::{ApiError, Result};

type Scripted = std::result::Result<ApiResponse, ApiError>;

/// A request seen by the mock, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Get { path: String, offset: usize },
    Delete { path: String },
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockSplitClient::new()
///     .with_pages("/splits/ws/ws-1", vec![names("flag", 3)])
///     .await
///     .with_delete_status("/splits/ws/ws-1/flag0", StatusCode::NO_CONTENT)
///     .await;
/// ```
#[derive(Default)]
pub struct MockSplitClient {
    gets: Arc<Mutex<HashMap<(String, usize), VecDeque<Scripted>>>>,
    deletes: Arc<Mutex<HashMap<String, VecDeque<Scripted>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// `count` item names made from `prefix` and an index.
pub fn names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

fn page_body(names: &[String]) -> String {
    let objects: Vec<serde_json::Value> = names
        .iter()
        .map(|name| serde_json::json!({ "name": name, "id": format!("id-{}", name) }))
        .collect();
    serde_json::json!({ "objects": objects, "offset": 0, "limit": PAGE_SIZE }).to_string()
}

impl MockSplitClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script consecutive pages for a collection, starting at offset zero.
    pub async fn with_pages(self, path: &str, pages: Vec<Vec<String>>) -> Self {
        {
            let mut gets = self.gets.lock().await;
            for (index, page) in pages.iter().enumerate() {
                gets.entry((path.to_string(), index * PAGE_SIZE))
                    .or_default()
                    .push_back(Ok(ApiResponse::new(StatusCode::OK, page_body(page))));
            }
        }
        self
    }

    /// Script a raw status and body for one page request.
    pub async fn with_get_status(
        self,
        path: &str,
        offset: usize,
        status: StatusCode,
        body: &str,
    ) -> Self {
        self.gets
            .lock()
            .await
            .entry((path.to_string(), offset))
            .or_default()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Script a transport failure for one page request.
    pub async fn with_get_error(self, path: &str, offset: usize, error: ApiError) -> Self {
        self.gets
            .lock()
            .await
            .entry((path.to_string(), offset))
            .or_default()
            .push_back(Err(error));
        self
    }

    /// Script the status of the next DELETE on `path`.
    pub async fn with_delete_status(self, path: &str, status: StatusCode) -> Self {
        self.with_delete_response(path, status, "").await
    }

    /// Script status and body of the next DELETE on `path`.
    pub async fn with_delete_response(self, path: &str, status: StatusCode, body: &str) -> Self {
        self.deletes
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Script a transport failure for the next DELETE on `path`.
    pub async fn with_delete_error(self, path: &str, error: ApiError) -> Self {
        self.deletes
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push_back(Err(error));
        self
    }

    /// Every request made so far.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// Offsets requested for a collection, in order.
    pub async fn get_offsets(&self, path: &str) -> Vec<usize> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Get { path: p, offset } if p == path => Some(*offset),
                _ => None,
            })
            .collect()
    }

    /// Paths of all DELETE requests, in order.
    pub async fn delete_paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Delete { path } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SplitApi for MockSplitClient {
    async fn get(&self, path: &ResourcePath, page: PageParams) -> Result<ApiResponse> {
        let path = path.to_string();
        self.calls.lock().await.push(RecordedCall::Get {
            path: path.clone(),
            offset: page.offset,
        });

        let scripted = self
            .gets
            .lock()
            .await
            .get_mut(&(path, page.offset))
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(response) => Ok(response?),
            None => Ok(ApiResponse::new(StatusCode::OK, page_body(&[]))),
        }
    }

    async fn delete(&self, path: &ResourcePath) -> Result<ApiResponse> {
        let path = path.to_string();
        self.calls
            .lock()
            .await
            .push(RecordedCall::Delete { path: path.clone() });

        let scripted = self
            .deletes
            .lock()
            .await
            .get_mut(&path)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(response) => Ok(response?),
            None => Ok(ApiResponse::new(StatusCode::NOT_FOUND, r#"{"message": "Not found"}"#)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults() {
        let mock = MockSplitClient::new();
        let path = ResourcePath::collection("splits", "ws-1");

        let resp = mock.get(&path, PageParams::first()).await.unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert!(resp.body.contains("\"objects\":[]"));

        let resp = mock
            .delete(&ResourcePath::item("splits", "ws-1", "missing"))
            .await
            .unwrap();
        assert!(resp.is_not_found());
    }

    #[tokio::test]
    async fn test_mock_scripted_responses_are_consumed_in_order() {
        let path = "/segments/ws/ws-1/seg";
        let mock = MockSplitClient::new()
            .with_delete_error(path, ApiError::Network("reset".to_string()))
            .await
            .with_delete_status(path, StatusCode::NO_CONTENT)
            .await;

        let item = ResourcePath::item("segments", "ws-1", "seg");
        assert!(mock.delete(&item).await.is_err());
        assert!(mock.delete(&item).await.unwrap().is_deleted());
        assert!(mock.delete(&item).await.unwrap().is_not_found());

        assert_eq!(mock.delete_paths().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockSplitClient::new();
        let path = ResourcePath::collection("environments", "ws-1");

        mock.get(&path, PageParams::first().next()).await.unwrap();

        assert_eq!(
            mock.calls().await,
            vec![RecordedCall::Get {
                path: "/environments/ws/ws-1".to_string(),
                offset: 50
            }]
        );
    }
}

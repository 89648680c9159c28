//! Split Admin API client implementation

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, trace};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method, Url};

use super::pagination::PageParams;
use super::{ApiKey, ApiResponse, ResourcePath, SplitApi};
use crate::error::{ApiError, ConfigError, Result};

/// Split Admin API host
pub const API_HOST: &str = "https://api.split.io";

/// Admin API base path, appended to the host
const API_BASE_PATH: &str = "/internal/api/v2";

/// Client-side pacing for a single Admin API key
const MAX_REQUESTS_PER_SECOND: u32 = 10;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Split Admin API client
pub struct SplitClient {
    http: HttpClient,
    base_url: Url,
    authorization: HeaderValue,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl SplitClient {
    /// Create a client for the given key.
    ///
    /// `api_host` replaces the default host (scheme and authority only);
    /// the Admin API base path is always appended.
    pub fn new(api_key: &ApiKey, api_host: Option<&str>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let host = api_host.unwrap_or(API_HOST).trim_end_matches('/');
        let base_url = Url::parse(&format!("{}{}", host, API_BASE_PATH))
            .map_err(|e| ConfigError::Invalid(format!("API host '{}': {}", host, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("API host '{}' is not an HTTP URL", host)).into());
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
            .map_err(|_| {
                ConfigError::Invalid("API key contains characters not valid in a header".to_string())
            })?;
        authorization.set_sensitive(true);

        let quota = Quota::per_second(
            NonZeroU32::new(MAX_REQUESTS_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        Ok(Self {
            http,
            base_url,
            authorization,
            rate_limiter: RateLimiter::direct(quota),
        })
    }

    /// Full URL for a path, with every segment percent-encoded
    fn url(&self, path: &ResourcePath) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.segments());
        }
        url
    }

    fn headers(&self, method: &Method) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if method == Method::DELETE {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        headers
    }

    async fn send(
        &self,
        method: Method,
        path: &ResourcePath,
        page: Option<PageParams>,
    ) -> Result<ApiResponse> {
        self.rate_limiter.until_ready().await;

        let mut url = self.url(path);
        if let Some(page) = page {
            url.query_pairs_mut().extend_pairs(page.to_query_params());
        }
        let headers = self.headers(&method);

        debug!("{} {}", method, url);
        trace!("Headers: {:?}", redacted(&headers));

        let response = self
            .http
            .request(method, url)
            .headers(headers)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        debug!("Response status: {}", status.as_u16());
        debug!("Response body: {}", body);

        Ok(ApiResponse::new(status, body))
    }
}

/// Header pairs safe to log: the bearer token is replaced.
fn redacted(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION {
                "Bearer [REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("<non-ascii>").to_string()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}

#[async_trait]
impl SplitApi for SplitClient {
    async fn get(&self, path: &ResourcePath, page: PageParams) -> Result<ApiResponse> {
        self.send(Method::GET, path, Some(page)).await
    }

    async fn delete(&self, path: &ResourcePath) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, None).await
    }
}

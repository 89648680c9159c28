//! Offset pagination for Admin API collections
//!
//! Collections are read with `limit`/`offset` query parameters. The API does
//! not report a total, so a page that is not exactly `limit` long is treated
//! as the last one.

use colored::Colorize;
use futures::stream::{self, Stream, StreamExt};
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{ResourcePath, SplitApi};
use crate::error::{ApiError, Error, Result};

/// Items requested per page
pub const PAGE_SIZE: usize = 50;

/// Pagination parameters for one list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Number of items per page
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageParams {
    /// The first page at the default page size.
    pub fn first() -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: 0,
        }
    }

    /// The page following this one.
    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }

    /// Whether a page holding `len` items ends the collection.
    pub fn is_last_page(&self, len: usize) -> bool {
        len != self.limit
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// Body of a list response. Only `name` is read from each object.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub objects: Vec<NamedObject>,
}

#[derive(Debug, Deserialize)]
pub struct NamedObject {
    pub name: String,
}

async fn fetch_page<A: SplitApi + ?Sized>(
    api: &A,
    path: &ResourcePath,
    page: PageParams,
) -> Result<Vec<String>> {
    let response = api.get(path, page).await?;

    if response.status != StatusCode::OK {
        return Err(ApiError::Status {
            status: response.status.as_u16(),
            message: response.error_message(),
        }
        .into());
    }

    let list: ListResponse = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    Ok(list.objects.into_iter().map(|object| object.name).collect())
}

fn list_failure_message(label: &str, err: &Error) -> String {
    match err {
        Error::Api(ApiError::Status { .. }) => format!("Failed to list {}: {}", label, err),
        _ => format!("Error listing {}: {}", label, err),
    }
}

/// Stream every item name under `/{endpoint}/ws/{workspace_id}`.
///
/// Pages are fetched lazily in API order. A failed request ends the stream
/// early after printing why, naming the collection by `label`; whatever was
/// already yielded stands. Each call starts again from offset zero.
pub fn list_names<'a, A: SplitApi + ?Sized>(
    api: &'a A,
    workspace_id: &str,
    endpoint: &'a str,
    label: &'a str,
) -> impl Stream<Item = String> + 'a {
    let path = ResourcePath::collection(endpoint, workspace_id);

    stream::unfold(Some(PageParams::first()), move |cursor| {
        let path = path.clone();
        async move {
            let Some(page) = cursor else {
                return None;
            };
            match fetch_page(api, &path, page).await {
                Ok(names) => {
                    debug!(
                        "Fetched {} {} at offset {}",
                        names.len(),
                        endpoint,
                        page.offset
                    );
                    let next = if page.is_last_page(names.len()) {
                        None
                    } else {
                        Some(page.next())
                    };
                    Some((names, next))
                }
                Err(err) => {
                    eprintln!("{} {}", "✗".red(), list_failure_message(label, &err));
                    None
                }
            }
        }
    })
    .flat_map(stream::iter)
}

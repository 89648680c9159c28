//! Deletable resource types
//!
//! The set is closed: feature flags and environments live under one endpoint
//! each, segments are spread across three.

use std::fmt;

use clap::ValueEnum;

use crate::client::SplitApi;

mod segment;
mod simple;

pub use segment::SegmentKind;

use simple::SimpleResource;

/// Resource type selected with `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceType {
    /// Feature flags (splits)
    Flag,
    /// Segments of every kind
    Segment,
    /// Environments
    Environment,
}

/// An item found in a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    pub name: String,
    /// Endpoint the segment was listed under; `None` for other types
    pub segment_kind: Option<SegmentKind>,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            segment_kind: None,
        }
    }

    pub fn segment(name: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            name: name.into(),
            segment_kind: Some(kind),
        }
    }
}

impl fmt::Display for NamedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.segment_kind {
            Some(kind) => write!(f, "{} ({})", self.name, kind),
            None => f.write_str(&self.name),
        }
    }
}

/// Result of one delete request (or one segment fallback run)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

const FLAGS: SimpleResource = SimpleResource {
    endpoint: "splits",
    kind: "flag",
    plural: "flags",
    title: "Feature flag",
};

const ENVIRONMENTS: SimpleResource = SimpleResource {
    endpoint: "environments",
    kind: "environment",
    plural: "environments",
    title: "Environment",
};

impl ResourceType {
    /// Singular name used in prompts, e.g. "flag"
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceType::Flag => "flag",
            ResourceType::Segment => "segment",
            ResourceType::Environment => "environment",
        }
    }

    /// Plural name used in summaries, e.g. "flags"
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceType::Flag => "flags",
            ResourceType::Segment => "segments",
            ResourceType::Environment => "environments",
        }
    }

    /// List every item of this type in the workspace, in API order.
    ///
    /// Listing failures are reported on the console and yield a partial
    /// (possibly empty) list.
    pub async fn list<A: SplitApi + ?Sized>(&self, api: &A, workspace_id: &str) -> Vec<NamedItem> {
        match self {
            ResourceType::Flag => FLAGS.list(api, workspace_id).await,
            ResourceType::Environment => ENVIRONMENTS.list(api, workspace_id).await,
            ResourceType::Segment => segment::list(api, workspace_id).await,
        }
    }

    /// Delete one item, reporting the result on the console.
    ///
    /// For segments, an item without a known kind is tried against every
    /// segment endpoint in turn.
    pub async fn delete<A: SplitApi + ?Sized>(
        &self,
        api: &A,
        workspace_id: &str,
        item: &NamedItem,
    ) -> DeleteOutcome {
        match self {
            ResourceType::Flag => FLAGS.delete(api, workspace_id, &item.name).await,
            ResourceType::Environment => ENVIRONMENTS.delete(api, workspace_id, &item.name).await,
            ResourceType::Segment => {
                segment::delete(api, workspace_id, &item.name, item.segment_kind).await
            }
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

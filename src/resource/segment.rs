//! Segments, spread across three endpoints
//!
//! Standard, large and rule-based segments each have their own path family.
//! Listing merges all three; deleting by bare name probes them in a fixed
//! order until one accepts the delete.

use std::collections::HashSet;
use std::fmt;

use colored::Colorize;
use futures::StreamExt;
use log::debug;

use super::{DeleteOutcome, NamedItem};
use crate::client::{ResourcePath, SplitApi, list_names};

/// Segment sub-type, one per endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Standard,
    Large,
    RuleBased,
}

impl SegmentKind {
    /// Listing and fallback order
    pub const ALL: [SegmentKind; 3] = [
        SegmentKind::Standard,
        SegmentKind::Large,
        SegmentKind::RuleBased,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            SegmentKind::Standard => "segments",
            SegmentKind::Large => "large-segments",
            SegmentKind::RuleBased => "rule-based-segments",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Drop later items whose name was already seen. Order is preserved.
fn dedup_by_name(items: Vec<NamedItem>) -> Vec<NamedItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.name.clone()))
        .collect()
}

/// List segments of every kind, tagged with the endpoint they came from.
///
/// A name listed under more than one endpoint keeps only its first
/// occurrence in [`SegmentKind::ALL`] order.
pub(crate) async fn list<A: SplitApi + ?Sized>(api: &A, workspace_id: &str) -> Vec<NamedItem> {
    let mut all = Vec::new();

    for kind in SegmentKind::ALL {
        let items: Vec<NamedItem> = list_names(api, workspace_id, kind.endpoint(), kind.endpoint())
            .map(|name| NamedItem::segment(name, kind))
            .collect()
            .await;
        debug!("Listed {} {}", items.len(), kind);
        all.extend(items);
    }

    let merged = dedup_by_name(all);
    debug!("{} segments after merging endpoints", merged.len());
    merged
}

/// Delete a segment.
///
/// With a known kind only that endpoint is called. Without one, endpoints are
/// tried in [`SegmentKind::ALL`] order: the first 200/204 wins, a 404 moves on
/// silently, any other failure is reported and also moves on.
pub(crate) async fn delete<A: SplitApi + ?Sized>(
    api: &A,
    workspace_id: &str,
    name: &str,
    kind: Option<SegmentKind>,
) -> DeleteOutcome {
    let candidates: Vec<SegmentKind> = match kind {
        Some(kind) => vec![kind],
        None => SegmentKind::ALL.to_vec(),
    };
    let mut failed = false;

    for candidate in candidates {
        let endpoint = candidate.endpoint();
        debug!(
            "{} {} for segment '{}'",
            if kind.is_some() { "Deleting from" } else { "Trying" },
            endpoint,
            name
        );

        match api.delete(&ResourcePath::item(endpoint, workspace_id, name)).await {
            Ok(resp) if resp.is_deleted() => {
                println!(
                    "{} Segment '{}' deleted successfully ({}).",
                    "✓".green(),
                    name,
                    endpoint
                );
                return DeleteOutcome::Deleted;
            }
            Ok(resp) if resp.is_not_found() => {}
            Ok(resp) => {
                failed = true;
                eprintln!(
                    "{} Failed to delete segment from {}: {} - {}",
                    "✗".red(),
                    endpoint,
                    resp.status.as_u16(),
                    resp.error_message()
                );
            }
            Err(err) => {
                failed = true;
                eprintln!(
                    "{} Error deleting segment from {}: {}",
                    "✗".red(),
                    endpoint,
                    err
                );
            }
        }
    }

    match kind {
        Some(kind) => eprintln!("Segment '{}' not found in {}.", name, kind),
        None => eprintln!("Segment '{}' not found in any segment type.", name),
    }

    if failed {
        DeleteOutcome::Failed
    } else {
        DeleteOutcome::NotFound
    }
}

//! Resources that live under a single endpoint

use colored::Colorize;
use futures::StreamExt;

use super::{DeleteOutcome, NamedItem};
use crate::client::{ResourcePath, SplitApi, list_names};

/// A resource type backed by one endpoint (flags, environments)
pub(crate) struct SimpleResource {
    /// Path family under the API base, e.g. `splits`
    pub endpoint: &'static str,
    /// Lower-case name for failure messages
    pub kind: &'static str,
    /// Plural name for listing failures
    pub plural: &'static str,
    /// Capitalised name for per-item messages
    pub title: &'static str,
}

impl SimpleResource {
    pub async fn list<A: SplitApi + ?Sized>(&self, api: &A, workspace_id: &str) -> Vec<NamedItem> {
        list_names(api, workspace_id, self.endpoint, self.plural)
            .map(NamedItem::new)
            .collect()
            .await
    }

    pub async fn delete<A: SplitApi + ?Sized>(
        &self,
        api: &A,
        workspace_id: &str,
        name: &str,
    ) -> DeleteOutcome {
        let path = ResourcePath::item(self.endpoint, workspace_id, name);

        match api.delete(&path).await {
            Ok(resp) if resp.is_deleted() => {
                println!("{} {} '{}' deleted successfully.", "✓".green(), self.title, name);
                DeleteOutcome::Deleted
            }
            Ok(resp) if resp.is_not_found() => {
                eprintln!("{} '{}' not found.", self.title, name);
                DeleteOutcome::NotFound
            }
            Ok(resp) => {
                eprintln!(
                    "{} Failed to delete {}: {} - {}",
                    "✗".red(),
                    self.kind,
                    resp.status.as_u16(),
                    resp.error_message()
                );
                DeleteOutcome::Failed
            }
            Err(err) => {
                eprintln!("{} Error deleting {}: {}", "✗".red(), self.kind, err);
                DeleteOutcome::Failed
            }
        }
    }
}

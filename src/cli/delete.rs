//! Delete command: one item by name, or every item of a type
//!
//! Bulk runs list first, show what would go, ask once, then delete strictly
//! one item at a time in list order. A failed item never stops the run.

use colored::Colorize;
use log::debug;

use crate::cli::confirm::Confirmation;
use crate::client::SplitApi;
use crate::error::Result;
use crate::resource::{NamedItem, ResourceType};

/// What the user asked to delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `--all`
    All,
    /// `--name <NAME>`
    Named(String),
}

/// How a run ended. None of these is a process failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Bulk run found nothing to delete
    NothingFound,
    /// User declined the prompt; no delete was sent
    Cancelled,
    Completed { attempted: usize, deleted: usize },
}

/// Run the delete command.
///
/// Only a failing prompt is returned as an error; API and transport problems
/// are reported per item.
pub async fn run<A, C>(
    api: &A,
    workspace_id: &str,
    resource: ResourceType,
    target: &Target,
    confirm: &C,
) -> Result<RunOutcome>
where
    A: SplitApi + ?Sized,
    C: Confirmation + ?Sized,
{
    match target {
        Target::All => delete_all(api, workspace_id, resource, confirm).await,
        Target::Named(name) => delete_one(api, workspace_id, resource, name, confirm).await,
    }
}

async fn delete_all<A, C>(
    api: &A,
    workspace_id: &str,
    resource: ResourceType,
    confirm: &C,
) -> Result<RunOutcome>
where
    A: SplitApi + ?Sized,
    C: Confirmation + ?Sized,
{
    let plural = resource.plural();
    debug!("Listing {} in workspace {}", plural, workspace_id);

    let items = resource.list(api, workspace_id).await;
    if items.is_empty() {
        println!("No {} found in workspace.", plural);
        return Ok(RunOutcome::NothingFound);
    }

    println!("Found {} {}:", items.len(), plural);
    for item in &items {
        println!("- {}", item);
    }
    println!();

    let prompt = format!(
        "Are you sure you want to delete all {} {}? (y/N)",
        items.len(),
        plural
    );
    if !confirm.confirm(&prompt)? {
        println!("Deletion cancelled.");
        return Ok(RunOutcome::Cancelled);
    }

    println!("Deleting {} {}...", items.len(), plural);
    let mut deleted = 0;
    for item in &items {
        if resource.delete(api, workspace_id, item).await.is_deleted() {
            deleted += 1;
        }
    }

    println!("All {} processed.", plural);
    let failed = items.len() - deleted;
    if failed == 0 {
        println!("{} {} of {} deleted", "✓".green(), deleted, items.len());
    } else {
        println!(
            "{} {} of {} deleted, {} not deleted",
            "⚠".yellow(),
            deleted,
            items.len(),
            failed
        );
    }

    Ok(RunOutcome::Completed {
        attempted: items.len(),
        deleted,
    })
}

async fn delete_one<A, C>(
    api: &A,
    workspace_id: &str,
    resource: ResourceType,
    name: &str,
    confirm: &C,
) -> Result<RunOutcome>
where
    A: SplitApi + ?Sized,
    C: Confirmation + ?Sized,
{
    let prompt = format!(
        "Are you sure you want to delete {} '{}'? (y/N)",
        resource.singular(),
        name
    );
    if !confirm.confirm(&prompt)? {
        println!("Deletion cancelled.");
        return Ok(RunOutcome::Cancelled);
    }

    // The segment kind is unknown here, so segment deletes fall back across endpoints
    let outcome = resource
        .delete(api, workspace_id, &NamedItem::new(name))
        .await;

    Ok(RunOutcome::Completed {
        attempted: 1,
        deleted: usize::from(outcome.is_deleted()),
    })
}

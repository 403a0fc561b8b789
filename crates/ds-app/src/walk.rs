//! Recursive directory traversal
//!
//! Flattens a dropped directory entry into file records. Each level lists
//! its children once, drops the ones the filter rejects, and recurses into
//! the rest as one joined group. A directory with no admitted children
//! completes immediately; a failure in any branch fails the whole walk.

use std::sync::Arc;

use anyhow::Result;
use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use tracing::debug;

use ds_core::ports::EntryFilterPort;
use ds_core::{EntryHandle, EntryKind, NormalizedItem};

/// Walk `entry`, producing file records for every admitted file beneath it.
///
/// Records carry the leaf entry as their origin. Subtree order follows the
/// host's listing order with each child's records spliced in place.
pub(crate) fn walk_entry(
    entry: EntryHandle,
    filter: Arc<dyn EntryFilterPort>,
) -> BoxFuture<'static, Result<Vec<NormalizedItem>>> {
    async move {
        match entry.kind() {
            EntryKind::File => {
                let file = entry.file().await?;
                Ok(vec![NormalizedItem::file_with_origin(file, entry)])
            }
            EntryKind::Directory => {
                let children = entry.read_entries().await?;
                let admitted: Vec<EntryHandle> = children
                    .into_iter()
                    .filter(|child| filter.admit(&child.name()))
                    .collect();

                debug!(
                    dir = %entry.name(),
                    admitted = admitted.len(),
                    "walking directory entry"
                );

                let branches: Vec<_> = admitted
                    .into_iter()
                    .map(|child| walk_entry(child, Arc::clone(&filter)))
                    .collect();
                let groups = try_join_all(branches).await?;
                Ok(groups.into_iter().flatten().collect())
            }
        }
    }
    .boxed()
}

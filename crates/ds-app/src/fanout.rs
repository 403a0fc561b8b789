//! Item classification fan-out
//!
//! Every item in the list starts its branch at once and the group joins
//! before any result is returned. An empty list joins immediately.

use std::sync::Arc;

use anyhow::Result;
use futures::future::try_join_all;
use tracing::debug;

use ds_core::ports::EntryFilterPort;
use ds_core::{ItemKind, NormalizedItem, TransferItem};

use crate::error::NormalizeError;
use crate::walk::walk_entry;

/// Normalize the item list. Output records are spliced in item order even
/// though branches complete in any order.
pub(crate) async fn normalize_items(
    items: &[TransferItem],
    filter: &Arc<dyn EntryFilterPort>,
) -> Result<Vec<NormalizedItem>> {
    let branches: Vec<_> = items
        .iter()
        .map(|item| normalize_item(item, filter))
        .collect();
    let groups = try_join_all(branches).await?;
    Ok(groups.into_iter().flatten().collect())
}

/// Classify one item and produce its records.
///
/// A file-kind item that resolves to a directory entry expands into the
/// walked subtree. Any other file-kind item contributes its file handle
/// directly, including items whose entry turns out to be a plain file.
/// Non-file items extract their string payload.
async fn normalize_item(
    item: &TransferItem,
    filter: &Arc<dyn EntryFilterPort>,
) -> Result<Vec<NormalizedItem>> {
    match item.kind() {
        ItemKind::File => {
            if let Some(entry) = item.as_entry() {
                if entry.is_directory() {
                    debug!(dir = %entry.name(), "file item resolved to directory entry");
                    return walk_entry(entry, Arc::clone(filter)).await;
                }
            }
            let file = item
                .as_file()
                .ok_or_else(|| NormalizeError::MissingFileHandle { mime: item.mime() })?;
            Ok(vec![NormalizedItem::file(file)])
        }
        kind => {
            let text = item.read_string().await?;
            Ok(vec![NormalizedItem::text(kind, item.mime(), text)])
        }
    }
}

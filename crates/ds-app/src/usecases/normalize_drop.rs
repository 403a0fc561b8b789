use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, info_span};

use ds_core::ports::EntryFilterPort;
use ds_core::{FileHandle, HiddenEntryFilterV1, NormalizedItem, SourceEvent};

use crate::fanout::normalize_items;

/// Normalize a drop event into the flattened record list.
///
/// # Behavior
/// - 1. Enumerate the event's item list (clipboard source wins when present)
/// - 2. Fan out over the items: extract strings, take file handles, walk
///      directory entries
/// - 3. Append the transfer file list, skipping handles already collected
///      (some hosts populate both lists with the same files)
///
/// File-list merging runs strictly after item normalization completes, so
/// dedup sees every record the items produced.
pub struct NormalizeDropUseCase {
    entry_filter: Arc<dyn EntryFilterPort>,
}

impl NormalizeDropUseCase {
    /// Use case with the default traversal policy (hidden entries skipped).
    pub fn new() -> Self {
        Self {
            entry_filter: Arc::new(HiddenEntryFilterV1::new()),
        }
    }

    /// Use case with a caller-provided traversal filter.
    pub fn with_filter(entry_filter: Arc<dyn EntryFilterPort>) -> Self {
        Self { entry_filter }
    }

    /// Execute the normalization workflow.
    ///
    /// Resolves exactly once, after every nested branch (directory recursion
    /// included) has completed. The first host failure aborts the whole run.
    pub async fn execute(&self, event: &SourceEvent) -> Result<Vec<NormalizedItem>> {
        let span = info_span!("usecase.normalize_drop.execute");
        let _enter = span.enter();

        let items = event.item_list();
        let files = event.file_list();

        info!(
            items = items.len(),
            files = files.len(),
            "Starting drop normalization"
        );

        let mut records = normalize_items(&items, &self.entry_filter).await?;
        merge_files(&mut records, files);

        info!(records = records.len(), "Drop normalization completed");
        Ok(records)
    }
}

impl Default for NormalizeDropUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Append the flat file list, deduplicating by handle identity against the
/// records the item fan-out already produced.
fn merge_files(records: &mut Vec<NormalizedItem>, files: Vec<FileHandle>) {
    for file in files {
        if records.iter().any(|record| record.references(&file)) {
            debug!(file = %file.name(), "file already present in item records");
            continue;
        }
        records.push(NormalizedItem::file(file));
    }
}

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span};

use ds_core::ports::EntryFilterPort;
use ds_core::{HiddenEntryFilterV1, NormalizedItem, SourceEvent};

use crate::fanout::normalize_items;

/// Normalize a paste event into the flattened record list.
///
/// The clipboard variant consumes the item list only; there is no file-list
/// merge because clipboard sources do not carry one. An event with neither
/// source resolves immediately with an empty list.
pub struct NormalizeClipboardUseCase {
    entry_filter: Arc<dyn EntryFilterPort>,
}

impl NormalizeClipboardUseCase {
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

    /// Execute the normalization workflow over the event's item list.
    pub async fn execute(&self, event: &SourceEvent) -> Result<Vec<NormalizedItem>> {
        let span = info_span!("usecase.normalize_clipboard.execute");
        let _enter = span.enter();

        let items = event.item_list();

        info!(items = items.len(), "Starting clipboard normalization");

        let records = normalize_items(&items, &self.entry_filter).await?;

        info!(records = records.len(), "Clipboard normalization completed");
        Ok(records)
    }
}

impl Default for NormalizeClipboardUseCase {
    fn default() -> Self {
        Self::new()
    }
}

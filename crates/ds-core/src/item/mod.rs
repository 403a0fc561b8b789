//! Item domain models.
mod entry;
mod handle;
mod kind;
mod mime;
mod normalized;
mod transfer;

pub use entry::{EntryHandle, EntryKind};
pub use handle::FileHandle;
pub use kind::ItemKind;
pub use mime::MimeType;
pub use normalized::{FileItem, NormalizedItem, TextItem};
pub use transfer::TransferItem;

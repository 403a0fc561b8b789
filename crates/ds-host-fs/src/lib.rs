//! # ds-host-fs
//!
//! Filesystem host adapter: exposes a real directory tree as entries, real
//! files as file handles, and a path list as an item source shaped like a
//! file-manager drop. Hidden-entry filtering stays with the normalization
//! policy; this crate lists whatever the filesystem has.

mod entry;
mod file;
mod source;

pub use entry::FsEntry;
pub use file::FsFile;
pub use source::FsItemSource;

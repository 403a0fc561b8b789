use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use anyhow::Result;
use bytes::Bytes;

use crate::ports::FileBlobPort;

/// Shared handle to a host file blob.
///
/// Equality and hashing are **handle identity** (the underlying allocation),
/// not content: two handles compare equal only when they refer to the same
/// host object. Dual-source deduplication relies on this, the same way the
/// original event model deduplicates by object reference.
#[derive(Clone)]
pub struct FileHandle(Arc<dyn FileBlobPort>);

impl FileHandle {
    pub fn new(port: Arc<dyn FileBlobPort>) -> Self {
        Self(port)
    }

    pub fn from_port(port: impl FileBlobPort + 'static) -> Self {
        Self(Arc::new(port))
    }

    /// File name as reported by the host.
    pub fn name(&self) -> String {
        self.0.name()
    }

    /// Payload size in bytes, when the host knows it without reading.
    pub fn size_hint(&self) -> Option<u64> {
        self.0.size_hint()
    }

    /// Materialize the blob contents.
    pub async fn read_bytes(&self) -> Result<Bytes> {
        self.0.read_bytes().await
    }

    /// Whether two handles refer to the same host object.
    pub fn same_handle(&self, other: &FileHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other)
    }
}

impl Eq for FileHandle {}

impl Hash for FileHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const ()).hash(state);
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name())
            .field("size_hint", &self.size_hint())
            .finish()
    }
}

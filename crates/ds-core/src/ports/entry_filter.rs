use std::sync::Arc;

/// Decides which directory children the traversal descends into.
///
/// Consulted once per child with the entry's own name (not a path). Entries
/// the filter rejects are skipped along with everything beneath them.
pub trait EntryFilterPort: Send + Sync {
    fn admit(&self, name: &str) -> bool;
}

impl<T: EntryFilterPort + ?Sized> EntryFilterPort for Arc<T> {
    fn admit(&self, name: &str) -> bool {
        (**self).admit(name)
    }
}

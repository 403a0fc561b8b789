use crate::ports::EntryFilterPort;

/// v1 filter: skip dotfiles.
///
/// Admits every entry whose name does not start with `.`. This matches the
/// unix hidden-file convention and keeps traversal out of directories like
/// `.git` when a worktree is dropped.
#[derive(Debug, Default)]
pub struct HiddenEntryFilterV1;

impl HiddenEntryFilterV1 {
    pub fn new() -> Self {
        Self
    }
}

impl EntryFilterPort for HiddenEntryFilterV1 {
    fn admit(&self, name: &str) -> bool {
        !name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_ordinary_names() {
        let filter = HiddenEntryFilterV1::new();
        assert!(filter.admit("photo.jpg"));
        assert!(filter.admit("src"));
        assert!(filter.admit("a"));
    }

    #[test]
    fn test_rejects_dot_prefixed_names() {
        let filter = HiddenEntryFilterV1::new();
        assert!(!filter.admit(".DS_Store"));
        assert!(!filter.admit(".git"));
        assert!(!filter.admit("."));
    }

    #[test]
    fn test_dot_elsewhere_is_not_hidden() {
        let filter = HiddenEntryFilterV1::new();
        assert!(filter.admit("archive.tar.gz"));
    }

    #[test]
    fn test_empty_name_is_admitted() {
        let filter = HiddenEntryFilterV1::new();
        assert!(filter.admit(""));
    }
}

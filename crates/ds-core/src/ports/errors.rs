use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryAccessError {
    #[error("entry '{0}' is not a file")]
    NotAFile(String),

    #[error("entry '{0}' is not a directory")]
    NotADirectory(String),
}

use ds_core::MimeType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A file-kind item refused to hand out its file handle. The host
    /// advertised a file but could not materialize it.
    #[error("file item ({mime}) has no retrievable file handle")]
    MissingFileHandle { mime: MimeType },
}

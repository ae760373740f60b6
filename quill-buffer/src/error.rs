use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("Buffer has no file path")]
    NoPath,
    #[error("Saving {path:?} failed: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

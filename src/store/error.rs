//! Position store errors.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a position store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Position storage is disabled")]
    Disabled,

    #[error("Failed to access store file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode store contents")]
    Encode(#[from] serde_json::Error),
}

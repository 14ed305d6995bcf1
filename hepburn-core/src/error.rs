use std::path::PathBuf;

/// Errors surfaced by dictionary loading and request validation (§4.6.1, §7).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A shard or monolithic-table file is present but unreadable or
    /// unparseable. Fatal. A *missing* shard is not an error (§4.3).
    #[error("failed to load dictionary file {path}")]
    DictIo {
        path: PathBuf,
        #[source]
        source: DictIoSource,
    },

    /// A required request field was missing or empty (§6, §7).
    #[error("invalid input: {field}")]
    InvalidInput { field: String },
}

/// Underlying cause of a [`Error::DictIo`] failure.
#[derive(Debug, thiserror::Error)]
pub enum DictIoSource {
    #[error(transparent)]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

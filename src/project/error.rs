//! Error types for building a [`Context`](super::Context).

use std::path::PathBuf;

use thiserror::Error;

/// Why a grammar or registry could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a data file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON of the expected shape.
    #[error("invalid {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("command tree must start with a root node")]
    NotRoot,

    /// An argument node names no parser at all.
    #[error("argument node '{path}' has no parser")]
    MissingParser { path: String },

    #[error("node '{path}' redirects to unknown node '{target}'")]
    UnresolvedRedirect { path: String, target: String },
}

impl LoadError {
    pub(crate) fn json(what: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| LoadError::Json { what, source }
    }
}

use thiserror::Error;

/// Errors produced while resolving a request path to a file under the asset root.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried and no other request is affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The untrusted path tried to climb out of the asset root or address
    /// the filesystem absolutely (should map to HTTP 400)
    #[error("Invalid path: {path}")]
    BadPath { path: String },

    /// No candidate file exists after exhausting every fallback (should map to HTTP 404)
    #[error("File not found: {path}")]
    AssetMissing { path: String },
}

impl ResolveError {
    pub(crate) fn bad_path(path: impl Into<String>) -> Self {
        ResolveError::BadPath { path: path.into() }
    }

    pub(crate) fn missing(path: impl Into<String>) -> Self {
        ResolveError::AssetMissing { path: path.into() }
    }

    /// The request path (relative to the UI prefix) that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            ResolveError::BadPath { path } | ResolveError::AssetMissing { path } => path,
        }
    }
}

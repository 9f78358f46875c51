//! Error types for resolver-registry

use thiserror::Error;

/// Errors returned by a resolver when it is invoked.
///
/// Data sources wrap their own failures in [`ResolveError::Other`] so callers
/// can still reach the original error through `source()`.
#[derive(Error, Debug)]
pub enum ResolveError {
   /// The resolver failed with a plain message
   #[error("{0}")]
   Failed(String),

   /// Arguments or output could not be (de)serialized
   #[error("Serialization error: {0}")]
   Json(#[from] serde_json::Error),

   /// Any other error raised by the underlying data source
   #[error(transparent)]
   Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ResolveError {
   /// Build a [`ResolveError::Failed`] from anything displayable.
   pub fn failed(message: impl Into<String>) -> Self {
      ResolveError::Failed(message.into())
   }
}

/// A type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, ResolveError>;

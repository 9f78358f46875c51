/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pagination argument handling.
///
/// These are pure argument errors raised before any resolver is invoked.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// `page`, `perPage` or `first` was zero or negative.
   #[error("argument `{name}` should be a positive number, got {value}")]
   InvalidPaginationArgument { name: &'static str, value: i64 },

   /// Pagination arguments do not have the expected shape.
   #[error("invalid pagination arguments: {0}")]
   InvalidArgs(#[from] serde_json::Error),
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::InvalidPaginationArgument { .. } => "INVALID_PAGINATION_ARGUMENT".to_string(),
         Error::InvalidArgs(_) => "INVALID_ARGS".to_string(),
      }
   }
}

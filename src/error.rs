use resolver_registry::ResolveError;
use serde::{Serialize, ser::Serializer};

/// Result type alias for pagination resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for building and running a pagination resolver.
///
/// The first group is raised by
/// [`prepare_pagination_resolver`](crate::prepare_pagination_resolver) and
/// never at call time. The second group is raised by
/// [`PaginationResolver::resolve`](crate::PaginationResolver::resolve).
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// The type descriptor does not expose named resolvers.
   #[error(
      "first argument for prepare_pagination_resolver() should be instance of ObjectType, got `{0}`"
   )]
   InvalidArgument(String),

   /// A required option is empty.
   #[error("type {type_name} should have option `opts.{option}`")]
   MissingOption {
      type_name: String,
      option: &'static str,
   },

   /// A named resolver is not registered on the type.
   #[error("type {type_name} does not have resolver with name '{name}'")]
   UnknownResolver { type_name: String, name: String },

   /// A named resolver exists but its declared output cannot back pagination.
   #[error("resolver '{name}' should return {expected}, but returns {found}")]
   IncompatibleResolver {
      name: String,
      expected: &'static str,
      found: String,
   },

   /// The configured default page size is zero.
   #[error("option `opts.perPage` should be a positive number, got {0}")]
   InvalidPerPage(u32),

   /// Invalid pagination arguments supplied by the caller.
   #[error(transparent)]
   Toolkit(#[from] pagination_toolkit::Error),

   /// An underlying resolver failed; propagated unchanged.
   #[error(transparent)]
   Resolver(#[from] ResolveError),

   /// An underlying resolver returned a value of the wrong shape.
   #[error("resolver '{resolver}' returned an unexpected value, expected {expected}")]
   UnexpectedOutput {
      resolver: String,
      expected: &'static str,
   },
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// Toolkit errors forward the toolkit's own code.
   pub fn error_code(&self) -> String {
      match self {
         Error::InvalidArgument(_) => "INVALID_ARGUMENT".to_string(),
         Error::MissingOption { .. } => "MISSING_OPTION".to_string(),
         Error::UnknownResolver { .. } => "UNKNOWN_RESOLVER".to_string(),
         Error::IncompatibleResolver { .. } => "INCOMPATIBLE_RESOLVER".to_string(),
         Error::InvalidPerPage(_) => "INVALID_PER_PAGE".to_string(),
         Error::Toolkit(err) => err.error_code(),
         Error::Resolver(_) => "RESOLVER_ERROR".to_string(),
         Error::UnexpectedOutput { .. } => "UNEXPECTED_OUTPUT".to_string(),
      }
   }
}

/// Serializes as `{ "code": ..., "message": ... }`.
impl Serialize for Error {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: Serializer,
   {
      use serde::ser::SerializeStruct;
      let mut state = serializer.serialize_struct("Error", 2)?;
      state.serialize_field("code", &self.error_code())?;
      state.serialize_field("message", &self.to_string())?;
      state.end()
   }
}

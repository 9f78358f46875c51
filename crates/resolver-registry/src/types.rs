//! Type references and record types that expose named resolvers

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::resolver::Resolver;

/// A single record, field order preserved.
pub type Record = IndexMap<String, JsonValue>;

/// Reference to an input or output type, rendered GraphQL-style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
   Int,
   Boolean,
   String,
   /// Opaque structured value (filters, sort specs, raw queries)
   Json,
   /// Reference to an object type by name
   Named(String),
   List(Box<TypeRef>),
   NonNull(Box<TypeRef>),
}

impl TypeRef {
   pub fn named(name: impl Into<String>) -> Self {
      TypeRef::Named(name.into())
   }

   pub fn list(inner: TypeRef) -> Self {
      TypeRef::List(Box::new(inner))
   }

   pub fn non_null(inner: TypeRef) -> Self {
      TypeRef::NonNull(Box::new(inner))
   }

   /// The type with any outer non-null wrapper removed.
   pub fn nullable(&self) -> &TypeRef {
      match self {
         TypeRef::NonNull(inner) => inner.as_ref(),
         other => other,
      }
   }

   pub fn is_list(&self) -> bool {
      matches!(self.nullable(), TypeRef::List(_))
   }
}

impl fmt::Display for TypeRef {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         TypeRef::Int => f.write_str("Int"),
         TypeRef::Boolean => f.write_str("Boolean"),
         TypeRef::String => f.write_str("String"),
         TypeRef::Json => f.write_str("JSON"),
         TypeRef::Named(name) => f.write_str(name),
         TypeRef::List(inner) => write!(f, "[{}]", inner),
         TypeRef::NonNull(inner) => write!(f, "{}!", inner),
      }
   }
}

/// The "has named resolvers" capability.
pub trait ResolverSource: Send + Sync {
   fn has_resolver(&self, name: &str) -> bool;

   /// Look up a resolver by name, returning a cheap shared handle.
   fn get_resolver(&self, name: &str) -> Option<Resolver>;
}

/// Describes a type that can be exposed to callers.
///
/// Record-bearing types also provide [`ResolverSource`] through
/// [`TypeDescriptor::resolvers`]; scalars and other leaf types return `None`.
pub trait TypeDescriptor: Send + Sync {
   fn type_name(&self) -> &str;

   /// Field names and types of the described record (empty for leaf types).
   fn fields(&self) -> &IndexMap<String, TypeRef>;

   fn resolvers(&self) -> Option<&dyn ResolverSource>;
}

/// A record type with a field shape and a table of named resolvers.
///
/// # Example
///
/// ```
/// use resolver_registry::{ObjectType, ResolveParams, Resolver, ResolverSource, TypeRef};
/// use serde_json::json;
///
/// let mut user = ObjectType::new("User")
///    .with_field("id", TypeRef::non_null(TypeRef::Int))
///    .with_field("name", TypeRef::String);
///
/// user.set_resolver(Resolver::query("count", TypeRef::Int, |_: ResolveParams| async {
///    Ok(json!(0))
/// }));
///
/// assert!(user.has_resolver("count"));
/// assert!(!user.has_resolver("findMany"));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectType {
   name: String,
   fields: IndexMap<String, TypeRef>,
   resolvers: IndexMap<String, Resolver>,
}

impl ObjectType {
   pub fn new(name: impl Into<String>) -> Self {
      Self {
         name: name.into(),
         fields: IndexMap::new(),
         resolvers: IndexMap::new(),
      }
   }

   /// Declare a field on the record
   pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
      self.fields.insert(name.into(), ty);
      self
   }

   /// Register a resolver under its own name, replacing any previous one.
   pub fn set_resolver(&mut self, resolver: Resolver) -> Option<Resolver> {
      let name = resolver.name().to_string();
      let previous = self.resolvers.insert(name, resolver);
      if let Some(ref old) = previous {
         debug!(type_name = %self.name, resolver = %old.name(), "Replaced resolver");
      }
      previous
   }

   /// Register a resolver under an explicit name, replacing any previous one.
   ///
   /// Useful for exposing a wrapped copy of an existing resolver under an alias.
   pub fn set_resolver_as(
      &mut self,
      name: impl Into<String>,
      resolver: Resolver,
   ) -> Option<Resolver> {
      self.resolvers.insert(name.into(), resolver)
   }

   pub fn remove_resolver(&mut self, name: &str) -> Option<Resolver> {
      self.resolvers.shift_remove(name)
   }

   /// Names of all registered resolvers, in registration order
   pub fn resolver_names(&self) -> impl Iterator<Item = &str> {
      self.resolvers.keys().map(String::as_str)
   }
}

impl ResolverSource for ObjectType {
   fn has_resolver(&self, name: &str) -> bool {
      self.resolvers.contains_key(name)
   }

   fn get_resolver(&self, name: &str) -> Option<Resolver> {
      self.resolvers.get(name).cloned()
   }
}

impl TypeDescriptor for ObjectType {
   fn type_name(&self) -> &str {
      &self.name
   }

   fn fields(&self) -> &IndexMap<String, TypeRef> {
      &self.fields
   }

   fn resolvers(&self) -> Option<&dyn ResolverSource> {
      Some(self)
   }
}

/// A leaf type (`Int`, `DateTime`, ...) with no fields and no resolvers.
#[derive(Debug, Clone)]
pub struct ScalarType {
   name: String,
   fields: IndexMap<String, TypeRef>,
}

impl ScalarType {
   pub fn new(name: impl Into<String>) -> Self {
      Self {
         name: name.into(),
         fields: IndexMap::new(),
      }
   }
}

impl TypeDescriptor for ScalarType {
   fn type_name(&self) -> &str {
      &self.name
   }

   fn fields(&self) -> &IndexMap<String, TypeRef> {
      &self.fields
   }

   fn resolvers(&self) -> Option<&dyn ResolverSource> {
      None
   }
}

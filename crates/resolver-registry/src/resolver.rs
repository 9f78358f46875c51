//! Named async resolvers and the parameters they are invoked with

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::Result;
use crate::projection::Projection;
use crate::types::TypeRef;

/// Arguments passed to a resolver, keyed by argument name.
pub type ArgMap = IndexMap<String, JsonValue>;

/// Boxed future returned by every resolver call.
pub type ResolveFuture = BoxFuture<'static, Result<JsonValue>>;

/// Parameters for a single resolver invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveParams {
   /// Resolver arguments (`filter`, `sort`, `limit`, ...)
   pub args: ArgMap,
   /// Output fields requested by the caller
   pub projection: Projection,
   /// Raw, source-specific query passed through untouched.
   ///
   /// Always present as a field; `None` means "no raw query".
   pub raw_query: Option<JsonValue>,
}

impl ResolveParams {
   pub fn new(args: ArgMap, projection: Projection) -> Self {
      Self {
         args,
         projection,
         raw_query: None,
      }
   }

   /// Set the raw query forwarded to the data source
   pub fn with_raw_query(mut self, raw_query: Option<JsonValue>) -> Self {
      self.raw_query = raw_query;
      self
   }

   /// Look up a single argument
   pub fn arg(&self, name: &str) -> Option<&JsonValue> {
      self.args.get(name)
   }
}

/// Callable half of a [`Resolver`].
///
/// Implemented for every `Fn(ResolveParams) -> impl Future` closure that is
/// `Send + Sync`, so data sources rarely need to implement it by hand.
pub trait ResolveFn: Send + Sync + 'static {
   fn call(&self, params: ResolveParams) -> ResolveFuture;
}

impl<F, Fut> ResolveFn for F
where
   F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
   Fut: Future<Output = Result<JsonValue>> + Send + 'static,
{
   fn call(&self, params: ResolveParams) -> ResolveFuture {
      Box::pin(self(params))
   }
}

/// Whether a resolver reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
   Query,
   Mutation,
}

impl fmt::Display for ResolverKind {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         ResolverKind::Query => f.write_str("query"),
         ResolverKind::Mutation => f.write_str("mutation"),
      }
   }
}

/// A named resolver with its declared argument and output contract.
///
/// Cloning is cheap: the callable is shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use resolver_registry::{ResolveParams, Resolver, TypeRef};
/// use serde_json::json;
///
/// let count = Resolver::query("count", TypeRef::Int, |_params: ResolveParams| async {
///    Ok(json!(42))
/// })
/// .with_arg("filter", TypeRef::Json);
///
/// assert_eq!(count.name(), "count");
/// assert_eq!(count.arg_type("filter"), Some(&TypeRef::Json));
/// ```
#[derive(Clone)]
pub struct Resolver {
   name: String,
   kind: ResolverKind,
   args: IndexMap<String, TypeRef>,
   output: TypeRef,
   resolve: Arc<dyn ResolveFn>,
}

impl Resolver {
   pub fn new(
      name: impl Into<String>,
      kind: ResolverKind,
      output: TypeRef,
      resolve: impl ResolveFn,
   ) -> Self {
      Self {
         name: name.into(),
         kind,
         args: IndexMap::new(),
         output,
         resolve: Arc::new(resolve),
      }
   }

   /// Create a [`ResolverKind::Query`] resolver
   pub fn query(name: impl Into<String>, output: TypeRef, resolve: impl ResolveFn) -> Self {
      Self::new(name, ResolverKind::Query, output, resolve)
   }

   /// Declare an argument
   pub fn with_arg(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
      self.args.insert(name.into(), ty);
      self
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn kind(&self) -> ResolverKind {
      self.kind
   }

   pub fn output(&self) -> &TypeRef {
      &self.output
   }

   pub fn args(&self) -> &IndexMap<String, TypeRef> {
      &self.args
   }

   /// Declared type of argument `name`, if declared
   pub fn arg_type(&self, name: &str) -> Option<&TypeRef> {
      self.args.get(name)
   }

   /// Invoke the resolver.
   ///
   /// The returned future is `'static`, so it can be driven alongside other
   /// resolver calls without borrowing `self`.
   pub fn resolve(&self, params: ResolveParams) -> ResolveFuture {
      self.resolve.call(params)
   }
}

impl fmt::Debug for Resolver {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("Resolver")
         .field("name", &self.name)
         .field("kind", &self.kind)
         .field("args", &self.args)
         .field("output", &self.output)
         .finish_non_exhaustive()
   }
}

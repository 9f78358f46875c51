use std::num::NonZeroU64;

use futures::future::try_join;
use indexmap::IndexMap;
use pagination_toolkit::{
   PaginationArgs, PaginationEnvelope, analyze, assemble, compose_count_params,
   compose_list_params,
};
use resolver_registry::{
   ObjectType, Record, ResolveError, ResolveFuture, ResolveParams, Resolver, ResolverKind,
   TypeDescriptor, TypeRef,
};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{Error, Result};

/// Name the composed resolver is exposed under.
pub const PAGINATION_RESOLVER_NAME: &str = "pagination";

/// A pagination query composed from a count resolver and a list resolver.
///
/// Built once by [`prepare_pagination_resolver`](crate::prepare_pagination_resolver)
/// and reused for every call. Cloning is cheap and clones may be resolved
/// concurrently; no state is shared between calls.
///
/// # Example
///
/// ```
/// # use pagination_resolver::{PaginationResolverOpts, prepare_pagination_resolver};
/// # use resolver_registry::{ObjectType, Projection, ResolveParams, Resolver, TypeRef};
/// # use serde_json::json;
/// # async fn run() -> pagination_resolver::Result<()> {
/// let mut user = ObjectType::new("User").with_field("name", TypeRef::String);
/// user.set_resolver(Resolver::query("count", TypeRef::Int, |_: ResolveParams| async {
///    Ok(json!(2))
/// }));
/// user.set_resolver(Resolver::query(
///    "findMany",
///    TypeRef::list(TypeRef::named("User")),
///    |_: ResolveParams| async { Ok(json!([{ "name": "ann" }, { "name": "bob" }])) },
/// ));
///
/// let pagination =
///    prepare_pagination_resolver(&user, PaginationResolverOpts::new("count", "findMany"))?;
///
/// let projection = Projection::new().with_leaf("count");
/// let page = pagination
///    .resolve(ResolveParams::new(Default::default(), projection))
///    .await?;
///
/// assert_eq!(page.count, Some(2));
/// assert_eq!(page.items, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaginationResolver {
   count: Resolver,
   find: Resolver,
   per_page: NonZeroU64,
   args: IndexMap<String, TypeRef>,
   record: ObjectType,
   envelope: ObjectType,
}

impl PaginationResolver {
   pub(crate) fn new(
      count: Resolver,
      find: Resolver,
      per_page: NonZeroU64,
      args: IndexMap<String, TypeRef>,
      record: ObjectType,
      envelope: ObjectType,
   ) -> Self {
      Self {
         count,
         find,
         per_page,
         args,
         record,
         envelope,
      }
   }

   pub fn name(&self) -> &str {
      PAGINATION_RESOLVER_NAME
   }

   pub fn kind(&self) -> ResolverKind {
      ResolverKind::Query
   }

   /// Declared arguments: `page`, `perPage`, `sort`, `filter` and `first`.
   pub fn args(&self) -> &IndexMap<String, TypeRef> {
      &self.args
   }

   /// Declared output, a reference to [`envelope_type`](Self::envelope_type).
   pub fn output(&self) -> TypeRef {
      TypeRef::non_null(TypeRef::named(self.envelope.type_name()))
   }

   /// Shape of one entry of `items`, copied from the paginated type.
   pub fn record_type(&self) -> &ObjectType {
      &self.record
   }

   /// The `<Record>Pagination` object type.
   pub fn envelope_type(&self) -> &ObjectType {
      &self.envelope
   }

   /// Page size applied when the caller passes neither `perPage` nor `first`.
   pub fn default_per_page(&self) -> NonZeroU64 {
      self.per_page
   }

   /// Resolve one page.
   ///
   /// Only the resolvers the projection needs are called; when both are needed
   /// they run concurrently and the first failure fails the call.
   pub async fn resolve(&self, params: ResolveParams) -> Result<PaginationEnvelope> {
      let args = PaginationArgs::from_arg_map(&params.args)?;
      let window = args.window(self.per_page)?;
      let demand = analyze(&params.projection);

      debug!(
         type_name = %self.envelope.type_name(),
         page = window.page.get(),
         per_page = window.per_page.get(),
         need_count = demand.need_count,
         need_items = demand.need_items,
         "Resolving pagination"
      );

      let count_call = demand.need_count.then(|| {
         self.count.resolve(compose_count_params(
            &args,
            &params.projection,
            params.raw_query.clone(),
         ))
      });
      let find_call = demand
         .need_items
         .then(|| self.find.resolve(compose_list_params(&args, &window, &params.projection)));

      let (count, items) = try_join(optional(count_call), optional(find_call)).await?;

      let count = count.map(|value| self.count_from(value)).transpose()?;
      let items = items.map(|value| self.items_from(value)).transpose()?;

      Ok(assemble(count, items, &window))
   }

   /// Convert into a plain [`Resolver`] whose output is the serialized envelope.
   ///
   /// Resolver failures keep their original error; every other error is
   /// boxed into [`ResolveError::Other`].
   pub fn into_resolver(self) -> Resolver {
      let output = self.output();
      let args = self.args.clone();

      let resolver = Resolver::new(
         PAGINATION_RESOLVER_NAME,
         ResolverKind::Query,
         output,
         move |params: ResolveParams| {
            let pagination = self.clone();
            async move { pagination.resolve_json(params).await }
         },
      );

      args
         .into_iter()
         .fold(resolver, |resolver, (name, ty)| resolver.with_arg(name, ty))
   }

   async fn resolve_json(&self, params: ResolveParams) -> resolver_registry::Result<JsonValue> {
      let envelope = self.resolve(params).await.map_err(|err| match err {
         Error::Resolver(inner) => inner,
         other => ResolveError::Other(Box::new(other)),
      })?;
      Ok(serde_json::to_value(envelope)?)
   }

   fn count_from(&self, value: JsonValue) -> Result<u64> {
      value.as_u64().ok_or_else(|| Error::UnexpectedOutput {
         resolver: self.count.name().to_string(),
         expected: "a non-negative integer",
      })
   }

   fn items_from(&self, value: JsonValue) -> Result<Vec<Record>> {
      serde_json::from_value(value).map_err(|_| Error::UnexpectedOutput {
         resolver: self.find.name().to_string(),
         expected: "a list of records",
      })
   }
}

/// Await `call` if it was issued.
async fn optional(call: Option<ResolveFuture>) -> resolver_registry::Result<Option<JsonValue>> {
   match call {
      Some(call) => call.await.map(Some),
      None => Ok(None),
   }
}

//! Build-time validation and wiring of the pagination resolver.

use std::num::NonZeroU64;

use indexmap::IndexMap;
use resolver_registry::{ObjectType, Resolver, ResolverSource, TypeDescriptor, TypeRef};
use tracing::debug;

use crate::config::PaginationResolverOpts;
use crate::resolver::PaginationResolver;
use crate::{Error, Result};

/// Name of the shared page metadata type.
pub const PAGE_INFO_TYPE_NAME: &str = "PaginationInfo";

/// Compose the count and list resolvers of `type_descriptor` into a
/// pagination resolver.
///
/// Checks run in order and the first failure is returned:
///
/// 1. `type_descriptor` exposes named resolvers ([`Error::InvalidArgument`])
/// 2. `count_resolver_name` is set ([`Error::MissingOption`]) and registered
///    ([`Error::UnknownResolver`])
/// 3. `find_resolver_name` is set and registered, with the same errors
/// 4. the count resolver returns `Int` and the find resolver returns a list
///    ([`Error::IncompatibleResolver`])
/// 5. `per_page` is positive ([`Error::InvalidPerPage`])
///
/// Nothing is resolved here; the returned value only holds handles to the two
/// resolvers.
pub fn prepare_pagination_resolver<T>(
   type_descriptor: &T,
   opts: PaginationResolverOpts,
) -> Result<PaginationResolver>
where
   T: TypeDescriptor + ?Sized,
{
   let type_name = type_descriptor.type_name();
   let source = type_descriptor
      .resolvers()
      .ok_or_else(|| Error::InvalidArgument(type_name.to_string()))?;

   let count = lookup(source, type_name, &opts.count_resolver_name, "countResolverName")?;
   let find = lookup(source, type_name, &opts.find_resolver_name, "findResolverName")?;

   check_output(&count, count.output().nullable() == &TypeRef::Int, "Int")?;
   check_output(&find, find.output().is_list(), "a list")?;

   let per_page =
      NonZeroU64::new(u64::from(opts.per_page)).ok_or(Error::InvalidPerPage(opts.per_page))?;

   debug!(
      type_name = %type_name,
      count_resolver = %count.name(),
      find_resolver = %find.name(),
      per_page = per_page.get(),
      fields = type_descriptor.fields().len(),
      "Prepared pagination resolver"
   );

   let args = declared_args(&find);
   let record = record_type(type_descriptor);
   let envelope = envelope_type(record.type_name());

   Ok(PaginationResolver::new(count, find, per_page, args, record, envelope))
}

fn lookup(
   source: &dyn ResolverSource,
   type_name: &str,
   name: &str,
   option: &'static str,
) -> Result<Resolver> {
   if name.is_empty() {
      return Err(Error::MissingOption {
         type_name: type_name.to_string(),
         option,
      });
   }

   source.get_resolver(name).ok_or_else(|| Error::UnknownResolver {
      type_name: type_name.to_string(),
      name: name.to_string(),
   })
}

fn check_output(resolver: &Resolver, compatible: bool, expected: &'static str) -> Result<()> {
   if compatible {
      return Ok(());
   }

   Err(Error::IncompatibleResolver {
      name: resolver.name().to_string(),
      expected,
      found: resolver.output().to_string(),
   })
}

/// `filter` and `sort` reuse the find resolver's declared types when present.
fn declared_args(find: &Resolver) -> IndexMap<String, TypeRef> {
   let inherited = |name: &str| find.arg_type(name).cloned().unwrap_or(TypeRef::Json);

   IndexMap::from([
      ("page".to_string(), TypeRef::Int),
      ("perPage".to_string(), TypeRef::Int),
      ("sort".to_string(), inherited("sort")),
      ("filter".to_string(), inherited("filter")),
      ("first".to_string(), TypeRef::Int),
   ])
}

/// Field-only copy of the paginated type, without its resolvers.
pub fn record_type<T>(type_descriptor: &T) -> ObjectType
where
   T: TypeDescriptor + ?Sized,
{
   type_descriptor
      .fields()
      .iter()
      .fold(ObjectType::new(type_descriptor.type_name()), |record, (name, ty)| {
         record.with_field(name.as_str(), ty.clone())
      })
}

/// The `<Record>Pagination` envelope type for records named `type_name`.
pub fn envelope_type(type_name: &str) -> ObjectType {
   ObjectType::new(format!("{type_name}Pagination"))
      .with_field("count", TypeRef::Int)
      .with_field("items", TypeRef::list(TypeRef::named(type_name)))
      .with_field(
         "pageInfo",
         TypeRef::non_null(TypeRef::named(PAGE_INFO_TYPE_NAME)),
      )
}

/// The page metadata type shared by every envelope.
pub fn page_info_type() -> ObjectType {
   ObjectType::new(PAGE_INFO_TYPE_NAME)
      .with_field("currentPage", TypeRef::non_null(TypeRef::Int))
      .with_field("perPage", TypeRef::non_null(TypeRef::Int))
      .with_field("pageCount", TypeRef::Int)
      .with_field("itemCount", TypeRef::Int)
      .with_field("hasNextPage", TypeRef::Boolean)
      .with_field("hasPreviousPage", TypeRef::Boolean)
}

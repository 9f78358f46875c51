//! # pagination-resolver
//!
//! Compose a record type's "count" and "list" resolvers into one `pagination`
//! query that returns a page of items, the total count and page metadata.
//!
//! ## Core Types
//!
//! - **[`prepare_pagination_resolver`]**: Validate the two resolvers once, at setup time
//! - **[`PaginationResolver`]**: The composed query, reusable across calls
//! - **[`PaginationResolverOpts`]**: Resolver names and the default page size
//! - **[`PaginationEnvelope`]**: `{ items, count, pageInfo }` returned per call
//!
//! ## Call Model
//!
//! - **Projection-driven**: Only the resolvers the requested fields need are
//!   called. `pageInfo.currentPage` alone calls nothing
//! - **Over-fetch by one**: The list resolver is asked for `perPage + 1` records
//!   so `hasNextPage` is known without counting. The extra record is dropped
//! - **Count wins**: When the count resolver ran, `hasNextPage` comes from it
//! - **Concurrent**: Count and list calls run together; the first failure is
//!   returned unchanged
//!
//! ## Example
//!
//! ```
//! use pagination_resolver::{PaginationResolverOpts, prepare_pagination_resolver};
//! use resolver_registry::{ObjectType, ResolveParams, Resolver, ResolverSource, TypeRef};
//! use serde_json::json;
//!
//! let mut user = ObjectType::new("User").with_field("name", TypeRef::String);
//! user.set_resolver(Resolver::query("count", TypeRef::Int, |_: ResolveParams| async {
//!    Ok(json!(0))
//! }));
//! user.set_resolver(Resolver::query(
//!    "findMany",
//!    TypeRef::list(TypeRef::named("User")),
//!    |_: ResolveParams| async { Ok(json!([])) },
//! ));
//!
//! let pagination =
//!    prepare_pagination_resolver(&user, PaginationResolverOpts::new("count", "findMany"))
//!       .unwrap();
//! user.set_resolver(pagination.into_resolver());
//!
//! assert!(user.has_resolver("pagination"));
//! ```

mod config;
mod error;
mod factory;
mod resolver;

pub use config::PaginationResolverOpts;
pub use error::{Error, Result};
pub use factory::{
   PAGE_INFO_TYPE_NAME, envelope_type, page_info_type, prepare_pagination_resolver, record_type,
};
pub use pagination_toolkit::{PageInfo, PaginationEnvelope};
pub use resolver::{PAGINATION_RESOLVER_NAME, PaginationResolver};

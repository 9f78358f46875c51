//! Configuration for the pagination resolver factory

/// Options for [`prepare_pagination_resolver`](crate::prepare_pagination_resolver)
///
/// # Examples
///
/// ```
/// use pagination_resolver::PaginationResolverOpts;
///
/// // Name the underlying resolvers, keep the default page size
/// let opts = PaginationResolverOpts {
///    count_resolver_name: "count".into(),
///    find_resolver_name: "findMany".into(),
///    ..Default::default()
/// };
/// assert_eq!(opts.per_page, 20);
///
/// // Or set everything explicitly
/// let opts = PaginationResolverOpts {
///    count_resolver_name: "count".into(),
///    find_resolver_name: "findMany".into(),
///    per_page: 50,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationResolverOpts {
   /// Name of the resolver returning the total number of matching records
   ///
   /// Required. Its declared output must be `Int`.
   ///
   /// Default: empty
   pub count_resolver_name: String,

   /// Name of the resolver returning a list of records
   ///
   /// Required. Its declared output must be a list. It must honor `limit` and
   /// `skip`.
   ///
   /// Default: empty
   pub find_resolver_name: String,

   /// Page size used when the caller passes neither `perPage` nor `first`
   ///
   /// Must be greater than zero.
   ///
   /// Default: 20
   pub per_page: u32,
}

impl Default for PaginationResolverOpts {
   fn default() -> Self {
      Self {
         count_resolver_name: String::new(),
         find_resolver_name: String::new(),
         per_page: 20,
      }
   }
}

impl PaginationResolverOpts {
   /// Options naming both resolvers, with the default page size.
   pub fn new(
      count_resolver_name: impl Into<String>,
      find_resolver_name: impl Into<String>,
   ) -> Self {
      Self {
         count_resolver_name: count_resolver_name.into(),
         find_resolver_name: find_resolver_name.into(),
         ..Default::default()
      }
   }
}

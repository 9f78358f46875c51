//! Decide which resolvers a projection actually needs.

use resolver_registry::{Projection, ProjectionNode};

/// Top-level envelope fields.
pub(crate) const ITEMS: &str = "items";
pub(crate) const COUNT: &str = "count";
pub(crate) const PAGE_INFO: &str = "pageInfo";

/// `pageInfo` leaves that can only be answered by the count resolver.
const COUNT_BACKED_PAGE_INFO: [&str; 2] = ["itemCount", "pageCount"];

/// Which underlying resolvers must run to satisfy a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Demand {
   pub need_count: bool,
   pub need_items: bool,
}

/// A top-level projection key, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnvelopeField<'a> {
   Items,
   Count,
   PageInfo,
   /// Pass-through field merged onto each record (e.g. a computed score)
   Other(&'a str),
}

impl<'a> EnvelopeField<'a> {
   pub(crate) fn classify(key: &'a str) -> Self {
      match key {
         ITEMS => EnvelopeField::Items,
         COUNT => EnvelopeField::Count,
         PAGE_INFO => EnvelopeField::PageInfo,
         other => EnvelopeField::Other(other),
      }
   }
}

/// Inspect the requested output shape.
///
/// - `count`, or `pageInfo.itemCount` / `pageInfo.pageCount`, needs the count
///   resolver. A bare `pageInfo: true` asks for every leaf, count-backed ones
///   included.
/// - `items`, or any pass-through top-level key, needs the list resolver.
/// - `currentPage`, `perPage`, `hasPreviousPage` and `hasNextPage` alone need
///   neither.
pub fn analyze(projection: &Projection) -> Demand {
   let mut demand = Demand::default();

   for (key, node) in projection {
      match EnvelopeField::classify(key) {
         EnvelopeField::Count => demand.need_count |= node.is_requested(),
         EnvelopeField::Items => demand.need_items |= node.is_requested(),
         EnvelopeField::PageInfo => demand.need_count |= page_info_needs_count(node),
         EnvelopeField::Other(_) => demand.need_items = true,
      }
   }

   demand
}

fn page_info_needs_count(node: &ProjectionNode) -> bool {
   match node {
      ProjectionNode::Tree(tree) => COUNT_BACKED_PAGE_INFO
         .iter()
         .any(|leaf| tree.is_requested(leaf)),
      whole => whole.is_requested(),
   }
}

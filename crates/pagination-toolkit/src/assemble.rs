//! Combine resolver outputs into the pagination envelope.

use resolver_registry::Record;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::args::PageWindow;
use crate::page_math::{self, PageInfo};

/// The page returned to callers.
///
/// `items` and `count` are only present when the corresponding resolver ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationEnvelope {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub count: Option<u64>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub items: Option<Vec<Record>>,
   pub page_info: PageInfo,
}

/// Build the envelope from whatever the resolvers returned.
///
/// `items` is the raw (over-fetched) list result; it is trimmed to the page
/// size here after its length has been used for the sentinel check.
pub fn assemble(
   count: Option<u64>,
   items: Option<Vec<Record>>,
   window: &PageWindow,
) -> PaginationEnvelope {
   let fetched_len = items.as_ref().map(|items| items.len() as u64);
   let page_info = page_math::compute(window.page, window.per_page, count, fetched_len);

   let items = items.map(|mut items| {
      let per_page = usize::try_from(window.per_page.get()).unwrap_or(usize::MAX);
      items.truncate(per_page);
      items
   });

   trace!(
      count = ?count,
      fetched = ?fetched_len,
      has_next_page = ?page_info.has_next_page,
      "Assembled page"
   );

   PaginationEnvelope {
      count,
      items,
      page_info,
   }
}

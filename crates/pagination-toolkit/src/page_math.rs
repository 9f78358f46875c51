//! Offset and page metadata arithmetic.
//!
//! Every function here is pure: page metadata depends only on the requested
//! page, the page size, and whichever of "total matching records" or
//! "records returned by an over-fetching list call" is known.
//!
//! # How `hasNextPage` Is Derived
//!
//! 1. If the total item count is known, it is authoritative:
//!    `page * perPage < itemCount`.
//! 2. Otherwise, if the list resolver was asked for `perPage + 1` records, the
//!    extra record acts as a sentinel: it coming back means another page
//!    exists.
//! 3. Otherwise the value is unknown and left out.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Metadata describing the returned page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
   /// The requested page (1-based)
   pub current_page: u64,
   /// Page size in effect for this call
   pub per_page: u64,
   /// Total matching records, when the count resolver ran
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub item_count: Option<u64>,
   /// `ceil(itemCount / perPage)`, when the count resolver ran
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub page_count: Option<u64>,
   pub has_previous_page: bool,
   /// Whether a later page exists, when it can be determined
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub has_next_page: Option<bool>,
}

/// Number of records preceding `page`.
pub fn skip(page: NonZeroU64, per_page: NonZeroU64) -> u64 {
   (page.get() - 1).saturating_mul(per_page.get())
}

/// Number of pages needed to hold `item_count` records.
pub fn page_count(item_count: u64, per_page: NonZeroU64) -> u64 {
   item_count.div_ceil(per_page.get())
}

/// Compute page metadata.
///
/// `fetched_len` is the number of records an over-fetching list call returned
/// (before trimming), and is only consulted when `item_count` is unknown.
pub fn compute(
   page: NonZeroU64,
   per_page: NonZeroU64,
   item_count: Option<u64>,
   fetched_len: Option<u64>,
) -> PageInfo {
   let has_next_page = match (item_count, fetched_len) {
      (Some(count), _) => Some(page.get().saturating_mul(per_page.get()) < count),
      (None, Some(fetched)) => Some(fetched > per_page.get()),
      (None, None) => None,
   };

   PageInfo {
      current_page: page.get(),
      per_page: per_page.get(),
      item_count,
      page_count: item_count.map(|count| page_count(count, per_page)),
      has_previous_page: page.get() > 1,
      has_next_page,
   }
}

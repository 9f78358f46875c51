//! Pagination arguments and the per-resolver argument sets built from them.
//!
//! # Forwarding Rules
//!
//! | argument   | count resolver | list resolver |
//! |------------|----------------|---------------|
//! | `filter`   | yes, unchanged | yes, unchanged|
//! | `sort`     | never          | when supplied |
//! | `rawQuery` | always (maybe `None`) | never  |
//! | `limit`    | never          | `perPage + 1` |
//! | `skip`     | never          | `(page - 1) * perPage` |
//!
//! The list resolver is asked for one record beyond the page. The extra
//! record only feeds `hasNextPage` and is trimmed before results are returned.

use std::num::NonZeroU64;

use resolver_registry::{ArgMap, Projection, ProjectionNode, ResolveParams};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::trace;

use crate::analyzer::{EnvelopeField, ITEMS};
use crate::page_math;
use crate::{Error, Result};

/// Caller-supplied pagination arguments.
///
/// Every field is optional; defaults are applied by [`PaginationArgs::window`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationArgs {
   /// 1-based page number (default 1)
   pub page: Option<i64>,
   /// Page size (default supplied by configuration)
   pub per_page: Option<i64>,
   /// Opaque filter forwarded to both resolvers
   pub filter: Option<JsonValue>,
   /// Opaque sort order forwarded to the list resolver only
   pub sort: Option<JsonValue>,
   /// Alternate page size; when present the window always starts at the
   /// first record
   pub first: Option<i64>,
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
   pub page: NonZeroU64,
   pub per_page: NonZeroU64,
   pub skip: u64,
}

impl PageWindow {
   /// Records to request from the list resolver: one page plus a sentinel.
   pub fn limit(&self) -> u64 {
      self.per_page.get().saturating_add(1)
   }
}

impl PaginationArgs {
   /// Parse arguments from a resolver argument map.
   ///
   /// Unknown keys are ignored; `null` is treated like an absent key.
   pub fn from_arg_map(args: &ArgMap) -> Result<Self> {
      let object: Map<String, JsonValue> =
         args.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
      Ok(serde_json::from_value(JsonValue::Object(object))?)
   }

   /// Validate the arguments and resolve defaults into a [`PageWindow`].
   ///
   /// Every supplied value must be positive, `first` included. `first` then
   /// takes precedence over `page`/`perPage`: the window becomes the first
   /// `first` records, reported as page 1.
   pub fn window(&self, default_per_page: NonZeroU64) -> Result<PageWindow> {
      let page = match self.page {
         Some(page) => positive("page", page)?,
         None => NonZeroU64::MIN,
      };
      let per_page = match self.per_page {
         Some(per_page) => positive("perPage", per_page)?,
         None => default_per_page,
      };

      if let Some(first) = self.first {
         let per_page = positive("first", first)?;
         if self.page.is_some() {
            trace!(first, "`first` supplied, ignoring `page`");
         }
         return Ok(PageWindow {
            page: NonZeroU64::MIN,
            per_page,
            skip: 0,
         });
      }

      Ok(PageWindow {
         page,
         per_page,
         skip: page_math::skip(page, per_page),
      })
   }

   /// The filter both resolvers receive; absent means "match everything".
   pub fn filter_or_empty(&self) -> JsonValue {
      self
         .filter
         .clone()
         .unwrap_or_else(|| JsonValue::Object(Map::new()))
   }
}

fn positive(name: &'static str, value: i64) -> Result<NonZeroU64> {
   u64::try_from(value)
      .ok()
      .and_then(NonZeroU64::new)
      .ok_or(Error::InvalidPaginationArgument { name, value })
}

/// Arguments for the count resolver: `{ filter }`.
pub fn compose_count_args(args: &PaginationArgs) -> ArgMap {
   let mut count_args = ArgMap::new();
   count_args.insert("filter".into(), args.filter_or_empty());
   count_args
}

/// Arguments for the list resolver: `{ filter, sort?, limit, skip }`.
pub fn compose_list_args(args: &PaginationArgs, window: &PageWindow) -> ArgMap {
   let mut list_args = ArgMap::new();
   list_args.insert("filter".into(), args.filter_or_empty());
   if let Some(ref sort) = args.sort {
      list_args.insert("sort".into(), sort.clone());
   }
   list_args.insert("limit".into(), JsonValue::from(window.limit()));
   list_args.insert("skip".into(), JsonValue::from(window.skip));
   list_args
}

/// Projection forwarded to the list resolver.
///
/// Pass-through top-level keys come first, then the keys nested under
/// `items`, which win on collision. Envelope keys are not forwarded.
pub fn list_projection(projection: &Projection) -> Projection {
   let mut forwarded = Projection::new();

   for (key, node) in projection {
      if let EnvelopeField::Other(name) = EnvelopeField::classify(key) {
         forwarded.insert(name, node.clone());
      }
   }

   if let Some(ProjectionNode::Tree(items)) = projection.get(ITEMS) {
      for (key, node) in items {
         forwarded.insert(key.as_str(), node.clone());
      }
   }

   forwarded
}

/// Full parameters for the count resolver.
///
/// The count resolver sees the caller's whole projection and always receives
/// the raw query field, even when it is `None`.
pub fn compose_count_params(
   args: &PaginationArgs,
   projection: &Projection,
   raw_query: Option<JsonValue>,
) -> ResolveParams {
   let params =
      ResolveParams::new(compose_count_args(args), projection.clone()).with_raw_query(raw_query);
   trace!(args = ?params.args, "Composed count params");
   params
}

/// Full parameters for the list resolver.
pub fn compose_list_params(
   args: &PaginationArgs,
   window: &PageWindow,
   projection: &Projection,
) -> ResolveParams {
   let params = ResolveParams::new(compose_list_args(args, window), list_projection(projection));
   trace!(args = ?params.args, "Composed list params");
   params
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   fn nz(n: u64) -> NonZeroU64 {
      NonZeroU64::new(n).unwrap()
   }

   fn args_from(value: JsonValue) -> PaginationArgs {
      let map: ArgMap = serde_json::from_value(value).unwrap();
      PaginationArgs::from_arg_map(&map).unwrap()
   }

   // ─── parsing ───

   #[test]
   fn parses_camel_case_args() {
      let args = args_from(json!({
         "page": 2,
         "perPage": 10,
         "filter": { "gender": "m" },
         "sort": { "id": 1 },
         "unknown": "ignored",
      }));

      assert_eq!(args.page, Some(2));
      assert_eq!(args.per_page, Some(10));
      assert_eq!(args.filter, Some(json!({ "gender": "m" })));
      assert_eq!(args.sort, Some(json!({ "id": 1 })));
      assert_eq!(args.first, None);
   }

   #[test]
   fn null_is_absent() {
      let args = args_from(json!({ "page": null, "filter": null }));
      assert_eq!(args, PaginationArgs::default());
   }

   #[test]
   fn rejects_wrong_types() {
      let map: ArgMap = serde_json::from_value(json!({ "page": "two" })).unwrap();
      let err = PaginationArgs::from_arg_map(&map).unwrap_err();
      assert!(matches!(err, Error::InvalidArgs(_)));
   }

   // ─── window ───

   #[test]
   fn window_defaults() {
      let window = PaginationArgs::default().window(nz(20)).unwrap();

      assert_eq!(window.page, nz(1));
      assert_eq!(window.per_page, nz(20));
      assert_eq!(window.skip, 0);
      assert_eq!(window.limit(), 21);
   }

   #[test]
   fn window_from_page_and_per_page() {
      let args = args_from(json!({ "page": 3, "perPage": 5 }));
      let window = args.window(nz(20)).unwrap();

      assert_eq!(window.skip, 10);
      assert_eq!(window.limit(), 6);
   }

   #[test]
   fn window_rejects_non_positive_values() {
      for (value, name) in [
         (json!({ "page": 0 }), "page"),
         (json!({ "page": -1 }), "page"),
         (json!({ "perPage": 0 }), "perPage"),
         (json!({ "first": -3 }), "first"),
         (json!({ "page": 0, "first": 2 }), "page"),
         (json!({ "perPage": -7, "first": 2 }), "perPage"),
      ] {
         let err = args_from(value).window(nz(20)).unwrap_err();
         assert!(
            matches!(err, Error::InvalidPaginationArgument { name: n, .. } if n == name),
            "expected {name} to be rejected, got {err:?}"
         );
      }
   }

   #[test]
   fn first_overrides_page_window() {
      let args = args_from(json!({ "page": 4, "perPage": 10, "first": 3 }));
      let window = args.window(nz(20)).unwrap();

      assert_eq!(window.page, nz(1));
      assert_eq!(window.per_page, nz(3));
      assert_eq!(window.skip, 0);
      assert_eq!(window.limit(), 4);
   }

   // ─── composition ───

   #[test]
   fn filter_reaches_both_and_sort_only_list() {
      let args = args_from(json!({ "filter": { "gender": "m" }, "sort": { "id": 1 } }));
      let window = args.window(nz(5)).unwrap();

      let count = compose_count_args(&args);
      let list = compose_list_args(&args, &window);

      assert_eq!(count.get("filter"), Some(&json!({ "gender": "m" })));
      assert_eq!(count.get("sort"), None);
      assert_eq!(list.get("filter"), count.get("filter"));
      assert_eq!(list.get("sort"), Some(&json!({ "id": 1 })));
      assert_eq!(list.get("limit"), Some(&json!(6)));
      assert_eq!(list.get("skip"), Some(&json!(0)));
   }

   #[test]
   fn missing_filter_becomes_empty_object() {
      let args = PaginationArgs::default();
      assert_eq!(compose_count_args(&args).get("filter"), Some(&json!({})));
   }

   #[test]
   fn count_params_always_carry_raw_query_field() {
      let projection = Projection::new().with_leaf("count");
      let params = compose_count_params(&PaginationArgs::default(), &projection, None);

      assert_eq!(params.raw_query, None);
      assert_eq!(params.projection, projection);

      let raw_query = Some(json!({ "$text": "x" }));
      let params = compose_count_params(&PaginationArgs::default(), &projection, raw_query);
      assert_eq!(params.raw_query, Some(json!({ "$text": "x" })));
   }

   #[test]
   fn list_projection_merges_items_and_pass_through() {
      let projection: Projection = serde_json::from_value(json!({
         "count": true,
         "pageInfo": { "itemCount": true },
         "score": { "$meta": "textScore" },
         "items": { "name": true, "age": true },
      }))
      .unwrap();

      let forwarded = list_projection(&projection);

      assert_eq!(
         serde_json::to_value(&forwarded).unwrap(),
         json!({
            "score": { "$meta": "textScore" },
            "name": true,
            "age": true,
         })
      );
   }

   #[test]
   fn nested_items_win_on_collision() {
      let projection: Projection = serde_json::from_value(json!({
         "name": false,
         "items": { "name": true },
      }))
      .unwrap();

      let forwarded = list_projection(&projection);
      assert!(forwarded.is_requested("name"));
      assert_eq!(forwarded.len(), 1);
   }

   #[test]
   fn items_true_forwards_no_nested_keys() {
      let projection = Projection::new().with_leaf("items");
      assert!(list_projection(&projection).is_empty());
   }
}

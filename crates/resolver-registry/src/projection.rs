//! Projection trees describing which output fields a caller requested.
//!
//! A projection is parsed from, and serializes back to, the plain JSON shape
//! schema layers already produce:
//!
//! ```
//! use resolver_registry::{Projection, ProjectionNode};
//! use serde_json::json;
//!
//! let projection: Projection = serde_json::from_value(json!({
//!    "items": { "name": true },
//!    "score": { "$meta": "textScore" },
//! }))
//! .unwrap();
//!
//! assert!(matches!(projection.get("items"), Some(ProjectionNode::Tree(_))));
//! assert!(projection.is_requested("score"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single node of a projection tree.
///
/// Deserialization tries the variants in order, so `true`/`false` become
/// [`ProjectionNode::Leaf`], objects become [`ProjectionNode::Tree`], and any
/// other JSON value (numbers, strings, arrays) is kept verbatim as
/// [`ProjectionNode::Expr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectionNode {
   /// Field requested (or explicitly not requested)
   Leaf(bool),
   /// Nested selection of sub-fields
   Tree(Projection),
   /// Opaque projection expression forwarded untouched (e.g. `"textScore"`)
   Expr(JsonValue),
}

impl ProjectionNode {
   /// Whether this node asks for its field at all.
   ///
   /// Sub-trees always count as requested, even when empty. Expressions follow
   /// JSON truthiness: `null`, `0` and `""` are not requested.
   pub fn is_requested(&self) -> bool {
      match self {
         ProjectionNode::Leaf(requested) => *requested,
         ProjectionNode::Tree(_) => true,
         ProjectionNode::Expr(value) => is_truthy(value),
      }
   }

   /// Borrow the sub-tree, if this node is one.
   pub fn as_tree(&self) -> Option<&Projection> {
      match self {
         ProjectionNode::Tree(tree) => Some(tree),
         _ => None,
      }
   }
}

fn is_truthy(value: &JsonValue) -> bool {
   match value {
      JsonValue::Null => false,
      JsonValue::Bool(b) => *b,
      JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
      JsonValue::String(s) => !s.is_empty(),
      JsonValue::Array(_) | JsonValue::Object(_) => true,
   }
}

/// Ordered mapping of field name to [`ProjectionNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection(IndexMap<String, ProjectionNode>);

impl Projection {
   /// Create an empty projection (nothing requested).
   pub fn new() -> Self {
      Self::default()
   }

   /// Builder-style insert of a requested leaf.
   pub fn with_leaf(mut self, name: impl Into<String>) -> Self {
      self.0.insert(name.into(), ProjectionNode::Leaf(true));
      self
   }

   /// Builder-style insert of a nested sub-tree.
   pub fn with_tree(mut self, name: impl Into<String>, tree: Projection) -> Self {
      self.0.insert(name.into(), ProjectionNode::Tree(tree));
      self
   }

   /// Insert or replace a node, returning the previous one.
   pub fn insert(
      &mut self,
      name: impl Into<String>,
      node: ProjectionNode,
   ) -> Option<ProjectionNode> {
      self.0.insert(name.into(), node)
   }

   pub fn get(&self, name: &str) -> Option<&ProjectionNode> {
      self.0.get(name)
   }

   /// Whether `name` is present and requested.
   pub fn is_requested(&self, name: &str) -> bool {
      self.0.get(name).is_some_and(ProjectionNode::is_requested)
   }

   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   pub fn len(&self) -> usize {
      self.0.len()
   }

   pub fn iter(&self) -> indexmap::map::Iter<'_, String, ProjectionNode> {
      self.0.iter()
   }

   pub fn keys(&self) -> impl Iterator<Item = &str> {
      self.0.keys().map(String::as_str)
   }
}

impl<'a> IntoIterator for &'a Projection {
   type Item = (&'a String, &'a ProjectionNode);
   type IntoIter = indexmap::map::Iter<'a, String, ProjectionNode>;

   fn into_iter(self) -> Self::IntoIter {
      self.0.iter()
   }
}

impl<K: Into<String>> FromIterator<(K, ProjectionNode)> for Projection {
   fn from_iter<I: IntoIterator<Item = (K, ProjectionNode)>>(iter: I) -> Self {
      Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
   }
}

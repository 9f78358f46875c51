//! # resolver-registry
//!
//! Record types that carry named, typed async resolvers, plus the parameters
//! and projection trees those resolvers receive.
//!
//! ## Core Types
//!
//! - **[`ObjectType`]**: A record type with a field shape and a name → [`Resolver`] map
//! - **[`TypeDescriptor`]**: Capability trait any record-bearing type can implement
//! - **[`ResolverSource`]**: The "has named resolvers" capability
//! - **[`Resolver`]**: A named, declared, shareable async callable
//! - **[`ResolveParams`]**: Arguments, projection and raw query passed to a resolver
//! - **[`Projection`]**: Recursive tree of requested output fields
//! - **[`ResolveError`]**: Error type returned by resolvers
//!
//! ## Lookup Model
//!
//! - **Eager lookup**: Callers resolve a [`Resolver`] by name once, at setup time,
//!   and keep the returned handle
//! - **Cheap handles**: A [`Resolver`] is an `Arc` around its callable; cloning it
//!   never clones the underlying closure state
//! - **Read-only calls**: Invoking a resolver takes `&self`; the same handle may be
//!   called concurrently from many tasks

mod error;
mod projection;
mod resolver;
mod types;

pub use error::{ResolveError, Result};
pub use projection::{Projection, ProjectionNode};
pub use resolver::{ArgMap, ResolveFn, ResolveFuture, ResolveParams, Resolver, ResolverKind};
pub use types::{ObjectType, Record, ResolverSource, ScalarType, TypeDescriptor, TypeRef};

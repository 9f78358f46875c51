//! # pagination-toolkit
//!
//! Resolver-agnostic building blocks for offset pagination over a pair of
//! "count" and "list" resolvers.
//!
//! ## Pipeline
//!
//! 1. **[`analyze`]**: Inspect the caller's projection and decide which
//!    resolvers must run ([`Demand`])
//! 2. **[`PaginationArgs::window`]**: Validate `page`/`perPage`/`first` and
//!    resolve defaults into a [`PageWindow`]
//! 3. **[`compose_count_params`] / [`compose_list_params`]**: Build the
//!    parameters each resolver receives
//! 4. **[`assemble`]**: Trim the over-fetched list, derive [`PageInfo`] and
//!    produce the [`PaginationEnvelope`]
//!
//! Nothing in this crate performs I/O; driving the resolvers is left to the
//! caller.

mod analyzer;
mod args;
mod assemble;
mod error;
pub mod page_math;

pub use analyzer::{Demand, analyze};
pub use args::{
   PageWindow, PaginationArgs, compose_count_args, compose_count_params, compose_list_args,
   compose_list_params, list_projection,
};
pub use assemble::{PaginationEnvelope, assemble};
pub use error::{Error, Result};
pub use page_math::PageInfo;

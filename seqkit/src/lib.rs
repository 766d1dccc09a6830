//! Eager collection operations over slices and hash maps.
//!
//! The [`seq`] module holds the sequence operations: transformations
//! (`map`, `filter`, `filter_map`), aggregations (`fold`, `reduce`, `all`,
//! `any`), selections (`take`, `drop` and their `while`/`last` variants),
//! grouping (`chunked`, `chunked_by`, `windowed`, `group_by`) and pairing
//! (`zip`, `unzip`). The [`mapping`] module holds the hash map helpers.
//!
//! All operations are eager and single pass. Inputs are borrowed slices and
//! outputs freshly allocated vectors, so callers keep ownership of what they
//! pass in. The only functions that mutate their argument are
//! [`seq::reverse`], [`mapping::get_or_insert`] and
//! [`mapping::append_to_group`], and each says so in its documentation.
//!
//! Caller-supplied predicates, selectors and accumulators are invoked
//! sequentially in input order. For `fold`, `reduce` and the indexed
//! variants that left-to-right order is part of the contract.

mod error;
pub mod mapping;
pub mod seq;

pub use error::{Error, Result};
pub use seqkit_pair::Pair;

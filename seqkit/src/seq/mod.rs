//! Operations over ordered sequences.
//!
//! A sequence is any borrowed slice. Results come back as freshly allocated
//! vectors; element order is preserved unless an operation explicitly
//! reorders it. [`reverse`] is the single in-place operation.

mod aggregate;
mod chunk;
mod order;
mod select;
mod transform;
mod zip;

pub use aggregate::{all, any, fold, fold_indexed, reduce, reduce_indexed};
pub use chunk::{chunked, chunked_by, windowed};
pub use order::{reverse, reversed};
pub use select::{
    drop, drop_last, drop_last_while, drop_while, take, take_last, take_last_while, take_while,
};
pub use transform::{
    associate, distinct, distinct_by, filter, filter_indexed, filter_map, group_by, map,
    map_indexed, partition,
};
pub use zip::{unzip, zip};

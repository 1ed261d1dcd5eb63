//! Range minimum (or, with another comparator, maximum) queries over a static sequence.
//!
//! Three strategies are provided, all answering the same question,
//! "which index holds the extremal element of `[left, right]`?":
//! - [`NaiveRangeMinimumQuery`]: linear scan, no preprocessing.
//! - [`SparseTableRangeMinimumQuery`]: O(n log n) preprocessing, O(1) query.
//! - [`SegmentTreeRangeMinimumQuery`]: O(n) preprocessing, O(log n) query.
//!
//! Ties are always broken toward the leftmost index, so the three agree index for index.
//! The structures borrow the sequence and never change after construction.
#[macro_use]
extern crate serde;
extern crate num;
pub mod bit_length;
pub mod comparator;
pub mod error;
pub mod range_minimum_query;
pub mod segment_tree;
pub mod sparse_table;
pub mod validation;

pub use comparator::{Comparator, Greater, Less};
pub use error::{Result, RmqError};
pub use range_minimum_query::{naive_query, NaiveRangeMinimumQuery, RangeMinimumQuery};
pub use segment_tree::SegmentTreeRangeMinimumQuery;
pub use sparse_table::SparseTableRangeMinimumQuery;

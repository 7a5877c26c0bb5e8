//! Storage, search and sort primitives the array is built on.

pub mod buffer;
pub mod search;
pub mod sort;

pub use buffer::RawBuffer;
pub use search::{IntervalMatch, binary_search, interval_search};
pub use sort::sort_range;

//! # Dynamic Array
//!
//! A growable, contiguous array for `Copy` elements that doubles as a stack, a queue or a
//! sorted priority structure.
//!
//! This crate provides [`DynamicArray`] and [`ArrayHeap`]. The array owns exactly one
//! buffer and makes its capacity policy explicit: the buffer grows by a fixed factor on
//! overflow and shrinks to fit once utilization falls below a threshold.
//!
//! ## Key Features
//!
//! * **Explicit Capacity:** Capacity is exactly what the policy says, so growth (`×2`) and
//!   shrink (below `1/4` full) are observable and testable.
//! * **Sorted Mode:** Order-preserving insertion and duplicate detection via binary search.
//! * **Fixed Mode:** Capacity frozen at construction; inserts into a full array drop the tail.
//! * **Checked Operations:** Every contract violation is an [`ArrayError`], checked before
//!   anything is mutated.
//!
//! ## Modes
//!
//! The two mode flags are independent, giving four combinations:
//!
//! * **growable + unsorted:** stack/queue usage through `append`, `prepend`, `pop`, `pop_front`.
//! * **growable + sorted:** priority structure through `insert_sorted` and `location_of`.
//! * **fixed + unsorted:** bounded buffer; `insert_at` only.
//! * **fixed + sorted:** bounded "k smallest" set; inserting into a full array discards the largest.
//!
//! ## Examples
//!
//! ### Stack and queue
//!
//! ```rust
//! use dynamic_array::{ArrayOptions, DynamicArray};
//!
//! let mut arr: DynamicArray<i64> = DynamicArray::with_capacity(2, ArrayOptions::new()).unwrap();
//! arr.append(1).unwrap();
//! arr.append(2).unwrap();
//! arr.append(3).unwrap(); // doubles to 4
//! assert_eq!(arr.capacity(), 4);
//!
//! assert_eq!(arr.pop(), Some(3));
//! assert_eq!(arr.pop_front(), Some(1));
//! assert_eq!(arr.as_slice(), &[2]);
//! ```
//!
//! ### Sorted mode
//!
//! ```rust
//! use dynamic_array::{ArrayOptions, DynamicArray};
//!
//! let mut arr: DynamicArray<i64> = DynamicArray::with_capacity(3, ArrayOptions::new().sorted()).unwrap();
//! arr.insert_sorted(20).unwrap();
//! arr.insert_sorted(30).unwrap();
//! arr.insert_sorted(10).unwrap();
//! assert_eq!(arr.as_slice(), &[10, 20, 30]);
//! assert_eq!(arr.location_of(&20).unwrap(), Some(1));
//!
//! // Duplicate: no-op.
//! assert_eq!(arr.insert_sorted_unique(10).unwrap(), None);
//! ```
//!
//! ### Priority queue
//!
//! ```rust
//! use dynamic_array::ArrayHeap;
//!
//! let mut heap: ArrayHeap<i64> = ArrayHeap::new();
//! heap.push(5);
//! heap.push(9);
//! heap.push(1);
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.pop_min(), Some(1));
//! ```

// --- Module Declarations ---

pub mod error;
pub mod heap;
pub mod options;
pub mod primitives;
pub mod vecs;

// --- Re-exports ---

pub use error::{ArrayError, ErrorKind, Result};
pub use heap::{AnyHeap, ArrayHeap};
pub use options::{ArrayOptions, CapacityPolicy};
pub use primitives::IntervalMatch;
pub use vecs::any_vec::AnyVec;
pub use vecs::dynamic_array::DynamicArray;

#![warn(missing_docs)]

//! This crate provides a static range minimum query index. Given a sequence of `n` comparable
//! elements, the index is built once in O(n) time and space, and afterwards answers the question
//! "where is the minimum of `[l, r)`?" in constant time.
//!
//! # Data structures
//!  - [`DirectRmq`] splits the sequence into blocks of [32][rmq::BLOCK_SIZE] elements. A sparse
//!    table over the block minima answers the part of a query that covers whole blocks, and a
//!    bitmask per position answers the partial blocks at the ends of the range.
//!  - [`RmqView`] binds a [`DirectRmq`] to its sequence for convenience.
//!
//! # Borrowed data
//! The index stores positions only. The sequence is not copied, it is passed to every query
//! instead, which keeps the index small and lets the caller keep ownership of the data.
//!
//! ```rust
//! use direct_rmq::DirectRmq;
//!
//! let data = vec![9, 6, 10, 4, 0, 8, 3, 7, 1, 2, 5];
//! let rmq = DirectRmq::new(&data);
//!
//! assert_eq!(rmq.query(0, 4, &data), 3);
//! assert_eq!(rmq.query(5, 11, &data), 8);
//! ```
//!
//! # Ordering
//! What counts as the minimum is decided by a [`Compare`] implementation. The default is
//! [`NaturalOrder`], [`Reverse`] flips an order (turning the index into a range maximum index),
//! and any closure `Fn(&T, &T) -> bool` can serve as a strict "less than". If the minimum occurs
//! more than once in a range, the leftmost position is returned.
//!
//! # Concurrency
//! A built index is immutable. Queries take `&self` and never modify it, so it can be shared
//! between threads freely as long as the comparator can.

pub use crate::compare::{Compare, NaturalOrder, Reverse};
pub use rmq::direct_rmq::{DirectRmq, RmqView};
pub use rmq::RangeMinimum;

pub mod compare;
pub mod rmq;

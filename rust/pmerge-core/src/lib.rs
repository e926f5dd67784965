//! PmergeMe Core
//!
//! Ford-Johnson merge-insertion sorting of distinct, non-negative integers.
//!
//! The algorithm pairs adjacent elements, recursively sorts the larger member
//! of every pair into a main chain, then binary-inserts the smaller members in
//! an order driven by the Jacobsthal sequence. An odd element out is inserted
//! last.
//!
//! Two backings are maintained side by side, [`vector`] over `Vec` and
//! [`deque`] over `VecDeque`, so that each container can be timed in
//! isolation. They share only the data model, the Jacobsthal schedule and
//! the statistics type.
//!
//! # Example
//!
//! ```
//! use pmerge_core::MergeInsert;
//! use std::collections::VecDeque;
//!
//! let mut vec = vec![3, 5, 9, 7, 4];
//! let mut deq: VecDeque<u32> = vec.iter().copied().collect();
//!
//! vec.merge_insert_sort();
//! deq.merge_insert_sort();
//!
//! assert_eq!(vec, [3, 4, 5, 7, 9]);
//! assert!(deq.iter().eq(vec.iter()));
//! ```
//!
//! Callers must guarantee that elements are distinct and no larger than
//! [`MAX_ELEMENT`]. The core does not check either condition.

pub mod bounds;
pub mod deque;
pub mod jacobsthal;
pub mod pair;
pub mod stats;
pub mod vector;

use std::collections::VecDeque;

pub use stats::SortStats;

/// A value accepted by the sorter.
pub type Element = u32;

/// Largest value the sorter is specified for (`2^31 - 1`).
pub const MAX_ELEMENT: Element = i32::MAX as Element;

/// A container that can be sorted in place by merge-insertion.
///
/// Each implementation carries its own copy of the algorithm written against
/// its own container type.
pub trait MergeInsert {
    /// Display name of the backing container.
    const CONTAINER: &'static str;

    /// Sort the container ascending and report what it cost.
    fn merge_insert_sort(&mut self) -> SortStats;
}

impl MergeInsert for Vec<Element> {
    const CONTAINER: &'static str = "Vec";

    fn merge_insert_sort(&mut self) -> SortStats {
        vector::sort(self)
    }
}

impl MergeInsert for VecDeque<Element> {
    const CONTAINER: &'static str = "VecDeque";

    fn merge_insert_sort(&mut self) -> SortStats {
        deque::sort(self)
    }
}

#[cfg(test)]
mod tests;

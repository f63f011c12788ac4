//! D-ary heap implementation
//!
//! An array-backed heap with a configurable branching factor, usable as
//! either a min-heap or a max-heap. The binary heap is the `d = 2`
//! specialization and the default used by
//! [`PriorityQueue`](crate::queue::PriorityQueue).
//!
//! The heap stores `(priority, item)` pairs to separate the ordering key
//! from the data.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity  |
//! |----------------|-------------|
//! | `insert`       | O(log_d n)  |
//! | `extract`      | O(log_d n)  |
//! | `peek`         | O(1)        |
//! | `from_entries` | O(n)        |
//!
//! # Example
//!
//! ```rust
//! use heapgraph::dary::{DaryHeap, HeapOrder};
//!
//! let mut heap = DaryHeap::new(HeapOrder::Min, 3).unwrap();
//! heap.insert(5, "five");
//! heap.insert(1, "one");
//! heap.insert(7, "seven");
//!
//! assert_eq!(heap.peek().unwrap(), (&1, &"one"));
//! assert_eq!(heap.extract().unwrap(), (1, "one"));
//! assert_eq!(heap.extract().unwrap(), (5, "five"));
//! ```

use crate::error::{Error, Result};

/// Selects which key dominates: in a [`Min`](HeapOrder::Min) heap every
/// parent key is less than or equal to its children's keys, in a
/// [`Max`](HeapOrder::Max) heap greater than or equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Parent key <= child key; `extract` returns the minimum
    #[default]
    Min,
    /// Parent key >= child key; `extract` returns the maximum
    Max,
}

/// An array-backed D-ary heap of `(priority, item)` pairs
///
/// The backing vector is dense: the children of index `i` are
/// `d*i + 1 ..= d*i + d`, and for every non-root index the parent's key
/// dominates the child's key under the configured [`HeapOrder`].
///
/// Duplicate priorities and duplicate items are both legal; the heap imposes
/// no uniqueness constraint.
#[derive(Debug, Clone)]
pub struct DaryHeap<T, P: Ord> {
    data: Vec<(P, T)>,
    order: HeapOrder,
    arity: usize,
}

impl<T, P: Ord> DaryHeap<T, P> {
    /// Creates an empty heap with the given order and branching factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `arity < 2`.
    pub fn new(order: HeapOrder, arity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(Error::InvalidArgument(format!(
                "heap arity must be at least 2, got {arity}"
            )));
        }
        Ok(DaryHeap {
            data: Vec::new(),
            order,
            arity,
        })
    }

    /// Creates an empty binary heap, the `d = 2` specialization.
    pub fn binary(order: HeapOrder) -> Self {
        DaryHeap {
            data: Vec::new(),
            order,
            arity: 2,
        }
    }

    /// Bulk-builds a heap from initial `(priority, item)` pairs in O(n).
    ///
    /// The heap property is established bottom-up by sifting down every
    /// parent index, starting from the last one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `arity < 2`.
    pub fn from_entries<I>(entries: I, order: HeapOrder, arity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (P, T)>,
    {
        let mut heap = Self::new(order, arity)?;
        heap.data = entries.into_iter().collect();
        if heap.data.len() > 1 {
            let last_parent = (heap.data.len() - 2) / arity;
            for i in (0..=last_parent).rev() {
                heap.sift_down(i);
            }
        }
        Ok(heap)
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the branching factor.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns whether this is a min- or max-heap.
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Inserts an element, sifting it up until its parent dominates it.
    pub fn insert(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root's priority and item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn peek(&self) -> Result<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t)).ok_or(Error::EmptyHeap)
    }

    /// Removes and returns the root element.
    ///
    /// The last occupied slot is swapped into the root and sifted down.
    /// Extracting from a single-element heap yields that element and leaves
    /// the heap empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHeap`] if the heap is empty.
    pub fn extract(&mut self) -> Result<(P, T)> {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// True if `a` dominates `b` strictly, i.e. swapping them is required
    /// to restore the heap property.
    fn strictly_dominates(&self, a: &P, b: &P) -> bool {
        match self.order {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }

    /// Move the element at `i` up until its parent dominates it.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / self.arity;
            if self.strictly_dominates(&self.data[i].0, &self.data[parent].0) {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `i` down, at each level swapping with the child
    /// that most dominates. Ties between children resolve to the lowest
    /// index (left-to-right scan with strict comparison).
    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let first_child = self.arity * i + 1;
            if first_child >= len {
                break;
            }
            let last_child = (self.arity * i + self.arity).min(len - 1);

            let mut target = i;
            for j in first_child..=last_child {
                if self.strictly_dominates(&self.data[j].0, &self.data[target].0) {
                    target = j;
                }
            }

            if target == i {
                break;
            }
            self.data.swap(i, target);
            i = target;
        }
    }
}

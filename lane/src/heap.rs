//  Copyright 2024 lane Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Binary heap keyed by a priority under a caller supplied ordering.
//!
//! Positions are 1-indexed: the root is at `1` and the parent of `k` is `k / 2`. Position `k` is stored at
//! `items[k - 1]`.

use lane_common::strict_assert;

/// Ordering of the priorities of a heap.
///
/// `less(lhs, rhs)` returns `true` if `lhs` must sit below `rhs` in the heap. It must be a strict total order.
pub trait Compare<P> {
    /// Check if `lhs` orders before `rhs`, i.e. `rhs` is closer to the root.
    fn less(&self, lhs: &P, rhs: &P) -> bool;
}

/// Maximum oriented ordering, the root holds the greatest priority.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Max;

/// Minimum oriented ordering, the root holds the least priority.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Min;

impl<P: Ord> Compare<P> for Max {
    fn less(&self, lhs: &P, rhs: &P) -> bool {
        lhs < rhs
    }
}

impl<P: Ord> Compare<P> for Min {
    fn less(&self, lhs: &P, rhs: &P) -> bool {
        lhs > rhs
    }
}

impl<P, F> Compare<P> for F
where
    F: Fn(&P, &P) -> bool,
{
    fn less(&self, lhs: &P, rhs: &P) -> bool {
        self(lhs, rhs)
    }
}

struct Entry<T, P> {
    value: T,
    priority: P,
}

/// A binary heap of values ordered by their priorities.
pub struct BinaryHeap<T, P, C = Max> {
    items: Vec<Entry<T, P>>,
    compare: C,
}

impl<T, P, C> BinaryHeap<T, P, C>
where
    C: Compare<P>,
{
    /// Create an empty heap ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self::with_capacity(0, compare)
    }

    /// Create an empty heap ordered by `compare` with room for `capacity` items.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Insert `value` with `priority`.
    pub fn push(&mut self, value: T, priority: P) {
        self.items.push(Entry { value, priority });
        self.swim(self.len());
    }

    /// Remove and return the root item.
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.is_empty() {
            return None;
        }

        self.exch(1, self.len());
        let root = self.items.pop()?;
        self.sink(1);

        Some((root.value, root.priority))
    }

    /// Get the references of the root value and its priority.
    pub fn head(&self) -> Option<(&T, &P)> {
        self.items.first().map(|entry| (&entry.value, &entry.priority))
    }

    /// Get the count of items in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the ordering of the heap.
    pub fn compare(&self) -> &C {
        &self.compare
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.less(k / 2, k) {
            self.exch(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            // Prefer the right child only if it is strictly better.
            if j < n && self.less(j, j + 1) {
                j += 1;
            }
            if !self.less(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }

    fn less(&self, lhs: usize, rhs: usize) -> bool {
        strict_assert!(lhs >= 1 && rhs >= 1);
        self.compare
            .less(&self.items[lhs - 1].priority, &self.items[rhs - 1].priority)
    }

    fn exch(&mut self, lhs: usize, rhs: usize) {
        self.items.swap(lhs - 1, rhs - 1);
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (2..=self.len()).all(|k| !self.less(k / 2, k))
    }
}

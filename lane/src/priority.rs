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

use parking_lot::RwLock;

use crate::heap::{BinaryHeap, Compare, Max, Min};

/// A thread-safe priority queue.
///
/// The ordering given at construction decides which item sits at the head: [`Max`] keeps the greatest priority
/// there, [`Min`] the least, and any `Fn(&P, &P) -> bool` works as a custom ordering.
pub struct PriorityQueue<T, P, C = Max> {
    heap: RwLock<BinaryHeap<T, P, C>>,
}

impl<T, P: Ord> PriorityQueue<T, P, Max> {
    /// Create a maximum oriented priority queue.
    pub fn max() -> Self {
        Self::new(Max)
    }
}

impl<T, P: Ord> PriorityQueue<T, P, Min> {
    /// Create a minimum oriented priority queue.
    pub fn min() -> Self {
        Self::new(Min)
    }
}

impl<T, P, C> PriorityQueue<T, P, C>
where
    C: Compare<P>,
{
    /// Create a priority queue ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self {
            heap: RwLock::new(BinaryHeap::new(compare)),
        }
    }

    /// Insert `value` with `priority` in O(log n).
    pub fn push(&self, value: T, priority: P) {
        self.heap.write().push(value, priority);
    }

    /// Remove and return the head value with its priority in O(log n).
    pub fn pop(&self) -> Option<(T, P)> {
        self.heap.write().pop()
    }

    /// Get the count of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.read().len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.read().is_empty()
    }
}

impl<T: Clone, P: Clone, C> PriorityQueue<T, P, C>
where
    C: Compare<P>,
{
    /// Get the head value with its priority without removing it.
    pub fn head(&self) -> Option<(T, P)> {
        self.heap
            .read()
            .head()
            .map(|(value, priority)| (value.clone(), priority.clone()))
    }
}

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

use crate::deque::Deque;

/// A thread-safe FIFO queue.
///
/// Items are enqueued at the front of the underlying [`Deque`] and dequeued from its back.
pub struct Queue<T> {
    container: Deque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { container: Deque::new() }
    }

    /// Add an item at the back of the queue.
    pub fn enqueue(&self, item: T) {
        self.container.prepend(item);
    }

    /// Remove and return the item at the head of the queue.
    pub fn dequeue(&self) -> Option<T> {
        self.container.pop()
    }

    /// Get the count of items in the queue.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T: Clone> Queue<T> {
    /// Get the item at the head of the queue without removing it.
    pub fn head(&self) -> Option<T> {
        self.container.last()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueue the items in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let queue = Self::new();
        iter.into_iter().for_each(|item| queue.enqueue(item));
        queue
    }
}

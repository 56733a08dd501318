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

use lane_common::error::Full;
use parking_lot::RwLock;

use crate::{config::BoundedDequeConfig, list::List};

/// A thread-safe double-ended queue.
///
/// Every operation is O(1) and holds the lock of the deque for its whole duration.
pub struct Deque<T> {
    container: RwLock<List<T>>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Create an empty deque.
    pub fn new() -> Self {
        Self {
            container: RwLock::new(List::new()),
        }
    }

    /// Insert an item at the back.
    pub fn append(&self, item: T) {
        self.container.write().push_back(item);
    }

    /// Insert an item at the front.
    pub fn prepend(&self, item: T) {
        self.container.write().push_front(item);
    }

    /// Remove and return the item at the back.
    pub fn pop(&self) -> Option<T> {
        self.container.write().pop_back()
    }

    /// Remove and return the item at the front.
    pub fn shift(&self) -> Option<T> {
        self.container.write().pop_front()
    }

    /// Get the count of items in the deque.
    pub fn len(&self) -> usize {
        self.container.read().len()
    }

    /// Check if the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.container.read().is_empty()
    }

    /// Insert `item` at the back if `admit` accepts the current length, under the same write lock.
    fn append_if(&self, item: T, admit: impl FnOnce(usize) -> bool) -> Result<(), Full<T>> {
        let mut container = self.container.write();
        if !admit(container.len()) {
            return Err(Full(item));
        }
        container.push_back(item);
        Ok(())
    }

    /// Insert `item` at the front if `admit` accepts the current length, under the same write lock.
    fn prepend_if(&self, item: T, admit: impl FnOnce(usize) -> bool) -> Result<(), Full<T>> {
        let mut container = self.container.write();
        if !admit(container.len()) {
            return Err(Full(item));
        }
        container.push_front(item);
        Ok(())
    }
}

impl<T: Clone> Deque<T> {
    /// Get the item at the front without removing it.
    pub fn first(&self) -> Option<T> {
        let container = self.container.read();
        container.front().and_then(|handle| container.get(handle)).cloned()
    }

    /// Get the item at the back without removing it.
    pub fn last(&self) -> Option<T> {
        let container = self.container.read();
        container.back().and_then(|handle| container.get(handle)).cloned()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    /// Collect the items into a deque, the first item at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            container: RwLock::new(iter.into_iter().collect()),
        }
    }
}

/// A thread-safe double-ended queue that holds at most a fixed count of items.
///
/// Insertions into a full deque are rejected. Unlike [`CircularBuffer`](crate::CircularBuffer), nothing already
/// stored is ever evicted.
pub struct BoundedDeque<T> {
    deque: Deque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    /// Create an empty deque holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            deque: Deque::new(),
            capacity,
        }
    }

    /// Create an empty deque sized by `config`.
    pub fn with_config(config: &BoundedDequeConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Insert an item at the back. Returns `false` if the deque is full.
    pub fn append(&self, item: T) -> bool {
        self.try_append(item).is_ok()
    }

    /// Insert an item at the front. Returns `false` if the deque is full.
    pub fn prepend(&self, item: T) -> bool {
        self.try_prepend(item).is_ok()
    }

    /// Insert an item at the back, or hand it back if the deque is full.
    pub fn try_append(&self, item: T) -> Result<(), Full<T>> {
        self.deque.append_if(item, |len| self.admit(len))
    }

    /// Insert an item at the front, or hand it back if the deque is full.
    pub fn try_prepend(&self, item: T) -> Result<(), Full<T>> {
        self.deque.prepend_if(item, |len| self.admit(len))
    }

    /// Remove and return the item at the back.
    pub fn pop(&self) -> Option<T> {
        self.deque.pop()
    }

    /// Remove and return the item at the front.
    pub fn shift(&self) -> Option<T> {
        self.deque.shift()
    }

    /// Get the count of items in the deque.
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Check if the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Check if the deque holds as many items as its capacity.
    pub fn is_full(&self) -> bool {
        self.deque.len() >= self.capacity
    }

    /// Get the capacity of the deque.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn admit(&self, len: usize) -> bool {
        if len >= self.capacity {
            tracing::debug!(capacity = self.capacity, "[deque]: insertion rejected at capacity");
            return false;
        }
        true
    }
}

impl<T: Clone> BoundedDeque<T> {
    /// Get the item at the front without removing it.
    pub fn first(&self) -> Option<T> {
        self.deque.first()
    }

    /// Get the item at the back without removing it.
    pub fn last(&self) -> Option<T> {
        self.deque.last()
    }
}

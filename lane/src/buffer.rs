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

use crate::{config::RingBufferConfig, ring::RingBuffer};

/// A thread-safe ring buffer of a fixed capacity.
///
/// When the buffer is full, a put overwrites the oldest item instead of failing.
pub struct CircularBuffer<T> {
    inner: RwLock<RingBuffer<T>>,
}

impl<T> CircularBuffer<T> {
    /// Create a circular buffer holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(RingBuffer::new(capacity)),
        }
    }

    /// Create a circular buffer sized by `config`.
    pub fn with_config(config: &RingBufferConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Put an item into the buffer, overwriting the oldest item if full.
    ///
    /// Returns `false` only if the capacity of the buffer is zero.
    pub fn put(&self, item: T) -> bool {
        self.try_put(item).is_ok()
    }

    /// Put an item into the buffer, overwriting the oldest item if full.
    ///
    /// Returns the overwritten item, or hands `item` back if the capacity of the buffer is zero.
    pub fn try_put(&self, item: T) -> Result<Option<T>, Full<T>> {
        self.inner.write().put(item)
    }

    /// Remove and return the oldest item.
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    /// Remove all items.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Get the count of items in the buffer.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Check if the buffer is full.
    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }
}

impl<T: Clone> CircularBuffer<T> {
    /// Get the oldest item without removing it.
    pub fn peek(&self) -> Option<T> {
        self.inner.read().peek().cloned()
    }

    /// Get all items from the oldest to the newest without removing them.
    pub fn view(&self) -> Vec<T> {
        self.inner.read().iter().cloned().collect()
    }
}

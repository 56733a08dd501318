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

//! Fixed-capacity ring buffer that overwrites its oldest item when full.

use lane_common::{error::Full, strict_assert};

/// A ring buffer of a fixed capacity.
///
/// The buffer is empty when the cursors coincide and `full` is unset, and full when they coincide and `full` is set.
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,

    /// Position of the next item to read.
    read: usize,
    /// Position of the next slot to write.
    write: usize,

    full: bool,
}

impl<T> RingBuffer<T> {
    /// Create a ring buffer holding at most `capacity` items.
    ///
    /// A zero capacity is allowed and rejects every put.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
            full: false,
        }
    }

    /// Put an item at the write cursor.
    ///
    /// If the buffer is full, the oldest item is overwritten and returned as `Ok(Some(_))`. Only a zero-capacity
    /// buffer rejects the item.
    pub fn put(&mut self, item: T) -> Result<Option<T>, Full<T>> {
        let capacity = self.capacity();
        if capacity == 0 {
            tracing::trace!("[ring]: put rejected by zero capacity buffer");
            return Err(Full(item));
        }

        let evicted = if self.full {
            let evicted = self.slots[self.read].take();
            self.read = (self.read + 1) % capacity;
            tracing::trace!(capacity, "[ring]: overwrite the oldest item");
            evicted
        } else {
            None
        };

        self.slots[self.write] = Some(item);
        self.write = (self.write + 1) % capacity;
        if self.write == self.read {
            self.full = true;
        }

        Ok(evicted)
    }

    /// Pop the item at the read cursor.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.read].take();
        strict_assert!(item.is_some());
        self.read = (self.read + 1) % self.capacity();
        self.full = false;

        item
    }

    /// Get the reference of the item at the read cursor.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Iterate the items from the oldest to the newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (head, tail): (&[Option<T>], &[Option<T>]) = if self.is_empty() {
            (&[], &[])
        } else if !self.full && self.write > self.read {
            (&self.slots[self.read..self.write], &[])
        } else {
            (&self.slots[self.read..], &self.slots[..self.write])
        };
        head.iter().chain(tail).flatten()
    }

    /// Drop all items and reset the cursors. The slots are kept allocated.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
        self.full = false;
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Get the count of items in the buffer.
    pub fn len(&self) -> usize {
        if self.full {
            return self.capacity();
        }
        if self.write >= self.read {
            self.write - self.read
        } else {
            self.capacity() - self.read + self.write
        }
    }

    /// Check if the buffer holds no item.
    pub fn is_empty(&self) -> bool {
        !self.full && self.read == self.write
    }

    /// Check if the next put overwrites the oldest item.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_zero_capacity() {
        let mut rb = RingBuffer::new(0);

        assert_eq!(rb.put(1), Err(Full(1)));
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert_eq!(rb.len(), 0);
        assert!(rb.pop().is_none());
        assert!(rb.peek().is_none());
        assert_eq!(rb.iter().count(), 0);
    }

    #[test]
    fn test_fill_up_to_capacity() {
        let mut rb = RingBuffer::new(3);

        for (i, item) in [1, 2, 3].into_iter().enumerate() {
            assert!(!rb.is_full());
            assert_eq!(rb.put(item), Ok(None));
            assert_eq!(rb.len(), i + 1);
        }
        assert!(rb.is_full());
        assert_eq!(rb.iter().copied().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_overwrite() {
        let mut rb = RingBuffer::new(3);

        for item in 1..=3 {
            rb.put(item).unwrap();
        }
        assert_eq!(rb.put(4), Ok(Some(1)));
        assert_eq!(rb.len(), 3);
        assert!(rb.is_full());
        assert_eq!(rb.iter().copied().collect_vec(), vec![2, 3, 4]);
        assert_eq!(rb.peek(), Some(&2));

        assert_eq!(rb.put(5), Ok(Some(2)));
        assert_eq!(rb.put(6), Ok(Some(3)));
        assert_eq!(rb.put(7), Ok(Some(4)));
        assert_eq!(rb.iter().copied().collect_vec(), vec![5, 6, 7]);
    }

    #[test]
    fn test_pop() {
        let mut rb = RingBuffer::new(4);
        rb.put(1).unwrap();
        rb.put(2).unwrap();

        assert_eq!(rb.pop(), Some(1));
        assert_eq!(rb.len(), 1);
        assert_eq!(rb.pop(), Some(2));
        assert!(rb.is_empty());
        assert!(rb.pop().is_none());

        // Fill again after draining, the cursors now start mid-buffer.
        for item in 3..=6 {
            rb.put(item).unwrap();
        }
        assert!(rb.is_full());
        assert_eq!(rb.pop(), Some(3));
        assert!(!rb.is_full());
        assert_eq!(rb.iter().copied().collect_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn test_view_with_wrap_around() {
        let mut rb = RingBuffer::new(4);
        for item in 0..4 {
            rb.put(item).unwrap();
        }
        rb.pop();
        rb.pop();
        rb.put(4).unwrap();

        // read = 2, write = 1: two physical segments.
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.iter().copied().collect_vec(), vec![2, 3, 4]);
        assert_eq!(rb.iter().rev().copied().collect_vec(), vec![4, 3, 2]);
    }

    #[test]
    fn test_clear() {
        let mut rb = RingBuffer::new(2);
        rb.put("a".to_string()).unwrap();
        rb.put("b".to_string()).unwrap();
        rb.put("c".to_string()).unwrap();

        rb.clear();
        assert!(rb.is_empty());
        assert_eq!(rb.capacity(), 2);
        assert!(rb.slots.iter().all(Option::is_none));

        rb.put("d".to_string()).unwrap();
        assert_eq!(rb.peek().map(String::as_str), Some("d"));
    }

    #[test]
    fn test_len_matches_model() {
        let capacity = 5;
        let mut rb = RingBuffer::new(capacity);
        let mut model = std::collections::VecDeque::new();

        for i in 0..200 {
            if i % 3 == 2 {
                assert_eq!(rb.pop(), model.pop_front());
            } else {
                if model.len() == capacity {
                    model.pop_front();
                }
                model.push_back(i);
                rb.put(i).unwrap();
            }
            assert_eq!(rb.len(), model.len());
            assert_eq!(rb.is_full(), model.len() == capacity);
            assert_eq!(rb.is_empty(), model.is_empty());
            assert!(rb.iter().eq(model.iter()));
        }
    }
}

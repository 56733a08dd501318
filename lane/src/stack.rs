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

/// A thread-safe LIFO stack.
///
/// The top of the stack is the front of the underlying [`Deque`].
pub struct Stack<T> {
    container: Deque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { container: Deque::new() }
    }

    /// Push an item on the top of the stack.
    pub fn push(&self, item: T) {
        self.container.prepend(item);
    }

    /// Remove and return the item on the top of the stack.
    pub fn pop(&self) -> Option<T> {
        self.container.shift()
    }

    /// Get the count of items in the stack.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T: Clone> Stack<T> {
    /// Get the item on the top of the stack without removing it.
    pub fn head(&self) -> Option<T> {
        self.container.first()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Stack the items as-is: the first item is the top of the stack.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            container: iter.into_iter().collect(),
        }
    }
}

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

//! Concurrency-safe containers: a ring buffer, a double linked list, a priority queue and deques built on them.
//!
//! The engines ([`list`], [`ring`], [`heap`]) are plain sequential data structures. The containers wrap exactly
//! one engine in one [`parking_lot::RwLock`] each: read-only operations take the lock shared, mutating operations
//! take it exclusively, and no operation ever holds two locks.
//!
//! ```
//! use lane::{BoundedDeque, CircularBuffer, PriorityQueue};
//!
//! let buffer = CircularBuffer::new(3);
//! for item in 1..=4 {
//!     buffer.put(item);
//! }
//! assert_eq!(buffer.view(), vec![2, 3, 4]);
//!
//! let deque = BoundedDeque::new(1);
//! assert!(deque.append("first"));
//! assert!(!deque.append("second"));
//!
//! let pq = PriorityQueue::min();
//! pq.push("later", 2);
//! pq.push("sooner", 1);
//! assert_eq!(pq.pop(), Some(("sooner", 1)));
//! ```

mod buffer;
mod config;
mod deque;
pub mod heap;
pub mod list;
mod priority;
mod queue;
pub mod ring;
mod stack;

pub use buffer::CircularBuffer;
pub use config::{BoundedDequeConfig, RingBufferConfig};
pub use deque::{BoundedDeque, Deque};
pub use heap::{Compare, Max, Min};
pub use lane_common::error::Full;
pub use priority::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

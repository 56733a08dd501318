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

use serde::{Deserialize, Serialize};

/// Sizing of a [`CircularBuffer`](crate::CircularBuffer).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingBufferConfig {
    /// Count of items the buffer holds before it overwrites the oldest one.
    ///
    /// A zero capacity rejects every put.
    pub capacity: usize,
}

/// Sizing of a [`BoundedDeque`](crate::BoundedDeque).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedDequeConfig {
    /// Count of items the deque holds before it rejects insertions.
    pub capacity: usize,
}

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

use std::fmt::{Debug, Display, Formatter};

/// The container is at capacity and rejected the item.
///
/// The rejected item is handed back to the caller, who decides whether to retry or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the item that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Display for Full<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "container is at capacity")
    }
}

impl<T: Debug> std::error::Error for Full<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        let err = Full("item");
        assert_eq!(err.to_string(), "container is at capacity");
        assert_eq!(err.into_inner(), "item");

        let boxed: Box<dyn std::error::Error> = Box::new(Full(42));
        assert_eq!(boxed.to_string(), "container is at capacity");
    }
}

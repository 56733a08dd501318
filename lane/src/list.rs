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

//! Sentinel-rooted double linked list backed by a slab arena.
//!
//! Nodes live in a [`Slab`] and link to each other by slab key. The sentinel always occupies key `0`, so `next` and
//! `prev` of every node (sentinel included) always point at a live node and the links form a closed ring.
//!
//! A [`Handle`] identifies a node by its slab key plus the id of the owning list and a stamp unique within that
//! list. A handle is only honored by the list that created it and only while its node is linked, so handles of
//! removed nodes and handles of other lists are rejected instead of aliasing a reused slab slot.

use std::{
    fmt::Debug,
    iter::FusedIterator,
    sync::atomic::{AtomicU64, Ordering},
};

use lane_common::{strict_assert, strict_assert_eq};
use slab::Slab;

/// Slab key of the sentinel node.
const ROOT: usize = 0;

static LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Handle of a node linked into a [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    list: u64,
    key: usize,
    stamp: u64,
}

struct Node<T> {
    prev: usize,
    next: usize,
    stamp: u64,

    data: Option<T>,
}

impl<T> Node<T> {
    fn root() -> Self {
        Self {
            prev: ROOT,
            next: ROOT,
            stamp: 0,
            data: None,
        }
    }
}

/// A double linked list with O(1) insertion, removal and relocation by [`Handle`].
pub struct List<T> {
    id: u64,
    slab: Slab<Node<T>>,
    stamp: u64,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` items before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slab = Slab::with_capacity(capacity.saturating_add(1));
        let root = slab.insert(Node::root());
        strict_assert_eq!(root, ROOT);
        Self {
            id: LIST_ID.fetch_add(1, Ordering::Relaxed),
            slab,
            stamp: 1,
            len: 0,
        }
    }

    /// Get the length of the double linked list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the double linked list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all items. Every handle issued before becomes foreign to the list.
    pub fn clear(&mut self) {
        self.slab.clear();
        let root = self.slab.insert(Node::root());
        strict_assert_eq!(root, ROOT);
        self.len = 0;
    }

    /// Get the handle of the first item, or `None` if the list is empty.
    pub fn front(&self) -> Option<Handle> {
        self.boundary(self.node(ROOT).next)
    }

    /// Get the handle of the last item, or `None` if the list is empty.
    pub fn back(&self) -> Option<Handle> {
        self.boundary(self.node(ROOT).prev)
    }

    /// Get the handle of the item after `handle`.
    ///
    /// Returns `None` if `handle` is the last item or does not belong to the list.
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        if !self.contains(handle) {
            return None;
        }
        self.boundary(self.node(handle.key).next)
    }

    /// Get the handle of the item before `handle`.
    ///
    /// Returns `None` if `handle` is the first item or does not belong to the list.
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        if !self.contains(handle) {
            return None;
        }
        self.boundary(self.node(handle.key).prev)
    }

    /// Check if `handle` refers to an item currently linked into this list.
    pub fn contains(&self, handle: Handle) -> bool {
        handle.list == self.id
            && handle.key != ROOT
            && self.slab.get(handle.key).is_some_and(|node| node.stamp == handle.stamp)
    }

    /// Get the reference of the item behind `handle`.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        if !self.contains(handle) {
            return None;
        }
        self.node(handle.key).data.as_ref()
    }

    /// Get the mutable reference of the item behind `handle`.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        if !self.contains(handle) {
            return None;
        }
        self.node_mut(handle.key).data.as_mut()
    }

    /// Push an item to the first position of the double linked list.
    pub fn push_front(&mut self, data: T) -> Handle {
        self.insert_value(data, ROOT)
    }

    /// Push an item to the last position of the double linked list.
    pub fn push_back(&mut self, data: T) -> Handle {
        let at = self.node(ROOT).prev;
        self.insert_value(data, at)
    }

    /// Insert an item immediately before `mark`.
    ///
    /// Returns `None` and drops nothing into the list if `mark` does not belong to it.
    pub fn insert_before(&mut self, data: T, mark: Handle) -> Option<Handle> {
        if !self.contains(mark) {
            tracing::trace!(?mark, "[list]: insert before a foreign mark ignored");
            return None;
        }
        let at = self.node(mark.key).prev;
        Some(self.insert_value(data, at))
    }

    /// Insert an item immediately after `mark`.
    ///
    /// Returns `None` and drops nothing into the list if `mark` does not belong to it.
    pub fn insert_after(&mut self, data: T, mark: Handle) -> Option<Handle> {
        if !self.contains(mark) {
            tracing::trace!(?mark, "[list]: insert after a foreign mark ignored");
            return None;
        }
        Some(self.insert_value(data, mark.key))
    }

    /// Unlink the item behind `handle` and return it.
    ///
    /// Returns `None` and leaves the list untouched if `handle` does not belong to the list.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        if !self.contains(handle) {
            tracing::trace!(?handle, "[list]: remove of a foreign handle ignored");
            return None;
        }
        self.unlink(handle.key);
        self.len -= 1;

        let node = self.slab.remove(handle.key);
        strict_assert_eq!(self.slab.len(), self.len + 1);
        node.data
    }

    /// Pop an item from the first position of the double linked list.
    pub fn pop_front(&mut self) -> Option<T> {
        let handle = self.front()?;
        self.remove(handle)
    }

    /// Pop an item from the last position of the double linked list.
    pub fn pop_back(&mut self) -> Option<T> {
        let handle = self.back()?;
        self.remove(handle)
    }

    /// Move the item behind `handle` to the first position.
    ///
    /// No-op if it is already there or does not belong to the list.
    pub fn move_to_front(&mut self, handle: Handle) {
        if !self.contains(handle) || self.node(ROOT).next == handle.key {
            return;
        }
        self.relink(handle.key, ROOT);
    }

    /// Move the item behind `handle` to the last position.
    ///
    /// No-op if it is already there or does not belong to the list.
    pub fn move_to_back(&mut self, handle: Handle) {
        let at = self.node(ROOT).prev;
        if !self.contains(handle) || at == handle.key {
            return;
        }
        self.relink(handle.key, at);
    }

    /// Move the item behind `handle` immediately before `mark`.
    ///
    /// No-op if `handle == mark` or either of them does not belong to the list.
    pub fn move_before(&mut self, handle: Handle, mark: Handle) {
        if handle == mark || !self.contains(handle) || !self.contains(mark) {
            return;
        }
        let at = self.node(mark.key).prev;
        self.relink(handle.key, at);
    }

    /// Move the item behind `handle` immediately after `mark`.
    ///
    /// No-op if `handle == mark` or either of them does not belong to the list.
    pub fn move_after(&mut self, handle: Handle, mark: Handle) {
        if handle == mark || !self.contains(handle) || !self.contains(mark) {
            return;
        }
        self.relink(handle.key, mark.key);
    }

    /// Get the item reference iterator of the double linked list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.node(ROOT).next,
            back: self.node(ROOT).prev,
            remaining: self.len,
            list: self,
        }
    }

    fn boundary(&self, key: usize) -> Option<Handle> {
        match key {
            ROOT => None,
            key => Some(self.handle(key)),
        }
    }

    fn handle(&self, key: usize) -> Handle {
        Handle {
            list: self.id,
            key,
            stamp: self.node(key).stamp,
        }
    }

    fn node(&self, key: usize) -> &Node<T> {
        &self.slab[key]
    }

    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        &mut self.slab[key]
    }

    fn insert_value(&mut self, data: T, at: usize) -> Handle {
        let stamp = self.stamp;
        self.stamp += 1;

        let key = self.slab.insert(Node {
            prev: ROOT,
            next: ROOT,
            stamp,
            data: Some(data),
        });
        self.link_after(key, at);
        self.len += 1;

        strict_assert_eq!(self.slab.len(), self.len + 1);

        Handle {
            list: self.id,
            key,
            stamp,
        }
    }

    /// Link the detached node `key` right after `at`.
    fn link_after(&mut self, key: usize, at: usize) {
        let next = self.node(at).next;

        let node = self.node_mut(key);
        node.prev = at;
        node.next = next;

        self.node_mut(at).next = key;
        self.node_mut(next).prev = key;
    }

    /// Detach the node `key` from its neighbours, which are linked to each other.
    fn unlink(&mut self, key: usize) {
        strict_assert!(key != ROOT);

        let Node { prev, next, .. } = *self.node(key);
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;

        let node = self.node_mut(key);
        node.prev = ROOT;
        node.next = ROOT;
    }

    fn relink(&mut self, key: usize, at: usize) {
        if key == at {
            return;
        }
        self.unlink(key);
        self.link_after(key, at);
    }
}

impl<T: Clone> List<T> {
    /// Insert a copy of every item of `other` at the back, preserving their order.
    pub fn push_back_list(&mut self, other: &List<T>) {
        for data in other.iter() {
            self.push_back(data.clone());
        }
    }

    /// Insert a copy of every item of `other` at the front, preserving their order.
    pub fn push_front_list(&mut self, other: &List<T>) {
        for data in other.iter().rev() {
            self.push_front(data.clone());
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push_back(data);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Item reference iterator of the double linked list.
pub struct Iter<'a, T> {
    front: usize,
    back: usize,
    remaining: usize,
    list: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        node.data.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        node.data.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use itertools::Itertools;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;

    /// Walk the ring from the sentinel in both directions and check it closes after exactly `len` steps.
    fn assert_ring<T>(l: &List<T>) {
        let mut key = ROOT;
        for _ in 0..l.len() {
            key = l.node(key).next;
            assert_ne!(key, ROOT);
        }
        assert_eq!(l.node(key).next, ROOT);

        for _ in 0..l.len() {
            key = l.node(key).prev;
        }
        assert_eq!(key, ROOT);
        assert_eq!(l.slab.len(), l.len() + 1);
    }

    #[test]
    fn test_list_simple() {
        let mut l = List::new();

        l.push_back(2);
        l.push_front(1);
        l.push_back(3);

        assert_eq!(l.iter().copied().collect_vec(), vec![1, 2, 3]);
        assert_eq!(l.iter().rev().copied().collect_vec(), vec![3, 2, 1]);
        assert_eq!(l.len(), 3);

        let h2 = l.next(l.front().unwrap()).unwrap();
        assert_eq!(l.get(h2), Some(&2));
        assert_eq!(l.remove(h2), Some(2));
        assert_eq!(l.iter().copied().collect_vec(), vec![1, 3]);
        assert_eq!(l.len(), 2);

        assert_eq!(l.pop_back(), Some(3));
        assert_eq!(l.pop_front(), Some(1));
        assert!(l.is_empty());
        assert!(l.front().is_none());
        assert!(l.back().is_none());
        assert!(l.pop_front().is_none());
        assert_ring(&l);
    }

    #[test]
    fn test_insert_before_after() {
        let mut l = List::new();
        let b = l.push_back('b');
        let d = l.push_back('d');

        let a = l.insert_before('a', b).unwrap();
        let c = l.insert_after('c', b).unwrap();
        l.insert_after('e', d).unwrap();

        assert_eq!(l.iter().collect::<String>(), "abcde");
        assert_eq!(l.front(), Some(a));
        assert_eq!(l.prev(c), Some(b));
        assert_eq!(l.prev(a), None);
        assert_eq!(l.next(l.back().unwrap()), None);
        assert_ring(&l);
    }

    #[test]
    fn test_foreign_handles() {
        let mut l1 = List::new();
        let mut l2 = List::new();
        let h1 = l1.push_back(1);
        let h2 = l2.push_back(2);

        assert!(l1.insert_before(10, h2).is_none());
        assert!(l1.insert_after(10, h2).is_none());
        assert!(l1.remove(h2).is_none());
        assert!(l1.get(h2).is_none());
        assert_eq!(l1.len(), 1);
        assert_eq!(l2.len(), 1);

        l1.move_to_front(h2);
        l1.move_before(h1, h2);
        l1.move_after(h2, h1);
        assert_eq!(l1.iter().copied().collect_vec(), vec![1]);
        assert_eq!(l2.iter().copied().collect_vec(), vec![2]);

        // A removed node is no longer a member, even after its slot is reused.
        assert_eq!(l1.remove(h1), Some(1));
        assert!(l1.remove(h1).is_none());
        let h3 = l1.push_back(3);
        assert!(!l1.contains(h1));
        assert!(l1.get(h1).is_none());
        assert_eq!(l1.get(h3), Some(&3));
        assert_ring(&l1);
    }

    #[test]
    fn test_moves() {
        let mut l = List::new();
        let hs = (0..5).map(|i| l.push_back(i)).collect_vec();

        l.move_to_front(hs[0]);
        assert_eq!(l.iter().copied().collect_vec(), vec![0, 1, 2, 3, 4]);

        l.move_to_back(hs[4]);
        assert_eq!(l.iter().copied().collect_vec(), vec![0, 1, 2, 3, 4]);

        l.move_to_front(hs[3]);
        assert_eq!(l.iter().copied().collect_vec(), vec![3, 0, 1, 2, 4]);

        l.move_to_back(hs[0]);
        assert_eq!(l.iter().copied().collect_vec(), vec![3, 1, 2, 4, 0]);

        l.move_before(hs[0], hs[1]);
        assert_eq!(l.iter().copied().collect_vec(), vec![3, 0, 1, 2, 4]);

        l.move_after(hs[3], hs[4]);
        assert_eq!(l.iter().copied().collect_vec(), vec![0, 1, 2, 4, 3]);

        // Already in place.
        l.move_before(hs[1], hs[2]);
        l.move_after(hs[2], hs[1]);
        l.move_after(hs[2], hs[2]);
        assert_eq!(l.iter().copied().collect_vec(), vec![0, 1, 2, 4, 3]);
        assert_eq!(l.len(), 5);
        assert_ring(&l);
    }

    #[test]
    fn test_push_list() {
        let mut l1: List<_> = [1, 2, 3].into_iter().collect();
        let l2: List<_> = [4, 5].into_iter().collect();

        l1.push_back_list(&l2);
        assert_eq!(l1.iter().copied().collect_vec(), vec![1, 2, 3, 4, 5]);

        l1.push_front_list(&l2);
        assert_eq!(l1.iter().copied().collect_vec(), vec![4, 5, 1, 2, 3, 4, 5]);

        l1.push_back_list(&List::new());
        assert_eq!(l1.len(), 7);
        assert_eq!(l2.len(), 2);
        assert_ring(&l1);
    }

    #[test]
    fn test_clear() {
        let mut l: List<_> = (0..4).collect();
        let h = l.front().unwrap();
        l.clear();

        assert!(l.is_empty());
        assert!(!l.contains(h));
        assert!(l.remove(h).is_none());

        let h = l.push_back(7);
        assert_eq!(l.get(h), Some(&7));
        assert_eq!(format!("{l:?}"), "[7]");
        assert_ring(&l);
    }

    #[test]
    fn test_ring_invariant_against_model() {
        let mut rng = SmallRng::seed_from_u64(114514);
        let mut l = List::new();
        let mut model: VecDeque<(u64, Handle)> = VecDeque::new();

        for i in 0..10000u64 {
            match rng.gen_range(0..8) {
                0 => {
                    let h = l.push_front(i);
                    model.push_front((i, h));
                }
                1 => {
                    let h = l.push_back(i);
                    model.push_back((i, h));
                }
                2 if !model.is_empty() => {
                    let (v, h) = model.remove(rng.gen_range(0..model.len())).unwrap();
                    assert_eq!(l.remove(h), Some(v));
                }
                3 if !model.is_empty() => {
                    let e = model.remove(rng.gen_range(0..model.len())).unwrap();
                    l.move_to_front(e.1);
                    model.push_front(e);
                }
                4 if !model.is_empty() => {
                    let e = model.remove(rng.gen_range(0..model.len())).unwrap();
                    l.move_to_back(e.1);
                    model.push_back(e);
                }
                5 if model.len() > 1 => {
                    let e = model.remove(rng.gen_range(0..model.len())).unwrap();
                    let pos = rng.gen_range(0..model.len());
                    l.move_before(e.1, model[pos].1);
                    model.insert(pos, e);
                }
                6 if model.len() > 1 => {
                    let e = model.remove(rng.gen_range(0..model.len())).unwrap();
                    let pos = rng.gen_range(0..model.len());
                    l.move_after(e.1, model[pos].1);
                    model.insert(pos + 1, e);
                }
                7 if !model.is_empty() => {
                    let pos = rng.gen_range(0..model.len());
                    let h = l.insert_after(i, model[pos].1).unwrap();
                    model.insert(pos + 1, (i, h));
                }
                _ => {}
            }

            assert_eq!(l.len(), model.len());
            if i % 97 == 0 {
                assert_ring(&l);
                assert!(l.iter().copied().eq(model.iter().map(|(v, _)| *v)));
                assert!(l.iter().rev().copied().eq(model.iter().rev().map(|(v, _)| *v)));
            }
        }
    }
}

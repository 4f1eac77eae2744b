//! Owned singly-linked node chain
//!
//! Backing store for the linked list engine. Each node exclusively owns its
//! successor, so following `next` from the head visits every node exactly
//! once and ends at the node whose `next` is `None`.
//!
//! # Complexity
//!
//! - `push_front` / `pop_front`: O(1)
//! - `insert_at` / `remove_at` / `get`: O(n) walk to the predecessor
//! - `push_back`: O(n) walk to the tail link

use super::value::Value;

#[derive(Debug)]
struct ChainNode {
    value: Value,
    next: Option<Box<ChainNode>>,
}

/// A singly-linked list of values
#[derive(Debug, Default)]
pub struct Chain {
    head: Option<Box<ChainNode>>,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Chain { head: None, len: 0 }
    }

    /// Number of nodes in the chain
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value stored at the head, if any
    pub fn front(&self) -> Option<Value> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Link a new node in front of the current head
    pub fn push_front(&mut self, value: Value) {
        let next = self.head.take();
        self.head = Some(Box::new(ChainNode { value, next }));
        self.len += 1;
    }

    /// Unlink the head node and return its value
    pub fn pop_front(&mut self) -> Option<Value> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Append a node after the current tail
    pub fn push_back(&mut self, value: Value) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(ChainNode { value, next: None }));
        self.len += 1;
    }

    /// Link a new node so that it ends up at `index`.
    ///
    /// Returns `false` (and leaves the chain untouched) if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: Value) -> bool {
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.push_front(value);
            return true;
        }

        let Some(prev) = self.node_mut(index - 1) else {
            return false;
        };
        let next = prev.next.take();
        prev.next = Some(Box::new(ChainNode { value, next }));
        self.len += 1;
        true
    }

    /// Unlink the node at `index` and return its value.
    ///
    /// Returns `None` (and leaves the chain untouched) if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Option<Value> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let prev = self.node_mut(index - 1)?;
        let mut removed = prev.next.take()?;
        prev.next = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    /// Value at `index`, walking from the head
    pub fn get(&self, index: usize) -> Option<Value> {
        self.iter().nth(index)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copy the values out in head-to-tail order
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut ChainNode> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }
}

impl Clone for Chain {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Drop for Chain {
    // Iterative so that long chains don't recurse through Box drops
    fn drop(&mut self) {
        self.clear();
    }
}

impl FromIterator<Value> for Chain {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let values: Vec<Value> = iter.into_iter().collect();
        let mut chain = Chain::new();
        for value in values.into_iter().rev() {
            chain.push_front(value);
        }
        chain
    }
}

/// Borrowing iterator over a [`Chain`], head to tail
pub struct Iter<'a> {
    next: Option<&'a ChainNode>,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop_front() {
        let mut chain = Chain::new();
        chain.push_front(2);
        chain.push_front(1);
        assert_eq!(chain.to_vec(), vec![1, 2]);
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.pop_front(), Some(2));
        assert_eq!(chain.pop_front(), None);
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_push_back_appends() {
        let mut chain: Chain = [1, 2].into_iter().collect();
        chain.push_back(3);
        assert_eq!(chain.to_vec(), vec![1, 2, 3]);
        assert_eq!(chain.len(), 3);

        let mut empty = Chain::new();
        empty.push_back(8);
        assert_eq!(empty.front(), Some(8));
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_insert_at_middle_and_end() {
        let mut chain: Chain = [1, 2, 3].into_iter().collect();
        assert!(chain.insert_at(1, 9));
        assert!(chain.insert_at(4, 7));
        assert_eq!(chain.to_vec(), vec![1, 9, 2, 3, 7]);
    }

    #[test]
    fn test_insert_out_of_range_is_rejected() {
        let mut chain: Chain = [1, 2].into_iter().collect();
        assert!(!chain.insert_at(3, 9));
        assert_eq!(chain.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_remove_at_relinks() {
        let mut chain: Chain = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(chain.remove_at(2), Some(3));
        assert_eq!(chain.remove_at(2), Some(4));
        assert_eq!(chain.remove_at(2), None);
        assert_eq!(chain.to_vec(), vec![1, 2]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_len_matches_walk() {
        let mut chain = Chain::new();
        for v in 0..50 {
            chain.push_back(v);
        }
        chain.remove_at(10);
        chain.insert_at(0, -1);
        assert_eq!(chain.iter().count(), chain.len());
        assert_eq!(chain.get(0), Some(-1));
        assert_eq!(chain.get(49), Some(49));
        assert_eq!(chain.get(50), None);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain: Chain = (0..200_000).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}

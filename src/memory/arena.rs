//! Index-linked node pool for the search tree
//!
//! Tree nodes live in a flat [`NodePool`] and refer to their children by
//! [`NodeId`]. A pool is filled once per rebuild and then only read; nothing
//! ever relinks a node after its children are attached, so the graph stays
//! acyclic without any shared ownership.

use super::value::Value;

/// Handle to a node inside a [`NodePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree node: one value and two optional children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: Value,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Flat storage for the nodes of one tree
#[derive(Debug, Clone, Default)]
pub struct NodePool {
    nodes: Vec<TreeNode>,
}

impl NodePool {
    pub fn new() -> Self {
        NodePool { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodePool {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a childless node
    pub fn alloc(&mut self, value: Value) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        id
    }

    /// Attach children to a node that has none yet
    pub fn attach(&mut self, id: NodeId, left: Option<NodeId>, right: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            debug_assert!(node.left.is_none() && node.right.is_none());
            node.left = left;
            node.right = right;
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_hands_out_sequential_ids() {
        let mut pool = NodePool::new();
        let a = pool.alloc(10);
        let b = pool.alloc(20);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_attach_links_children() {
        let mut pool = NodePool::with_capacity(3);
        let left = pool.alloc(1);
        let right = pool.alloc(3);
        let root = pool.alloc(2);
        pool.attach(root, Some(left), Some(right));

        let node = pool.get(root).expect("root exists");
        assert_eq!(node.value, 2);
        assert_eq!(node.left, Some(left));
        assert_eq!(node.right, Some(right));
        assert_eq!(pool.get(left).map(|n| n.left), Some(None));
    }
}

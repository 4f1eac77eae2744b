//! Binary search tree engine
//!
//! The source of truth is an ordered set of distinct values. The [`Tree`] is a
//! derived view: it is thrown away and rebuilt from the full sorted set after
//! every insert, removal or reset, always picking the middle element of each
//! range as the subtree root. No node is ever relinked, so there is no
//! rotation logic and the tree is always height-balanced.
//!
//! # Search
//!
//! A search walks the current tree from the root, recording every visited
//! value, and produces a [`SearchSession`]. The timeline then plays the path
//! back one step per interval and shows "Found!" / "Not found" for one result
//! pause before the session is discarded.
//!
//! # Layout
//!
//! [`Tree::layout`] assigns each node `row = depth * 80` and
//! `slot = horizontal_index * 60`, where the root has index 0 and a node at
//! index `h` has children `2h` and `2h + 1`. This is a heap-style layout, not
//! a collision-free drawing; it only stays readable for shallow trees.

use super::constants::{
    DEFAULT_TREE_VALUES, FOUND_TEXT, NOT_FOUND_TEXT, TREE_HORIZONTAL_SPACING,
    TREE_VERTICAL_SPACING,
};
use super::errors::OpError;
use super::scheduler::{Fired, Timeline};
use super::settings::{Settings, Speed};
use super::{Structure, StructureKind};
use crate::memory::arena::{NodeId, NodePool, TreeNode};
use crate::memory::{Target, Value};
use crate::snapshot::{Cells, PositionedNode, SearchView, Snapshot};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::time::Duration;

/// A height-balanced search tree built from a sorted value set
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pool: NodePool,
    root: Option<NodeId>,
}

impl Tree {
    /// Sort (and deduplicate) `values`, then build by recursively taking the
    /// middle of each range as the root: for `[lo, hi]` the root is
    /// `values[(lo + hi) / 2]`.
    pub fn build_balanced<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut sorted: Vec<Value> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut pool = NodePool::with_capacity(sorted.len());
        let root = build_range(&mut pool, &sorted);
        Tree { pool, root }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.pool.get(id)
    }

    pub fn root_value(&self) -> Option<Value> {
        self.root.and_then(|id| self.node(id)).map(|n| n.value)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; 0 for the empty tree
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: Option<NodeId>) -> usize {
        match id.and_then(|id| self.node(id)) {
            Some(node) => 1 + self.height_of(node.left).max(self.height_of(node.right)),
            None => 0,
        }
    }

    /// Values in ascending (in-order) order
    pub fn in_order(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur.and_then(|id| self.node(id)) {
                stack.push(node);
                cur = node.left;
            }
            match stack.pop() {
                Some(node) => {
                    out.push(node.value);
                    cur = node.right;
                }
                None => break,
            }
        }
        out
    }

    /// True if every node is greater than its whole left subtree and less
    /// than its whole right subtree
    pub fn is_search_tree(&self) -> bool {
        self.within(self.root, None, None)
    }

    fn within(&self, id: Option<NodeId>, lo: Option<Value>, hi: Option<Value>) -> bool {
        let Some(node) = id.and_then(|id| self.node(id)) else {
            return true;
        };
        if lo.is_some_and(|lo| node.value <= lo) || hi.is_some_and(|hi| node.value >= hi) {
            return false;
        }
        self.within(node.left, lo, Some(node.value)) && self.within(node.right, Some(node.value), hi)
    }

    /// Walk from the root toward `target`, recording each visited value.
    /// Stops on a match or when the next child is absent.
    pub fn search_path(&self, target: Value) -> (Vec<Value>, SearchOutcome) {
        let mut path = Vec::new();
        let mut cur = self.root;
        while let Some(node) = cur.and_then(|id| self.node(id)) {
            path.push(node.value);
            if node.value == target {
                return (path, SearchOutcome::Found);
            }
            cur = if target < node.value {
                node.left
            } else {
                node.right
            };
        }
        (path, SearchOutcome::NotFound)
    }

    /// Heap-style layout positions, root first (pre-order)
    pub fn layout(&self) -> Vec<PositionedNode> {
        let mut out = Vec::with_capacity(self.len());
        if let Some(root) = self.root {
            self.place(root, 0, 0, None, &mut out);
        }
        out
    }

    fn place(
        &self,
        id: NodeId,
        depth: u32,
        horizontal_index: u64,
        parent: Option<usize>,
        out: &mut Vec<PositionedNode>,
    ) {
        let Some(node) = self.node(id) else {
            return;
        };
        let position = out.len();
        out.push(PositionedNode {
            value: node.value,
            depth,
            horizontal_index,
            row: depth.saturating_mul(TREE_VERTICAL_SPACING),
            slot: horizontal_index.saturating_mul(u64::from(TREE_HORIZONTAL_SPACING)),
            parent,
        });

        let left_index = horizontal_index.saturating_mul(2);
        if let Some(left) = node.left {
            self.place(left, depth + 1, left_index, Some(position), out);
        }
        if let Some(right) = node.right {
            self.place(right, depth + 1, left_index.saturating_add(1), Some(position), out);
        }
    }
}

fn build_range(pool: &mut NodePool, values: &[Value]) -> Option<NodeId> {
    if values.is_empty() {
        return None;
    }
    let mid = (values.len() - 1) / 2;
    let id = pool.alloc(values[mid]);
    let left = build_range(pool, &values[..mid]);
    let right = build_range(pool, &values[mid + 1..]);
    pool.attach(id, left, right);
    Some(id)
}

/// Terminal result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NotFound,
}

impl SearchOutcome {
    pub fn text(self) -> &'static str {
        match self {
            SearchOutcome::Found => FOUND_TEXT,
            SearchOutcome::NotFound => NOT_FOUND_TEXT,
        }
    }
}

/// Recorded path and outcome of one search, plus playback position
#[derive(Debug, Clone)]
pub struct SearchSession {
    target: Value,
    path: Vec<Value>,
    outcome: SearchOutcome,
    /// Number of path entries played back so far
    cursor: usize,
    showing_result: bool,
    /// Values in `path[..cursor]`
    visited: FxHashSet<Value>,
}

impl SearchSession {
    fn new(target: Value, path: Vec<Value>, outcome: SearchOutcome) -> Self {
        let cursor = path.len().min(1);
        let visited = path[..cursor].iter().copied().collect();
        SearchSession {
            target,
            cursor,
            showing_result: path.is_empty(),
            path,
            outcome,
            visited,
        }
    }

    fn step(&mut self) {
        if let Some(&value) = self.path.get(self.cursor) {
            self.visited.insert(value);
            self.cursor += 1;
        }
    }

    pub fn target(&self) -> Value {
        self.target
    }

    /// The full root-to-stop path
    pub fn path(&self) -> &[Value] {
        &self.path
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn path_so_far(&self) -> &[Value] {
        &self.path[..self.cursor]
    }

    /// True if `value` is on the part of the path already played back
    pub fn has_visited(&self, value: Value) -> bool {
        self.visited.contains(&value)
    }

    /// The result text, only once the path has been played back
    pub fn result(&self) -> Option<&'static str> {
        self.showing_result.then(|| self.outcome.text())
    }
}

/// Deferred half of a two-phase tree operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeCommit {
    Remove(Value),
}

#[derive(Debug, Clone)]
pub struct BstEngine {
    values: BTreeSet<Value>,
    tree: Tree,
    session: Option<SearchSession>,
    timeline: Timeline<Value, TreeCommit>,
}

impl BstEngine {
    pub fn new(settings: &Settings) -> Self {
        let values: BTreeSet<Value> = DEFAULT_TREE_VALUES.into_iter().collect();
        BstEngine {
            tree: Tree::build_balanced(values.iter().copied()),
            values,
            session: None,
            timeline: Timeline::new("bst", settings),
        }
    }

    /// The value set, ascending
    pub fn values(&self) -> Vec<Value> {
        self.values.iter().copied().collect()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub fn highlight(&self) -> Option<Value> {
        self.timeline.highlight()
    }

    pub fn pending_removal(&self) -> Option<Value> {
        self.timeline.pending().map(|TreeCommit::Remove(v)| *v)
    }

    /// Add `value` and rebuild; rejected if already present
    pub fn insert(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        if self.values.contains(&value) {
            return Err(OpError::DuplicateValue(value));
        }
        self.session = None;
        self.values.insert(value);
        self.rebuild();
        self.timeline.flash(value);
        tracing::debug!(value, height = self.tree.height(), "bst insert");
        Ok(())
    }

    /// Highlight `value` now, drop it and rebuild when the highlight ends
    pub fn remove(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        if !self.values.contains(&value) {
            return Err(OpError::AbsentValue(value));
        }
        self.session = None;
        self.timeline.commit(value, TreeCommit::Remove(value));
        tracing::debug!(value, "bst remove scheduled");
        Ok(())
    }

    /// Record the search path for `value` and start playing it back.
    /// Always succeeds; a miss is a `NotFound` outcome. A removal still
    /// waiting on its deadline is applied first under either policy.
    pub fn search(&mut self, value: Value) -> Result<SearchOutcome, OpError> {
        if let Some(commit) = self.timeline.take_pending() {
            self.apply(commit);
        }
        let (path, outcome) = self.tree.search_path(value);
        tracing::debug!(value, ?path, ?outcome, "bst search");
        self.timeline.play(path.clone());
        self.session = Some(SearchSession::new(value, path, outcome));
        Ok(outcome)
    }

    fn rebuild(&mut self) {
        self.tree = Tree::build_balanced(self.values.iter().copied());
    }

    fn settle(&mut self) {
        if let Some(commit) = self.timeline.settle() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: TreeCommit) {
        match commit {
            TreeCommit::Remove(value) => {
                if self.values.remove(&value) {
                    self.rebuild();
                    tracing::debug!(value, "bst remove applied");
                }
            }
        }
    }
}

impl Structure for BstEngine {
    fn kind(&self) -> StructureKind {
        StructureKind::BinarySearchTree
    }

    fn reset(&mut self) {
        self.timeline.cancel();
        self.session = None;
        self.values = DEFAULT_TREE_VALUES.into_iter().collect();
        self.rebuild();
        tracing::info!("bst reset");
    }

    fn tick(&mut self, elapsed: Duration) {
        for event in self.timeline.advance(elapsed) {
            match event {
                Fired::Committed(commit) => self.apply(commit),
                Fired::Stepped(_) => {
                    if let Some(session) = self.session.as_mut() {
                        session.step();
                    }
                }
                Fired::ResultShown => {
                    if let Some(session) = self.session.as_mut() {
                        session.showing_result = true;
                    }
                }
                Fired::Finished => self.session = None,
                Fired::Cleared(_) => {}
            }
        }
    }

    fn speed(&self) -> Speed {
        self.timeline.speed()
    }

    fn set_speed(&mut self, speed: Speed) {
        self.timeline.set_speed(speed);
        tracing::info!(%speed, "bst speed");
    }

    fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            cells: Cells::Tree(self.tree.layout()),
            highlight: self.timeline.highlight().map(Target::Value),
            remaining: self.timeline.remaining(),
            pending: self.timeline.pending().is_some(),
            speed: self.timeline.speed(),
            search: self.session.as_ref().map(|session| SearchView {
                target: session.target,
                path_so_far: session.path_so_far().to_vec(),
                visited: session.visited.clone(),
                result: session.result(),
            }),
        }
    }
}

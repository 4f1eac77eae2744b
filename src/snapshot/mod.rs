//! Read model handed to the renderer, plus the activity log

use crate::engine::{settings::Speed, StructureKind};
use crate::memory::{Target, Value};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::time::Duration;

/// A tree node with its layout position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedNode {
    pub value: Value,
    pub depth: u32,
    /// Heap-style index within its level: children of `h` are `2h` and `2h + 1`
    pub horizontal_index: u64,
    /// `depth * TREE_VERTICAL_SPACING`
    pub row: u32,
    /// `horizontal_index * TREE_HORIZONTAL_SPACING`
    pub slot: u64,
    /// Position of the parent in the same node list
    pub parent: Option<usize>,
}

/// Contents of a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cells {
    /// Array / stack (top first) / queue (front first) / list (head first)
    Linear(Vec<Value>),
    /// Search tree nodes in pre-order, root first
    Tree(Vec<PositionedNode>),
}

impl Cells {
    pub fn len(&self) -> usize {
        match self {
            Cells::Linear(values) => values.len(),
            Cells::Tree(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in storage order (pre-order for trees)
    pub fn values(&self) -> Vec<Value> {
        match self {
            Cells::Linear(values) => values.clone(),
            Cells::Tree(nodes) => nodes.iter().map(|n| n.value).collect(),
        }
    }
}

/// What the renderer shows for a running search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub target: Value,
    /// The part of the path played back so far
    pub path_so_far: Vec<Value>,
    /// The same values, for lookups while drawing nodes
    pub visited: FxHashSet<Value>,
    /// "Found!" / "Not found", only during the result pause
    pub result: Option<&'static str>,
}

/// Snapshot of one structure's observable state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub kind: StructureKind,
    pub cells: Cells,
    pub highlight: Option<Target>,
    /// Time until the highlight (or playback step) ends
    pub remaining: Option<Duration>,
    /// A two-phase removal is waiting on its deadline
    pub pending: bool,
    pub speed: Speed,
    pub search: Option<SearchView>,
}

impl Snapshot {
    /// True if `value` should be drawn emphasized in the tree
    pub fn is_emphasized_value(&self, value: Value) -> bool {
        self.highlight == Some(Target::Value(value))
            || self
                .search
                .as_ref()
                .is_some_and(|s| s.visited.contains(&value))
    }
}

/// One line of the activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: StructureKind,
    pub message: String,
    /// False for rejected operations
    pub accepted: bool,
}

/// Bounded history of operations, oldest evicted first
#[derive(Debug, Clone)]
pub struct OperationLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl OperationLog {
    pub fn new(capacity: usize) -> Self {
        OperationLog {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, evicting the oldest one when full
    pub fn push(&mut self, kind: StructureKind, message: String, accepted: bool) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            kind,
            message,
            accepted,
        });
    }

    /// Entries oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new(crate::engine::constants::DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = OperationLog::new(2);
        log.push(StructureKind::Array, "append 1".into(), true);
        log.push(StructureKind::Stack, "pop".into(), true);
        log.push(StructureKind::Queue, "dequeue".into(), false);

        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["pop", "dequeue"]);
        assert_eq!(log.len(), log.capacity());
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let mut log = OperationLog::new(0);
        log.push(StructureKind::Array, "a".into(), true);
        log.push(StructureKind::Array, "b".into(), true);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_cells_values_follow_storage_order() {
        let cells = Cells::Linear(vec![3, 1, 2]);
        assert_eq!(cells.values(), vec![3, 1, 2]);
        assert!(Cells::Tree(Vec::new()).is_empty());
    }
}

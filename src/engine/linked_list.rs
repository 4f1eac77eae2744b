//! Linked list engine backed by an owned node chain
//!
//! Head operations are O(1) on the [`Chain`]; positional operations walk to
//! the predecessor. Removal is two-phase like the array's.

use super::constants::DEFAULT_SEQUENCE;
use super::errors::OpError;
use super::scheduler::{Fired, Timeline};
use super::settings::{Settings, Speed};
use super::{Structure, StructureKind};
use crate::memory::chain::Chain;
use crate::memory::{Target, Value};
use crate::snapshot::{Cells, Snapshot};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommit {
    RemoveAt(usize),
}

#[derive(Debug, Clone)]
pub struct LinkedListEngine {
    chain: Chain,
    timeline: Timeline<usize, ListCommit>,
}

impl LinkedListEngine {
    pub fn new(settings: &Settings) -> Self {
        LinkedListEngine {
            chain: DEFAULT_SEQUENCE.into_iter().collect(),
            timeline: Timeline::new("list", settings),
        }
    }

    /// Values from head to tail
    pub fn values(&self) -> Vec<Value> {
        self.chain.to_vec()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn head(&self) -> Option<Value> {
        self.chain.front()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.chain.get(index)
    }

    pub fn highlight(&self) -> Option<usize> {
        self.timeline.highlight()
    }

    pub fn pending_removal(&self) -> Option<usize> {
        self.timeline.pending().map(|ListCommit::RemoveAt(i)| *i)
    }

    pub fn add_head(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        self.chain.push_front(value);
        self.timeline.flash(0);
        tracing::debug!(value, "list add head");
        Ok(())
    }

    pub fn add_tail(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        self.chain.push_back(value);
        let index = self.chain.len() - 1;
        self.timeline.flash(index);
        tracing::debug!(value, index, "list add tail");
        Ok(())
    }

    /// Valid for `0 <= index <= len`
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<(), OpError> {
        self.settle();
        if !self.chain.insert_at(index, value) {
            return Err(OpError::InvalidIndex {
                index,
                len: self.chain.len(),
            });
        }
        self.timeline.flash(index);
        tracing::debug!(value, index, "list insert");
        Ok(())
    }

    /// Valid for `0 <= index < len`; the node is unlinked when the highlight ends
    pub fn remove_at(&mut self, index: usize) -> Result<(), OpError> {
        self.settle();
        if index >= self.chain.len() {
            return Err(OpError::InvalidIndex {
                index,
                len: self.chain.len(),
            });
        }
        self.timeline.commit(index, ListCommit::RemoveAt(index));
        tracing::debug!(index, "list remove scheduled");
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(commit) = self.timeline.settle() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: ListCommit) {
        match commit {
            ListCommit::RemoveAt(index) => {
                if let Some(removed) = self.chain.remove_at(index) {
                    tracing::debug!(index, removed, "list remove applied");
                }
            }
        }
    }
}

impl Structure for LinkedListEngine {
    fn kind(&self) -> StructureKind {
        StructureKind::LinkedList
    }

    fn reset(&mut self) {
        self.timeline.cancel();
        self.chain = DEFAULT_SEQUENCE.into_iter().collect();
        tracing::info!("list reset");
    }

    fn tick(&mut self, elapsed: Duration) {
        for event in self.timeline.advance(elapsed) {
            if let Fired::Committed(commit) = event {
                self.apply(commit);
            }
        }
    }

    fn speed(&self) -> Speed {
        self.timeline.speed()
    }

    fn set_speed(&mut self, speed: Speed) {
        self.timeline.set_speed(speed);
        tracing::info!(%speed, "list speed");
    }

    fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            cells: Cells::Linear(self.values()),
            highlight: self.timeline.highlight().map(Target::Index),
            remaining: self.timeline.remaining(),
            pending: self.timeline.pending().is_some(),
            speed: self.timeline.speed(),
            search: None,
        }
    }
}

//! Array engine: contiguous values addressed by index
//!
//! Append and insert are applied immediately and then flashed. Removal is
//! two-phase: the index is highlighted first and the element only leaves the
//! array when the highlight's deadline passes.

use super::constants::DEFAULT_SEQUENCE;
use super::errors::OpError;
use super::scheduler::{Fired, Timeline};
use super::settings::{Settings, Speed};
use super::{Structure, StructureKind};
use crate::memory::{Target, Value};
use crate::snapshot::{Cells, Snapshot};
use std::time::Duration;

/// Deferred half of a two-phase array operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceCommit {
    RemoveAt(usize),
}

#[derive(Debug, Clone)]
pub struct SequenceEngine {
    values: Vec<Value>,
    timeline: Timeline<usize, SequenceCommit>,
}

impl SequenceEngine {
    pub fn new(settings: &Settings) -> Self {
        SequenceEngine {
            values: DEFAULT_SEQUENCE.to_vec(),
            timeline: Timeline::new("array", settings),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Currently highlighted index
    pub fn highlight(&self) -> Option<usize> {
        self.timeline.highlight()
    }

    /// Index waiting to be removed
    pub fn pending_removal(&self) -> Option<usize> {
        self.timeline.pending().map(|SequenceCommit::RemoveAt(i)| *i)
    }

    /// Push `value` at the end
    pub fn append(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        self.values.push(value);
        let index = self.values.len() - 1;
        self.timeline.flash(index);
        tracing::debug!(value, index, "array append");
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements right.
    /// Valid for `0 <= index <= len`.
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<(), OpError> {
        self.settle();
        if index > self.values.len() {
            return Err(OpError::InvalidIndex {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        self.timeline.flash(index);
        tracing::debug!(value, index, "array insert");
        Ok(())
    }

    /// Highlight `index` now, remove it when the highlight ends.
    /// Valid for `0 <= index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<(), OpError> {
        self.settle();
        if index >= self.values.len() {
            return Err(OpError::InvalidIndex {
                index,
                len: self.values.len(),
            });
        }
        self.timeline.commit(index, SequenceCommit::RemoveAt(index));
        tracing::debug!(index, "array remove scheduled");
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(commit) = self.timeline.settle() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: SequenceCommit) {
        match commit {
            SequenceCommit::RemoveAt(index) => {
                if index < self.values.len() {
                    let removed = self.values.remove(index);
                    tracing::debug!(index, removed, "array remove applied");
                }
            }
        }
    }
}

impl Structure for SequenceEngine {
    fn kind(&self) -> StructureKind {
        StructureKind::Array
    }

    fn reset(&mut self) {
        self.timeline.cancel();
        self.values = DEFAULT_SEQUENCE.to_vec();
        tracing::info!("array reset");
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
        tracing::info!(%speed, "array speed");
    }

    fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind(),
            cells: Cells::Linear(self.values.clone()),
            highlight: self.timeline.highlight().map(Target::Index),
            remaining: self.timeline.remaining(),
            pending: self.timeline.pending().is_some(),
            speed: self.timeline.speed(),
            search: None,
        }
    }
}

//! Stack engine: LIFO, top stored at index 0
//!
//! Only index 0 is ever addressed. Push lands at the top and is flashed; pop
//! highlights the top and takes it off when the highlight ends.

use super::constants::DEFAULT_STACK;
use super::errors::OpError;
use super::scheduler::{Fired, Timeline};
use super::settings::{Settings, Speed};
use super::{Structure, StructureKind};
use crate::memory::{Target, Value};
use crate::snapshot::{Cells, Snapshot};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCommit {
    Pop,
}

#[derive(Debug, Clone)]
pub struct StackEngine {
    /// Top first
    values: VecDeque<Value>,
    timeline: Timeline<usize, StackCommit>,
}

impl StackEngine {
    pub fn new(settings: &Settings) -> Self {
        StackEngine {
            values: VecDeque::from(DEFAULT_STACK),
            timeline: Timeline::new("stack", settings),
        }
    }

    /// Values from top to bottom
    pub fn values(&self) -> Vec<Value> {
        self.values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top value without removing it
    pub fn peek(&self) -> Option<Value> {
        self.values.front().copied()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.timeline.highlight()
    }

    pub fn is_pop_pending(&self) -> bool {
        self.timeline.pending().is_some()
    }

    pub fn push(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        self.values.push_front(value);
        self.timeline.flash(0);
        tracing::debug!(value, "stack push");
        Ok(())
    }

    /// Highlight the top now, remove it when the highlight ends
    pub fn pop(&mut self) -> Result<(), OpError> {
        self.settle();
        if self.values.is_empty() {
            return Err(OpError::Empty("stack"));
        }
        self.timeline.commit(0, StackCommit::Pop);
        tracing::debug!("stack pop scheduled");
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(commit) = self.timeline.settle() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: StackCommit) {
        match commit {
            StackCommit::Pop => {
                if let Some(value) = self.values.pop_front() {
                    tracing::debug!(value, "stack pop applied");
                }
            }
        }
    }
}

impl Structure for StackEngine {
    fn kind(&self) -> StructureKind {
        StructureKind::Stack
    }

    fn reset(&mut self) {
        self.timeline.cancel();
        self.values = VecDeque::from(DEFAULT_STACK);
        tracing::info!("stack reset");
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
        tracing::info!(%speed, "stack speed");
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

//! Queue engine: FIFO, front at index 0, rear at the last index

use super::constants::DEFAULT_SEQUENCE;
use super::errors::OpError;
use super::scheduler::{Fired, Timeline};
use super::settings::{Settings, Speed};
use super::{Structure, StructureKind};
use crate::memory::{Target, Value};
use crate::snapshot::{Cells, Snapshot};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCommit {
    Dequeue,
}

#[derive(Debug, Clone)]
pub struct QueueEngine {
    /// Front first
    values: VecDeque<Value>,
    timeline: Timeline<usize, QueueCommit>,
}

impl QueueEngine {
    pub fn new(settings: &Settings) -> Self {
        QueueEngine {
            values: VecDeque::from(DEFAULT_SEQUENCE),
            timeline: Timeline::new("queue", settings),
        }
    }

    /// Values from front to rear
    pub fn values(&self) -> Vec<Value> {
        self.values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Front value without removing it
    pub fn peek(&self) -> Option<Value> {
        self.values.front().copied()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.timeline.highlight()
    }

    pub fn is_dequeue_pending(&self) -> bool {
        self.timeline.pending().is_some()
    }

    /// Add `value` at the rear
    pub fn enqueue(&mut self, value: Value) -> Result<(), OpError> {
        self.settle();
        self.values.push_back(value);
        let index = self.values.len() - 1;
        self.timeline.flash(index);
        tracing::debug!(value, index, "queue enqueue");
        Ok(())
    }

    /// Highlight the front now, remove it when the highlight ends
    pub fn dequeue(&mut self) -> Result<(), OpError> {
        self.settle();
        if self.values.is_empty() {
            return Err(OpError::Empty("queue"));
        }
        self.timeline.commit(0, QueueCommit::Dequeue);
        tracing::debug!("queue dequeue scheduled");
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(commit) = self.timeline.settle() {
            self.apply(commit);
        }
    }

    fn apply(&mut self, commit: QueueCommit) {
        match commit {
            QueueCommit::Dequeue => {
                if let Some(value) = self.values.pop_front() {
                    tracing::debug!(value, "queue dequeue applied");
                }
            }
        }
    }
}

impl Structure for QueueEngine {
    fn kind(&self) -> StructureKind {
        StructureKind::Queue
    }

    fn reset(&mut self) {
        self.timeline.cancel();
        self.values = VecDeque::from(DEFAULT_SEQUENCE);
        tracing::info!("queue reset");
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
        tracing::info!(%speed, "queue speed");
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

//! Data structure operation engines
//!
//! One engine per structure, each owning its values and its own
//! [`scheduler::Timeline`]. Timelines never interact, so the engines are
//! fully independent of one another.
//!
//! # Operation shapes
//!
//! - **Single-phase** (append, insert, push, enqueue, add head/tail, tree
//!   insert): the mutation is applied immediately and the new position is
//!   flashed.
//! - **Two-phase** (remove, pop, dequeue, tree remove): the target is
//!   highlighted now and the mutation is applied when the highlight ends.
//! - **Playback** (tree search): the recorded path is highlighted one step
//!   at a time, then the result is shown.
//!
//! Rejected operations return an [`OpError`] and leave the engine unchanged.
//!
//! # Entry points
//!
//! [`Workbench`] owns one engine of each kind and routes [`Command`]s to
//! them; [`Workbench::tick`] drives every timeline forward.

pub mod bst;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod linked_list;
pub mod queue;
pub mod scheduler;
pub mod sequence;
pub mod settings;
pub mod stack;

pub use catalog::StructureKind;
pub use errors::OpError;

use crate::memory::Value;
use crate::snapshot::Snapshot;
use bst::BstEngine;
use linked_list::LinkedListEngine;
use queue::QueueEngine;
use sequence::SequenceEngine;
use settings::{Settings, Speed};
use stack::StackEngine;
use std::time::Duration;

/// Behavior shared by every engine
pub trait Structure {
    fn kind(&self) -> StructureKind;

    /// Restore the default contents and drop any scheduled work
    fn reset(&mut self);

    /// Advance this structure's timeline by `elapsed`
    fn tick(&mut self, elapsed: Duration);

    fn speed(&self) -> Speed;

    fn set_speed(&mut self, speed: Speed);

    /// True if nothing is highlighted or pending
    fn is_idle(&self) -> bool;

    fn snapshot(&self) -> Snapshot;
}

/// An operation request from the front end
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Append(Value),
    InsertAt(usize, Value),
    RemoveAt(usize),
    AddHead(Value),
    AddTail(Value),
    Push(Value),
    Pop,
    Enqueue(Value),
    Dequeue,
    Insert(Value),
    Remove(Value),
    Search(Value),
    Reset,
    SetSpeed(f64),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Append(_) => "append",
            Command::InsertAt(..) => "insert at index",
            Command::RemoveAt(_) => "remove at index",
            Command::AddHead(_) => "add to head",
            Command::AddTail(_) => "add to tail",
            Command::Push(_) => "push",
            Command::Pop => "pop",
            Command::Enqueue(_) => "enqueue",
            Command::Dequeue => "dequeue",
            Command::Insert(_) => "insert",
            Command::Remove(_) => "remove",
            Command::Search(_) => "search",
            Command::Reset => "reset",
            Command::SetSpeed(_) => "set speed",
        }
    }
}

/// One instance of every structure
#[derive(Debug, Clone)]
pub struct Workbench {
    pub array: SequenceEngine,
    pub stack: StackEngine,
    pub queue: QueueEngine,
    pub list: LinkedListEngine,
    pub tree: BstEngine,
}

impl Workbench {
    pub fn new(settings: &Settings) -> Self {
        Workbench {
            array: SequenceEngine::new(settings),
            stack: StackEngine::new(settings),
            queue: QueueEngine::new(settings),
            list: LinkedListEngine::new(settings),
            tree: BstEngine::new(settings),
        }
    }

    pub fn engine(&self, kind: StructureKind) -> &dyn Structure {
        match kind {
            StructureKind::Array => &self.array,
            StructureKind::Stack => &self.stack,
            StructureKind::Queue => &self.queue,
            StructureKind::LinkedList => &self.list,
            StructureKind::BinarySearchTree => &self.tree,
        }
    }

    pub fn engine_mut(&mut self, kind: StructureKind) -> &mut dyn Structure {
        match kind {
            StructureKind::Array => &mut self.array,
            StructureKind::Stack => &mut self.stack,
            StructureKind::Queue => &mut self.queue,
            StructureKind::LinkedList => &mut self.list,
            StructureKind::BinarySearchTree => &mut self.tree,
        }
    }

    /// Route `command` to the engine for `kind`
    pub fn dispatch(&mut self, kind: StructureKind, command: Command) -> Result<(), OpError> {
        use StructureKind::*;

        let result = match (kind, command) {
            (_, Command::Reset) => {
                self.engine_mut(kind).reset();
                Ok(())
            }
            (_, Command::SetSpeed(factor)) => {
                self.engine_mut(kind).set_speed(Speed::new(factor));
                Ok(())
            }

            (Array, Command::Append(v)) => self.array.append(v),
            (Array, Command::InsertAt(i, v)) => self.array.insert_at(i, v),
            (Array, Command::RemoveAt(i)) => self.array.remove_at(i),

            (Stack, Command::Push(v)) => self.stack.push(v),
            (Stack, Command::Pop) => self.stack.pop(),

            (Queue, Command::Enqueue(v)) => self.queue.enqueue(v),
            (Queue, Command::Dequeue) => self.queue.dequeue(),

            (LinkedList, Command::AddHead(v)) => self.list.add_head(v),
            (LinkedList, Command::AddTail(v)) => self.list.add_tail(v),
            (LinkedList, Command::InsertAt(i, v)) => self.list.insert_at(i, v),
            (LinkedList, Command::RemoveAt(i)) => self.list.remove_at(i),

            (BinarySearchTree, Command::Insert(v)) => self.tree.insert(v),
            (BinarySearchTree, Command::Remove(v)) => self.tree.remove(v),
            (BinarySearchTree, Command::Search(v)) => self.tree.search(v).map(|_| ()),

            (kind, command) => Err(OpError::Unsupported {
                command: command.name(),
                structure: kind.title(),
            }),
        };

        if let Err(err) = &result {
            tracing::debug!(structure = kind.label(), command = command.name(), %err, "rejected");
        }
        result
    }

    /// Advance every timeline by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) {
        for kind in StructureKind::ALL {
            self.engine_mut(kind).tick(elapsed);
        }
    }

    pub fn snapshot(&self, kind: StructureKind) -> Snapshot {
        self.engine(kind).snapshot()
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

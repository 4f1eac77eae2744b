//! Payload and highlight target types
//!
//! Every structure stores plain signed integers. A highlight points either at
//! a position (array, stack, queue, linked list) or at a stored value (BST),
//! which is what [`Target`] captures.

/// The payload stored by every structure
pub type Value = i64;

/// What a highlight points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A position in a linear structure
    Index(usize),
    /// A value in the tree's value set
    Value(Value),
}

impl Target {
    /// Get the index, returns None for value targets
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Target::Index(i) => Some(*i),
            Target::Value(_) => None,
        }
    }

    /// Get the value, returns None for index targets
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Target::Value(v) => Some(*v),
            Target::Index(_) => None,
        }
    }
}

//! Operation error types for the structure engines
//!
//! Every rejected operation leaves its structure exactly as it was: no state
//! change and no highlight. The [`OpError`] value only tells the caller why,
//! so the front end can put it in the status bar. Nothing here is fatal.
//!
//! A search that misses is not an error; it is reported through the search
//! session as a "Not found" outcome.

use crate::memory::Value;

/// Why an operation was turned into a no-op
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    /// Input text was not a representable integer
    #[error("Invalid value: '{0}' is not an integer")]
    InvalidValue(String),

    /// Index outside the range the operation permits
    #[error("Invalid index {index} for length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Index text that does not parse as a non-negative integer
    #[error("Invalid index: '{0}'")]
    UnparsableIndex(String),

    /// Tree insert of a value that is already present
    #[error("Value {0} is already in the tree")]
    DuplicateValue(Value),

    /// Tree removal of a value that is not present
    #[error("Value {0} is not in the tree")]
    AbsentValue(Value),

    /// Pop/dequeue on an empty structure
    #[error("Nothing to remove: the {0} is empty")]
    Empty(&'static str),

    /// Command the target structure does not accept
    #[error("{structure} does not support {command}")]
    Unsupported {
        command: &'static str,
        structure: &'static str,
    },
}

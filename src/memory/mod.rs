//! In-memory representations shared by the engines
//!
//! - [`value`]: the integer payload and highlight [`value::Target`]
//! - [`chain`]: owned singly-linked chain backing the linked list engine
//! - [`arena`]: index-linked node pool backing the search tree
//!
//! Array, stack and queue are plain `Vec` / `VecDeque` storage inside their
//! engines and need nothing from here.

pub mod arena;
pub mod chain;
pub mod value;

pub use value::{Target, Value};

//! # Introduction
//!
//! Dristicon is an interactive visualizer for five classic data structures:
//! array, stack, queue, singly linked list and a balanced binary search tree.
//! Every operation is paced by a speed-scaled highlight timeline so that each
//! structural change can be watched as it happens, in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Keys → Command → Engine (validate, mutate, schedule) → Timeline → Snapshot → TUI
//! ```
//!
//! 1. [`engine`]: the five structure engines, the transition scheduler, the
//!    command surface ([`engine::Command`], [`engine::Workbench`]), settings
//!    and the error taxonomy.
//! 2. [`memory`]: value and highlight target types, the owned node
//!    [`memory::chain::Chain`] behind the linked list, and the index-linked
//!    [`memory::arena::NodePool`] behind the search tree.
//! 3. [`snapshot`]: the read model handed to the renderer and a bounded
//!    [`snapshot::OperationLog`].
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Timing model
//!
//! Engines never read the wall clock. The UI feeds elapsed time to
//! [`engine::Workbench::tick`]; tests feed synthetic durations, which makes
//! every animation sequence deterministic.

pub mod engine;
pub mod memory;
pub mod snapshot;
pub mod ui;

//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function over a [`Snapshot`] or
//! other read-only state.
//!
//! # Pane Modules
//!
//! - [`structure`]: array, stack, queue and linked list cells
//! - [`tree`]: the search tree drawn on a canvas, with the search line
//! - [`info`]: description, operations and complexity of the active structure
//! - [`activity`]: scrolling log of accepted and rejected operations
//! - [`controls`]: value and index fields, speed gauge
//! - [`status`]: status bar with key hints and animation state
//!
//! [`Snapshot`]: crate::snapshot::Snapshot

pub mod activity;
pub mod controls;
pub mod info;
pub mod status;
pub mod structure;
pub mod tree;

pub use activity::render_activity_pane;
pub use controls::render_controls;
pub use info::render_info_pane;
pub use status::render_status_bar;
pub use structure::render_structure_pane;
pub use tree::render_tree_pane;

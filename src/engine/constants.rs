// Constants for the structure engines

use crate::memory::Value;

/// Default contents of the array, queue and linked list
pub const DEFAULT_SEQUENCE: [Value; 5] = [1, 2, 3, 4, 5];

/// Default stack contents, stored top first
pub const DEFAULT_STACK: [Value; 5] = [5, 4, 3, 2, 1];

/// Default value set of the search tree
pub const DEFAULT_TREE_VALUES: [Value; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Base highlight duration in milliseconds, divided by the speed factor
pub const BASE_HIGHLIGHT_MS: u64 = 500;

/// Base duration the search result stays visible, divided by the speed factor
pub const BASE_RESULT_PAUSE_MS: u64 = 1000;

/// Speed factor bounds
pub const MIN_SPEED: f64 = 0.2;
pub const MAX_SPEED: f64 = 2.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Increment used by the speed slider keys
pub const SPEED_STEP: f64 = 0.1;

/// Tree layout spacing (row = depth * vertical, slot = horizontal index * horizontal)
pub const TREE_VERTICAL_SPACING: u32 = 80;
pub const TREE_HORIZONTAL_SPACING: u32 = 60;

/// Number of entries kept by the activity log
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Text shown while the search result is displayed
pub const FOUND_TEXT: &str = "Found!";
pub const NOT_FOUND_TEXT: &str = "Not found";

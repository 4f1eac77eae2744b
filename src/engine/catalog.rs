//! Structure kinds and their reference text
//!
//! The info pane shows, for each structure, a one-line description, what each
//! operation does and the complexity of those operations.

use std::fmt;
use std::str::FromStr;

/// The five structures the workbench hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Array,
    Stack,
    Queue,
    LinkedList,
    BinarySearchTree,
}

impl StructureKind {
    /// Tab order
    pub const ALL: [StructureKind; 5] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::LinkedList,
        StructureKind::BinarySearchTree,
    ];

    /// Tab title
    pub fn title(self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "Linked List",
            StructureKind::BinarySearchTree => "Binary Search Tree",
        }
    }

    /// Short lowercase name used in logs and on the command line
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Array => "array",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::LinkedList => "list",
            StructureKind::BinarySearchTree => "bst",
        }
    }

    pub fn position(self) -> usize {
        match self {
            StructureKind::Array => 0,
            StructureKind::Stack => 1,
            StructureKind::Queue => 2,
            StructureKind::LinkedList => 3,
            StructureKind::BinarySearchTree => 4,
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn description(self) -> &'static str {
        match self {
            StructureKind::Array => "A collection of elements stored at contiguous memory locations",
            StructureKind::Stack => {
                "A linear data structure that follows the Last In First Out (LIFO) principle"
            }
            StructureKind::Queue => {
                "A linear data structure that follows the First In First Out (FIFO) principle"
            }
            StructureKind::LinkedList => {
                "A linear data structure where elements are not stored at contiguous locations"
            }
            StructureKind::BinarySearchTree => {
                "A tree data structure where each node has at most two children"
            }
        }
    }

    /// (operation, explanation) pairs
    pub fn operations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            StructureKind::Array => &[
                ("Add", "Appends a value to the end of the array"),
                ("Insert", "Inserts a value at the specified index"),
                ("Remove", "Removes the value at the specified index"),
            ],
            StructureKind::Stack => &[
                ("Push", "Adds a value to the top of the stack"),
                ("Pop", "Removes the value from the top of the stack"),
                ("Peek", "Views the top value without removing it"),
            ],
            StructureKind::Queue => &[
                ("Enqueue", "Adds a value to the rear of the queue"),
                ("Dequeue", "Removes the value from the front of the queue"),
                ("Peek", "Views the front value without removing it"),
            ],
            StructureKind::LinkedList => &[
                ("Add to Head", "Inserts a new node at the beginning"),
                ("Add to Tail", "Inserts a new node at the end"),
                ("Insert At", "Inserts a new node at the specified position"),
                ("Remove At", "Removes the node at the specified position"),
            ],
            StructureKind::BinarySearchTree => &[
                ("Insert", "Adds a value, keeping the tree balanced"),
                ("Remove", "Removes a value and rebalances the tree"),
                ("Search", "Walks from the root, going left for smaller values and right for larger ones"),
            ],
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            StructureKind::Array => "Access O(1), Search O(n), Insert O(n), Delete O(n)",
            StructureKind::Stack => "Push O(1), Pop O(1), Peek O(1)",
            StructureKind::Queue => "Enqueue O(1), Dequeue O(1)",
            StructureKind::LinkedList => {
                "Access O(n), Search O(n), Insert O(1) at head, Delete O(1) at head"
            }
            StructureKind::BinarySearchTree => {
                "Search, Insert, Delete: O(log n) for balanced trees, O(n) worst case"
            }
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for StructureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(StructureKind::Array),
            "stack" => Ok(StructureKind::Stack),
            "queue" => Ok(StructureKind::Queue),
            "list" | "linked-list" => Ok(StructureKind::LinkedList),
            "bst" | "tree" | "binary-tree" => Ok(StructureKind::BinarySearchTree),
            other => Err(format!(
                "Unknown structure '{}' (expected array, stack, queue, list or bst)",
                other
            )),
        }
    }
}

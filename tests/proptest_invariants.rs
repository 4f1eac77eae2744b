//! Property-based invariant tests for the structure engines.
//!
//! 1. The rebuilt tree is always a valid search tree over exactly the value set
//! 2. The rebuilt tree is height-balanced
//! 3. Search paths start at the root and end at the target or a missing child
//! 4. Insert followed by remove restores the value set
//! 5. The stack is LIFO and the queue is FIFO
//! 6. Rejected operations never change a structure
//! 7. Insert then remove at the same index round trips; append lands at the old length

use dristicon::engine::bst::{BstEngine, SearchOutcome, Tree};
use dristicon::engine::linked_list::LinkedListEngine;
use dristicon::engine::queue::QueueEngine;
use dristicon::engine::sequence::SequenceEngine;
use dristicon::engine::settings::Settings;
use dristicon::engine::stack::StackEngine;
use dristicon::engine::Structure;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::time::Duration;

const STEP: Duration = Duration::from_millis(500);

fn value_set() -> impl Strategy<Value = BTreeSet<i64>> {
    prop::collection::btree_set(-1000i64..1000, 0..64)
}

fn ceil_log2_plus_one(n: usize) -> usize {
    // smallest h with 2^h - 1 >= n
    let mut h = 0;
    while (1usize << h) - 1 < n {
        h += 1;
    }
    h
}

proptest! {
    #[test]
    fn rebuilt_tree_is_search_tree(values in value_set()) {
        let tree = Tree::build_balanced(values.iter().copied());
        prop_assert!(tree.is_search_tree());
        prop_assert_eq!(tree.in_order(), values.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.len(), values.len());
    }

    #[test]
    fn rebuilt_tree_is_balanced(values in value_set()) {
        let tree = Tree::build_balanced(values.iter().copied());
        prop_assert!(tree.height() <= ceil_log2_plus_one(values.len()));
    }

    #[test]
    fn search_path_follows_tree(values in value_set(), target in -1000i64..1000) {
        let tree = Tree::build_balanced(values.iter().copied());
        let (path, outcome) = tree.search_path(target);

        prop_assert_eq!(path.first().copied(), tree.root_value());
        prop_assert_eq!(outcome == SearchOutcome::Found, values.contains(&target));
        if outcome == SearchOutcome::Found {
            prop_assert_eq!(path.last().copied(), Some(target));
        }
        prop_assert!(path.len() <= tree.height());

        // each step is the child picked by comparing the target with its parent
        let mut cur = tree.root();
        for &value in &path {
            let node = cur.and_then(|id| tree.node(id));
            prop_assert_eq!(node.map(|n| n.value), Some(value));
            let Some(node) = node else { break };
            cur = if target < node.value { node.left } else { node.right };
        }
        if outcome == SearchOutcome::Found {
            prop_assert_eq!(path.iter().filter(|&&v| v == target).count(), 1);
        } else {
            // a miss stops at the last node before an empty branch
            prop_assert!(cur.is_none());
        }
    }

    #[test]
    fn insert_then_remove_restores_set(values in value_set(), extra in 1000i64..2000) {
        let mut engine = BstEngine::new(&Settings::default());
        for value in engine.values() {
            engine.remove(value).expect("value present");
            engine.tick(STEP);
        }
        for &value in &values {
            engine.insert(value).expect("distinct values");
        }
        let before = engine.values();

        engine.insert(extra).expect("extra is outside the set");
        engine.remove(extra).expect("extra was just inserted");
        engine.tick(STEP);

        prop_assert_eq!(engine.values(), before);
        prop_assert!(engine.tree().is_search_tree());
    }

    #[test]
    fn stack_pops_in_reverse_push_order(pushed in prop::collection::vec(any::<i64>(), 1..20)) {
        let mut stack = StackEngine::new(&Settings::default());
        for &value in &pushed {
            stack.push(value).expect("push never fails");
        }
        for &value in pushed.iter().rev() {
            prop_assert_eq!(stack.peek(), Some(value));
            stack.pop().expect("stack not empty");
            stack.tick(STEP);
        }
        prop_assert_eq!(stack.values(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn queue_dequeues_in_enqueue_order(enqueued in prop::collection::vec(any::<i64>(), 1..20)) {
        let mut queue = QueueEngine::new(&Settings::default());
        for _ in 0..5 {
            queue.dequeue().expect("queue not empty");
            queue.tick(STEP);
        }
        for &value in &enqueued {
            queue.enqueue(value).expect("enqueue never fails");
        }
        for &value in &enqueued {
            prop_assert_eq!(queue.peek(), Some(value));
            queue.dequeue().expect("queue not empty");
            queue.tick(STEP);
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn insert_then_remove_at_same_index_round_trips(index in 0usize..=5, value in any::<i64>()) {
        let mut array = SequenceEngine::new(&Settings::default());
        let mut list = LinkedListEngine::new(&Settings::default());

        array.insert_at(index, value).expect("index in range");
        array.remove_at(index).expect("index in range");
        array.tick(STEP);
        list.insert_at(index, value).expect("index in range");
        list.remove_at(index).expect("index in range");
        list.tick(STEP);

        prop_assert_eq!(array.values(), &[1, 2, 3, 4, 5]);
        prop_assert_eq!(list.values(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn append_lands_at_old_length(values in prop::collection::vec(any::<i64>(), 0..20), v in any::<i64>()) {
        let mut array = SequenceEngine::new(&Settings::default());
        for &value in &values {
            array.append(value).expect("append never fails");
        }
        let n = array.len();
        array.append(v).expect("append never fails");
        prop_assert_eq!(array.len(), n + 1);
        prop_assert_eq!(array.get(n), Some(v));
    }

    #[test]
    fn bad_index_changes_nothing(index in 6usize..10_000, value in any::<i64>()) {
        let mut array = SequenceEngine::new(&Settings::default());
        prop_assert!(array.insert_at(index, value).is_err());
        prop_assert!(array.remove_at(index).is_err());
        prop_assert_eq!(array.values(), &[1, 2, 3, 4, 5]);
        prop_assert!(array.is_idle());
    }
}

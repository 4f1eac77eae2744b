// Integration tests for the binary search tree engine

use dristicon::engine::bst::{BstEngine, SearchOutcome, Tree};
use dristicon::engine::settings::{Settings, Speed};
use dristicon::engine::{OpError, Structure};
use dristicon::memory::Target;
use dristicon::snapshot::{Cells, PositionedNode};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn find(nodes: &[PositionedNode], value: i64) -> &PositionedNode {
    nodes
        .iter()
        .find(|n| n.value == value)
        .unwrap_or_else(|| panic!("{} not in layout", value))
}

fn child_values(tree: &Tree) -> (Option<i64>, Option<i64>) {
    let root = tree.root().and_then(|id| tree.node(id)).expect("root");
    let value = |id| tree.node(id).map(|n| n.value);
    (root.left.and_then(value), root.right.and_then(value))
}

#[test]
fn test_default_tree_shape() {
    let engine = BstEngine::new(&Settings::default());
    let tree = engine.tree();

    assert_eq!(tree.root_value(), Some(50));
    assert_eq!(child_values(tree), (Some(30), Some(70)));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert!(tree.is_search_tree());
}

#[test]
fn test_even_count_uses_lower_median() {
    let tree = Tree::build_balanced([4, 1, 3, 2]);
    assert_eq!(tree.root_value(), Some(2));
    assert_eq!(child_values(&tree), (Some(1), Some(3)));
}

#[test]
fn test_build_drops_duplicates() {
    let tree = Tree::build_balanced([5, 5, 3, 3, 8]);
    assert_eq!(tree.in_order(), vec![3, 5, 8]);
}

#[test]
fn test_layout_coordinates() {
    let engine = BstEngine::new(&Settings::default());
    let nodes = engine.tree().layout();
    assert_eq!(nodes.len(), 7);
    assert_eq!(nodes[0].value, 50);

    let root = find(&nodes, 50);
    assert_eq!((root.depth, root.row, root.slot), (0, 0, 0));
    assert_eq!(root.parent, None);

    let left = find(&nodes, 30);
    assert_eq!((left.depth, left.horizontal_index, left.row, left.slot), (1, 0, 80, 0));

    let right = find(&nodes, 70);
    assert_eq!((right.horizontal_index, right.slot), (1, 60));

    let far_right = find(&nodes, 80);
    assert_eq!(
        (far_right.depth, far_right.horizontal_index, far_right.row, far_right.slot),
        (2, 3, 160, 180)
    );
    let parent = far_right.parent.map(|p| nodes[p].value);
    assert_eq!(parent, Some(70));
}

#[test]
fn test_search_paths() {
    let engine = BstEngine::new(&Settings::default());
    let tree = engine.tree();

    assert_eq!(
        tree.search_path(60),
        (vec![50, 70, 60], SearchOutcome::Found)
    );
    assert_eq!(
        tree.search_path(45),
        (vec![50, 30, 40], SearchOutcome::NotFound)
    );
    assert_eq!(tree.search_path(50), (vec![50], SearchOutcome::Found));
    assert_eq!(
        Tree::default().search_path(1),
        (vec![], SearchOutcome::NotFound)
    );
}

#[test]
fn test_search_playback_found() {
    let mut engine = BstEngine::new(&Settings::default());
    assert_eq!(engine.search(60), Ok(SearchOutcome::Found));

    let session = engine.session().expect("session");
    assert_eq!(session.path_so_far(), &[50]);
    assert_eq!(session.result(), None);
    assert_eq!(engine.highlight(), Some(50));

    engine.tick(ms(500));
    assert_eq!(engine.highlight(), Some(70));
    assert!(engine.session().is_some_and(|s| s.has_visited(70) && !s.has_visited(60)));

    engine.tick(ms(500));
    assert_eq!(engine.highlight(), Some(60));
    assert_eq!(engine.session().map(|s| s.result()), Some(None));

    engine.tick(ms(500));
    assert_eq!(engine.highlight(), None);
    let snapshot = engine.snapshot();
    let search = snapshot.search.expect("search view");
    assert_eq!(search.path_so_far, vec![50, 70, 60]);
    assert_eq!(search.result, Some("Found!"));

    engine.tick(ms(999));
    assert!(engine.session().is_some());
    engine.tick(ms(1));
    assert!(engine.session().is_none());
    assert!(engine.is_idle());
}

#[test]
fn test_search_playback_not_found() {
    let mut engine = BstEngine::new(&Settings::default());
    assert_eq!(engine.search(45), Ok(SearchOutcome::NotFound));

    engine.tick(ms(1500));
    let session = engine.session().expect("session");
    assert_eq!(session.path_so_far(), &[50, 30, 40]);
    assert_eq!(session.result(), Some("Not found"));
    assert!(!session.is_found());
}

#[test]
fn test_search_catches_up_in_one_tick() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.search(80).expect("search never fails");
    engine.tick(Duration::from_secs(10));
    assert!(engine.session().is_none());
    assert!(engine.is_idle());
}

#[test]
fn test_search_speed_scales_steps_and_pause() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.set_speed(Speed::new(2.0));
    engine.search(20).expect("search never fails");

    engine.tick(ms(250));
    assert_eq!(engine.highlight(), Some(30));
    engine.tick(ms(500));
    assert_eq!(engine.session().and_then(|s| s.result()), Some("Found!"));
    engine.tick(ms(500));
    assert!(engine.session().is_none());
}

#[test]
fn test_search_on_empty_tree_shows_result_immediately() {
    let mut engine = BstEngine::new(&Settings::default());
    for value in engine.values() {
        engine.remove(value).expect("value present");
        engine.tick(ms(500));
    }
    assert!(engine.is_empty());

    assert_eq!(engine.search(5), Ok(SearchOutcome::NotFound));
    assert_eq!(engine.session().and_then(|s| s.result()), Some("Not found"));
    engine.tick(ms(1000));
    assert!(engine.session().is_none());
}

#[test]
fn test_insert_rebuilds_and_flashes() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.insert(65).expect("new value");

    assert!(engine.contains(65));
    assert_eq!(engine.highlight(), Some(65));
    assert!(engine.tree().is_search_tree());
    assert_eq!(engine.tree().len(), 8);
    assert_eq!(
        engine.snapshot().highlight,
        Some(Target::Value(65))
    );
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut engine = BstEngine::new(&Settings::default());
    assert_eq!(engine.insert(50), Err(OpError::DuplicateValue(50)));
    assert!(engine.is_idle());
    assert_eq!(engine.len(), 7);
}

#[test]
fn test_remove_absent_is_rejected() {
    let mut engine = BstEngine::new(&Settings::default());
    assert_eq!(engine.remove(45), Err(OpError::AbsentValue(45)));
    assert!(engine.is_idle());
}

#[test]
fn test_remove_root_rebuilds_after_highlight() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.remove(50).expect("value present");

    assert_eq!(engine.pending_removal(), Some(50));
    assert_eq!(engine.tree().root_value(), Some(50));
    assert!(engine.snapshot().pending);

    engine.tick(ms(500));
    assert!(!engine.contains(50));
    // [20, 30, 40, 60, 70, 80]: lower median is 40
    assert_eq!(engine.tree().root_value(), Some(40));
    assert!(engine.tree().is_search_tree());
}

#[test]
fn test_insert_during_search_replaces_session() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.search(60).expect("search never fails");
    engine.tick(ms(500));

    engine.insert(65).expect("new value");
    assert!(engine.session().is_none());
    assert_eq!(engine.highlight(), Some(65));
}

#[test]
fn test_search_applies_pending_removal() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.remove(30).expect("value present");
    assert_eq!(engine.search(60), Ok(SearchOutcome::Found));

    assert!(!engine.contains(30));
    assert_eq!(engine.pending_removal(), None);
    engine.tick(Duration::from_secs(10));
    assert!(!engine.values().contains(&30));
    assert!(engine.tree().is_search_tree());
}

#[test]
fn test_search_after_pending_removal_walks_rebuilt_tree() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.remove(50).expect("value present");
    // [20, 30, 40, 60, 70, 80]: root 40, right subtree rooted at 70
    assert_eq!(engine.search(60), Ok(SearchOutcome::Found));
    assert_eq!(
        engine.session().map(|s| s.path().to_vec()),
        Some(vec![40, 70, 60])
    );
}

#[test]
fn test_snapshot_emphasizes_visited_nodes_only() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.search(60).expect("search never fails");
    engine.tick(ms(500));

    let snapshot = engine.snapshot();
    assert!(snapshot.is_emphasized_value(50));
    assert!(snapshot.is_emphasized_value(70));
    assert!(!snapshot.is_emphasized_value(60));
    assert!(!snapshot.is_emphasized_value(30));
}

#[test]
fn test_reset_restores_default_tree() {
    let mut engine = BstEngine::new(&Settings::default());
    engine.insert(1).expect("new value");
    engine.search(1).expect("search never fails");

    engine.reset();
    assert!(engine.session().is_none());
    assert!(engine.is_idle());
    assert_eq!(engine.values(), vec![20, 30, 40, 50, 60, 70, 80]);

    match engine.snapshot().cells {
        Cells::Tree(nodes) => assert_eq!(nodes.len(), 7),
        Cells::Linear(_) => panic!("tree snapshot expected"),
    }
}

use algotrace_forest::{Color, RbTree, ToGraph, TreeEvent};
use proptest::prelude::*;

fn assert_valid(tree: &RbTree<i32>, what: &str) {
    let validity = tree.check_validity();
    if !validity.ok {
        panic!("invalid red-black tree after {what}: {:?}", validity.problems);
    }
}

#[test]
fn rb_textbook_sequence_matrix() {
    let mut tree = RbTree::new();
    for value in [10, 5, 15, 3, 7, 12, 18] {
        assert!(tree.insert(value));
        assert_valid(&tree, &format!("insert({value})"));
    }
    assert_eq!(tree.inorder(), vec![3, 5, 7, 10, 12, 15, 18]);
    assert_eq!(tree.bfs_keys(), vec![vec![10], vec![5, 15], vec![3, 7, 12, 18]]);
    assert_eq!(
        tree.bfs_levels(),
        vec![vec!["10B"], vec!["5B", "15B"], vec!["3R", "7R", "12R", "18R"]]
    );
    assert_eq!(tree.height(), 3);
    let root = tree.root().unwrap();
    assert_eq!(tree.color(&10), Some(Color::Black));
    assert_eq!(tree.color(&7), Some(Color::Red));

    let graph = tree.graph();
    assert_eq!(graph.labels[&root], "10○");
    assert_eq!(graph.edges.len(), 6);
}

#[test]
fn rb_insert_delete_various_numbers_matrix() {
    let mut tree = RbTree::new();
    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        tree.insert(value);
        assert_valid(&tree, &format!("insert({value})"));
    }
    assert_eq!(tree.len(), 13);

    let ladder = [
        (100, 12),
        (33, 11),
        (33, 11),
        (10, 10),
        (60, 9),
        (11, 8),
        (12, 7),
        (50, 6),
        (25, 5),
        (88, 4),
        (22, 3),
        (55, 2),
        (59, 1),
        (51, 0),
    ];
    for (value, remaining) in ladder {
        tree.delete(&value);
        assert_valid(&tree, &format!("delete({value})"));
        assert_eq!(tree.len(), remaining);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[test]
fn rb_delete_of_missing_key_is_narrated_matrix() {
    let mut tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
    assert!(!tree.delete(&9));
    assert_eq!(
        tree.events(),
        &[TreeEvent::Delete { key: 9 }, TreeEvent::NotFound { key: 9 }]
    );
    assert_eq!(tree.len(), 3);
}

proptest! {
    #[test]
    fn rb_invariants_hold(
        keys in prop::collection::vec(-300i32..300, 0..120),
        removals in prop::collection::vec(-300i32..300, 0..120),
    ) {
        let mut tree = RbTree::new();
        let mut model = std::collections::BTreeSet::new();
        for k in keys {
            prop_assert_eq!(tree.insert(k), model.insert(k));
            let v = tree.check_validity();
            prop_assert!(v.ok, "{:?}", v.problems);
        }
        for k in removals {
            prop_assert_eq!(tree.delete(&k), model.remove(&k));
            let v = tree.check_validity();
            prop_assert!(v.ok, "{:?}", v.problems);
        }
        prop_assert_eq!(tree.inorder(), model.iter().copied().collect::<Vec<_>>());
        let bound = 2.0 * ((model.len() + 1) as f64).log2();
        prop_assert!(f64::from(tree.height()) <= bound);
    }

    #[test]
    fn rb_repeated_keys_follow_model(
        ops in prop::collection::vec((any::<bool>(), -5i32..5), 0..120),
    ) {
        let mut tree = RbTree::new();
        let mut model = std::collections::BTreeSet::new();
        for (insert, k) in ops {
            if insert {
                prop_assert_eq!(tree.insert(k), model.insert(k));
            } else {
                prop_assert_eq!(tree.delete(&k), model.remove(&k));
            }
            let v = tree.check_validity();
            prop_assert!(v.ok, "{:?}", v.problems);
            prop_assert_eq!(tree.inorder(), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(tree.len(), model.len());
        }
    }
}

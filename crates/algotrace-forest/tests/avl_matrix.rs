use algotrace_forest::{AvlTree, ToGraph, TreeEvent};
use proptest::prelude::*;

fn assert_valid(tree: &AvlTree<i32>, what: &str) {
    let validity = tree.check_validity();
    if !validity.ok {
        panic!("invalid AVL tree after {what}: {:?}", validity.problems);
    }
}

#[test]
fn avl_ascending_inserts_stay_logarithmic_matrix() {
    let mut tree = AvlTree::new();
    for value in 1..=127 {
        tree.insert(value);
        assert_valid(&tree, &format!("insert({value})"));
    }
    assert_eq!(tree.len(), 127);
    assert_eq!(tree.height(), 6);
    assert_eq!(tree.inorder(), (1..=127).collect::<Vec<_>>());
}

#[test]
fn avl_rotation_cases_are_narrated_matrix() {
    let cases: [(&[i32], fn(&TreeEvent<i32>) -> bool); 4] = [
        (&[30, 20, 10], |e| matches!(e, TreeEvent::LeftLeftCase { .. })),
        (&[10, 20, 30], |e| matches!(e, TreeEvent::RightRightCase { .. })),
        (&[30, 10, 20], |e| matches!(e, TreeEvent::LeftRightCase { .. })),
        (&[10, 30, 20], |e| matches!(e, TreeEvent::RightLeftCase { .. })),
    ];
    for (keys, is_case) in cases {
        let tree: AvlTree<i32> = keys.iter().copied().collect();
        assert!(
            tree.events().iter().any(is_case),
            "{keys:?} produced {:?}",
            tree.events()
        );
        assert_eq!(tree.bfs_levels(), vec![vec![20], vec![10, 30]]);
    }
}

#[test]
fn avl_insert_delete_various_numbers_matrix() {
    let mut tree = AvlTree::new();
    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        tree.insert(value);
        assert_valid(&tree, &format!("insert({value})"));
    }
    for value in [100, 33, 33, 10, 60, 11, 12, 50, 25, 88, 22, 55, 59, 51] {
        tree.delete(&value);
        assert_valid(&tree, &format!("delete({value})"));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.graph().node_count(), 0);
}

proptest! {
    #[test]
    fn avl_stays_balanced(
        keys in prop::collection::hash_set(-500i32..500, 0..80),
        removals in prop::collection::vec(-500i32..500, 0..80),
    ) {
        let mut tree = AvlTree::new();
        let mut model: Vec<i32> = Vec::new();
        for &k in &keys {
            tree.insert(k);
            model.push(k);
            prop_assert!(tree.check_validity().ok);
        }
        for k in removals {
            let expected = model.iter().position(|&m| m == k);
            prop_assert_eq!(tree.delete(&k), expected.is_some());
            if let Some(pos) = expected {
                model.swap_remove(pos);
            }
            prop_assert!(tree.check_validity().ok);
        }
        model.sort_unstable();
        prop_assert_eq!(tree.inorder(), model.clone());
        prop_assert_eq!(tree.len(), model.len());
        let bound = 1.44 * ((model.len() + 2) as f64).log2();
        prop_assert!(f64::from(tree.height()) <= bound);
    }

    #[test]
    fn avl_duplicate_keys_follow_model(
        ops in prop::collection::vec((any::<bool>(), -5i32..5), 0..120),
    ) {
        let mut tree = AvlTree::new();
        let mut model: Vec<i32> = Vec::new();
        for (insert, k) in ops {
            if insert {
                tree.insert(k);
                model.push(k);
            } else {
                let pos = model.iter().position(|&m| m == k);
                prop_assert_eq!(tree.delete(&k), pos.is_some());
                if let Some(pos) = pos {
                    model.remove(pos);
                }
            }
            let v = tree.check_validity();
            prop_assert!(v.ok, "{:?}", v.problems);
            let mut sorted = model.clone();
            sorted.sort_unstable();
            prop_assert_eq!(tree.inorder(), sorted);
            prop_assert_eq!(tree.len(), model.len());
            for &k in &model {
                let bf = tree.balance_factor(&k);
                prop_assert!(bf.is_some_and(|bf| (-1..=1).contains(&bf)));
            }
        }
    }
}

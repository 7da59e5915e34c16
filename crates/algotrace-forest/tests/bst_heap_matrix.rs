use algotrace_forest::{Bst, MaxHeap, ToGraph};
use proptest::prelude::*;

#[test]
fn bst_degenerates_on_sorted_input_matrix() {
    let mut tree = Bst::new();
    let depths: Vec<usize> = (1..=6).map(|k| tree.insert(k)).collect();
    assert_eq!(depths, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(tree.height(), 5);

    assert!(tree.delete(&3));
    assert!(!tree.delete(&3));
    assert_eq!(tree.inorder(), vec![1, 2, 4, 5, 6]);
    assert_eq!(tree.graph().node_count(), 5);
}

#[test]
fn bst_deep_list_delete_matrix() {
    let n = 20_000;
    let mut tree: Bst<i32> = (0..n).collect();
    assert_eq!(tree.height(), n - 1);

    assert!(tree.delete(&(n - 1)));
    assert!(tree.delete(&0));
    assert_eq!(tree.len(), (n - 2) as usize);
    assert_eq!(tree.height(), n - 3);
    assert_eq!(tree.inorder(), (1..n - 1).collect::<Vec<_>>());
    assert!(tree.check_validity().ok);
}

#[test]
fn bst_deep_successor_delete_matrix() {
    // Root 0 with a left leaf and a right subtree that is one long left spine.
    let n = 12_000;
    let mut tree = Bst::new();
    tree.insert(0);
    tree.insert(-1);
    for k in (1..=n).rev() {
        tree.insert(k);
    }
    assert!(tree.delete(&0));
    let mut expected = vec![-1];
    expected.extend(1..=n);
    assert_eq!(tree.inorder(), expected);
    assert_eq!(tree.bfs_levels()[0], vec![1]);
    assert!(tree.check_validity().ok);
}

#[test]
fn bst_graph_matches_shape_matrix() {
    let tree: Bst<i32> = [8, 4, 12, 2, 6].into_iter().collect();
    let graph = tree.graph();
    let root = graph.root.unwrap();
    assert_eq!(graph.labels[&root], "8");
    let kids: Vec<&str> = graph
        .children(root)
        .map(|c| graph.labels[&c].as_str())
        .collect();
    assert_eq!(kids, vec!["4", "12"]);
    assert_eq!(graph.edges.len(), 4);
}

proptest! {
    #[test]
    fn bst_duplicate_keys_follow_model(
        ops in prop::collection::vec((any::<bool>(), -5i32..5), 0..120),
    ) {
        let mut tree = Bst::new();
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
        }
    }

    #[test]
    fn bst_inorder_is_sorted(keys in prop::collection::vec(-100i32..100, 0..60)) {
        let tree: Bst<i32> = keys.iter().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(tree.inorder(), sorted);
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn heap_extracts_in_descending_order(keys in prop::collection::vec(any::<i16>(), 0..100)) {
        let mut heap: MaxHeap<i16> = keys.iter().copied().collect();
        prop_assert!(heap.is_valid());
        prop_assert_eq!(heap.graph().node_count(), keys.len());
        let mut out = Vec::with_capacity(keys.len());
        while let Some(x) = heap.extract_max() {
            prop_assert!(heap.is_valid());
            out.push(x);
        }
        let mut expected = keys;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(out, expected);
    }
}

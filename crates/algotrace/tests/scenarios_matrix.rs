use algotrace::forest::Color;
use algotrace::{
    dijkstra_instrumented, dsatur_instrumented, quick_sort_instrumented, reconstruct_path,
    run_request, Graph, GraphOptions, QuickSortOptions, RbTree, ToGraph, WeightedGraph,
};
use serde_json::Value;

#[test]
fn quick_sort_scenario_matrix() {
    let res = quick_sort_instrumented(&[5, 3, 1, 4, 2], &QuickSortOptions::default());
    assert_eq!(res.sorted, vec![1, 2, 3, 4, 5]);
    assert!(res.stats.comparisons >= 4);
}

#[test]
fn dijkstra_scenario_matrix() {
    let g = WeightedGraph::from_edges([("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)], false)
        .unwrap();
    let res = dijkstra_instrumented(&g, "A", &GraphOptions::default());
    let dist: Vec<f64> = res.dist.values().copied().collect();
    assert_eq!(dist, vec![0.0, 1.0, 3.0]);
    let prev: Vec<Option<&str>> = res.prev.values().map(|p| p.as_deref()).collect();
    assert_eq!(prev, vec![None, Some("A"), Some("B")]);
    assert_eq!(reconstruct_path(&res.prev, "A", "C"), vec!["A", "B", "C"]);
}

#[test]
fn dsatur_triangle_scenario_matrix() {
    let g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    let res = dsatur_instrumented(&g, &GraphOptions::default());
    assert_eq!(res.stats.colors_used, 3);
}

#[test]
fn red_black_scenario_matrix() {
    let mut tree = RbTree::new();
    for k in [10, 5, 15, 3, 7, 12, 18] {
        tree.insert(k);
        assert!(tree.check_validity().ok);
    }
    assert_eq!(tree.color(&10), Some(Color::Black));
    assert_eq!(tree.graph().node_count(), 7);
}

#[test]
fn dijkstra_request_round_trip_matrix() {
    let request = r#"{
        "engine": "dijkstra",
        "graph": {
            "nodes": ["A", "B", "C"],
            "adj": {
                "A": [{"to": "B", "weight": 1}, {"to": "C", "weight": 5}],
                "B": [{"to": "A", "weight": 1}, {"to": "C", "weight": 2}],
                "C": [{"to": "B", "weight": 2}, {"to": "A", "weight": 5}]
            }
        },
        "source": "A",
        "options": {"record": false}
    }"#;
    let out: Value = serde_json::from_str(&run_request(request, false).unwrap()).unwrap();
    assert_eq!(out["dist"]["C"], 3.0);
    assert_eq!(out["prev"]["A"], Value::Null);
    assert_eq!(out["steps"].as_array().map(Vec::len), Some(0));
    assert_eq!(out["stats"]["complexity"]["bigO"], "O(E log V)");
}

#[test]
fn unknown_source_request_matrix() {
    let request = r#"{"engine": "dijkstra", "graph": {"nodes": ["A"], "adj": {"A": []}}, "source": "Z"}"#;
    let out: Value = serde_json::from_str(&run_request(request, false).unwrap()).unwrap();
    assert_eq!(out["stats"]["error"], "Source node not in graph");
    // Infinity has no JSON form.
    assert_eq!(out["dist"]["A"], Value::Null);
}

#[test]
fn sort_request_matrix() {
    let request = r#"{"engine": "quicksort", "input": [3, 1, 2], "options": {"order": "desc", "pivotCase": "first"}}"#;
    let out: Value = serde_json::from_str(&run_request(request, false).unwrap()).unwrap();
    assert_eq!(out["sorted"], serde_json::json!([3.0, 2.0, 1.0]));
    assert_eq!(out["stats"]["pivotCase"], "first");
    assert_eq!(out["steps"][0]["action"], "choose-pivot");
    assert_eq!(out["steps"][0]["pivot"], 0);
}

#[test]
fn tree_request_snapshots_matrix() {
    let request = r#"{"engine": "tree", "kind": "rbt", "ops": [{"insert": 10}, {"insert": 10}, {"insert": 5}, {"delete": 7}]}"#;
    let out: Value = serde_json::from_str(&run_request(request, false).unwrap()).unwrap();
    let snaps = out.as_array().unwrap();
    assert_eq!(snaps.len(), 4);
    assert_eq!(snaps[0]["changed"], true);
    assert_eq!(snaps[1]["changed"], false);
    assert_eq!(snaps[1]["events"][0]["kind"], "duplicate-skipped");
    assert_eq!(snaps[2]["keys"], serde_json::json!([5.0, 10.0]));
    assert_eq!(snaps[2]["height"], 2);
    assert_eq!(snaps[2]["levels"], serde_json::json!([["10B"], ["5R"]]));
    assert_eq!(snaps[3]["events"][1]["kind"], "not-found");
    assert!(snaps.iter().all(|s| s["validity"]["ok"] == true));
}

#[test]
fn heap_request_extracts_max_matrix() {
    let request = r#"{"engine": "tree", "kind": "heap", "ops": [{"insert": 2}, {"insert": 9}, "extract-max", "extract-max", "extract-max"]}"#;
    let out: Value = serde_json::from_str(&run_request(request, false).unwrap()).unwrap();
    assert_eq!(out[2]["extracted"], 9.0);
    assert_eq!(out[3]["extracted"], 2.0);
    assert_eq!(out[4]["changed"], false);
    assert!(out[4].get("extracted").is_none());
    assert_eq!(out[4]["height"], -1);
}

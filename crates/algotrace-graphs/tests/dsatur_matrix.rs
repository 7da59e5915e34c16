use algotrace_graphs::{dsatur_instrumented, Graph, GraphOptions};
use proptest::prelude::*;

fn assert_proper(g: &Graph, color: &indexmap::IndexMap<String, Option<usize>>) {
    for (v, list) in &g.adj {
        for n in list {
            if n != v {
                assert_ne!(color[v.as_str()], color[n.as_str()], "{v} and {n} share a color");
            }
        }
    }
}

#[test]
fn dsatur_triangle_needs_three_colors_matrix() {
    let g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    let res = dsatur_instrumented(&g, &GraphOptions::default());
    assert_eq!(res.stats.colors_used, 3);
    assert_eq!(res.stats.max_color_index, 2);
    assert_eq!(res.stats.colored_count, 3);
    assert_proper(&g, &res.color);
}

#[test]
fn dsatur_bipartite_uses_two_colors_matrix() {
    let g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
    let res = dsatur_instrumented(&g, &GraphOptions::default());
    assert_eq!(res.stats.colors_used, 2);
    assert_proper(&g, &res.color);
}

#[test]
fn dsatur_isolated_nodes_share_color_zero_matrix() {
    let g = Graph::with_nodes(["A", "B", "C"]);
    let res = dsatur_instrumented(&g, &GraphOptions::default());
    assert!(res.color.values().all(|c| *c == Some(0)));
    assert_eq!(res.stats.tie_breaks, 0);
    assert_eq!(res.steps.len(), 3);
}

#[test]
fn dsatur_serializes_camel_case_matrix() {
    let g = Graph::from_edges([("A", "B")]);
    let res = dsatur_instrumented(&g, &GraphOptions::default());
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["steps"][0]["type"], "assign-color");
    assert_eq!(json["steps"][0]["colorIndex"], 0);
    assert_eq!(json["stats"]["colorsUsed"], 2);
    assert_eq!(json["stats"]["complexity"]["bigO"], "O(V^2)");
}

proptest! {
    #[test]
    fn dsatur_coloring_is_proper(
        n in 1usize..10,
        raw in prop::collection::vec((0usize..10, 0usize..10), 0..30),
    ) {
        let mut g = Graph::with_nodes((0..n).map(|i| format!("v{i}")));
        for (a, b) in raw {
            if a < n && b < n && a != b {
                g.add_edge(&format!("v{a}"), &format!("v{b}")).unwrap();
            }
        }
        let res = dsatur_instrumented(&g, &GraphOptions::default());
        prop_assert_eq!(res.stats.colored_count, n);
        prop_assert!(res.color.values().all(Option::is_some));
        assert_proper(&g, &res.color);
        let max_degree = res.degree.values().copied().max().unwrap_or(0);
        prop_assert!(res.stats.colors_used <= max_degree + 1);
    }
}

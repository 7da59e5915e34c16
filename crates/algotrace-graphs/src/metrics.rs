use indexmap::IndexMap;
use serde::Serialize;

/// Summary numbers for an edge list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    pub nodes: usize,
    pub edges: usize,
    /// `2m / n`, rounded to 3 decimals.
    pub avg_degree: f64,
    /// `m / (n(n-1))` directed, `2m / (n(n-1))` undirected, rounded to 3 decimals.
    pub density: f64,
    /// Endpoint count per node, in first-seen order.
    pub degrees: IndexMap<String, usize>,
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Computes [`GraphMetrics`] over `(source, target)` pairs. Nodes are the
/// labels that appear as an endpoint.
pub fn graph_metrics<I, S>(edges: I, directed: bool) -> GraphMetrics
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut degrees: IndexMap<String, usize> = IndexMap::new();
    let mut m = 0usize;
    for (a, b) in edges {
        m += 1;
        for end in [a.as_ref(), b.as_ref()] {
            *degrees.entry(end.to_string()).or_insert(0) += 1;
        }
    }
    let n = degrees.len();
    let (nf, mf) = (n as f64, m as f64);
    let avg_degree = if n == 0 { 0.0 } else { 2.0 * mf / nf };
    let density = match (n, directed) {
        (0 | 1, _) => 0.0,
        (_, true) => mf / (nf * (nf - 1.0)),
        (_, false) => 2.0 * mf / (nf * (nf - 1.0)),
    };
    GraphMetrics {
        nodes: n,
        edges: m,
        avg_degree: round3(avg_degree),
        density: round3(density),
        degrees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle() {
        let m = graph_metrics([("A", "B"), ("B", "C"), ("C", "A")], false);
        assert_eq!(m.nodes, 3);
        assert_eq!(m.edges, 3);
        assert_eq!(m.avg_degree, 2.0);
        assert_eq!(m.density, 1.0);
        assert_eq!(m.degrees["B"], 2);
    }

    #[test]
    fn directed_density_and_rounding() {
        let m = graph_metrics([("A", "B"), ("B", "C")], true);
        assert_eq!(m.density, 0.333);
        assert_eq!(m.avg_degree, 1.333);
    }

    #[test]
    fn empty_and_single() {
        let empty: [(&str, &str); 0] = [];
        let m = graph_metrics(empty, false);
        assert_eq!((m.nodes, m.avg_degree, m.density), (0, 0.0, 0.0));
        let m = graph_metrics([("A", "A")], false);
        assert_eq!(m.nodes, 1);
        assert_eq!(m.degrees["A"], 2);
        assert_eq!(m.density, 0.0);
    }
}

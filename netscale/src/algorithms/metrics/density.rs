use crate::graph::GraphViewOps;

/// Fraction of possible undirected edges present, `2E / (N (N - 1))`.
///
/// Graphs with fewer than two nodes have density 0.
pub fn density<G: GraphViewOps>(graph: &G) -> f64 {
    let n = graph.count_nodes() as f64;
    if graph.count_nodes() < 2 {
        return 0.0;
    }
    2.0 * graph.count_edges() as f64 / (n * (n - 1.0))
}

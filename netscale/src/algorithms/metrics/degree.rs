//! Degree statistics for the entire graph.
//! The degree of a node is the number of distinct neighbours it has.
//!
//! # Examples
//!
//! ```rust
//! use netscale::algorithms::metrics::degree::*;
//! use netscale::prelude::*;
//!
//! let g = Graph::from_edges(vec![(1, 2), (1, 3), (2, 3), (3, 4), (4, 5)]);
//!
//! assert_eq!(max_degree(&g), 3);
//! assert_eq!(min_degree(&g), 1);
//! assert_eq!(average_degree(&g), 2.0);
//! ```
use crate::graph::GraphViewOps;

/// The maximum degree of any node in the graph
pub fn max_degree<G: GraphViewOps>(graph: &G) -> usize {
    graph.nodes().map(|v| graph.degree(v)).max().unwrap_or(0)
}

/// The minimum degree of any node in the graph
pub fn min_degree<G: GraphViewOps>(graph: &G) -> usize {
    graph.nodes().map(|v| graph.degree(v)).min().unwrap_or(0)
}

/// The average degree of all nodes in the graph, 0 for an empty graph.
pub fn average_degree<G: GraphViewOps>(graph: &G) -> f64 {
    let (deg_sum, count) = graph
        .nodes()
        .fold((0usize, 0usize), |(deg_sum, count), v| {
            (deg_sum + graph.degree(v), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        deg_sum as f64 / count as f64
    }
}

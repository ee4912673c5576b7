//! Exact diameter by breadth-first search from every node.
//!
//! The searches are independent so they run in parallel on the rayon pool.
//! On a disconnected graph the diameter is the largest finite distance, i.e. the
//! largest diameter among its connected components.
use crate::{algorithms::pathing::hop_distance::hop_distances, graph::GraphViewOps};
use netscale_api::core::entities::VID;
use rayon::prelude::*;
use tracing::warn;

/// Largest finite hop distance from `v` to any node.
pub fn eccentricity<G: GraphViewOps>(g: &G, v: VID) -> usize {
    hop_distances(g, v).into_iter().flatten().max().unwrap_or(0)
}

/// Whether every node can be reached from every other node.
///
/// The empty graph is considered connected.
pub fn is_connected<G: GraphViewOps>(g: &G) -> bool {
    if g.is_empty() {
        return true;
    }
    hop_distances(g, VID(0)).iter().all(Option::is_some)
}

/// Maximum eccentricity over all nodes, 0 for empty and single-node graphs.
pub fn diameter<G: GraphViewOps>(g: &G) -> usize {
    if !is_connected(g) {
        warn!(
            nodes = g.count_nodes(),
            "Graph is disconnected, using the largest component diameter"
        );
    }
    (0..g.count_nodes())
        .into_par_iter()
        .map(|v| eccentricity(g, VID(v)))
        .max()
        .unwrap_or(0)
}

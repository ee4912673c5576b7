//! # Single Source Hop Distances
//!
//! Breadth-first search from one source node, returning the number of hops to
//! every node of the graph. This is the shortest-path oracle used by the box
//! covering and the diameter.
use crate::{errors::GraphError, graph::GraphViewOps};
use netscale_api::core::entities::VID;
use rustc_hash::FxHashMap;
use std::mem;

/// Hop distances from `source` to every node, indexed by [`VID`].
///
/// Unreachable nodes are `None`. An out-of-range source yields all `None`.
pub fn hop_distances<G: GraphViewOps>(g: &G, source: VID) -> Vec<Option<usize>> {
    hop_distances_within(g, source, None)
}

/// Hop distances from `source`, stopping once `cutoff` hops are reached.
///
/// Nodes further away than `cutoff` are reported as `None`, exactly like
/// unreachable nodes.
pub fn hop_distances_within<G: GraphViewOps>(
    g: &G,
    source: VID,
    cutoff: Option<usize>,
) -> Vec<Option<usize>> {
    let mut distances = vec![None; g.count_nodes()];
    if source.index() >= distances.len() {
        return distances;
    }
    distances[source.index()] = Some(0);

    let mut level = 0;
    let mut nextlevel = vec![source];
    let mut thislevel = vec![];

    while !nextlevel.is_empty() {
        if Some(level) == cutoff {
            break;
        }
        mem::swap(&mut thislevel, &mut nextlevel);
        nextlevel.clear();
        for v in thislevel.iter() {
            for w in g.neighbours(*v) {
                if distances[w.index()].is_none() {
                    distances[w.index()] = Some(level + 1);
                    nextlevel.push(*w);
                }
            }
        }
        level += 1;
    }
    distances
}

/// Hop distances keyed by external node id, reachable nodes only.
pub fn hop_distances_from_id<G: GraphViewOps>(
    g: &G,
    source: u64,
) -> Result<FxHashMap<u64, usize>, GraphError> {
    let source = g.vid(source).ok_or(GraphError::NodeIdError(source))?;
    Ok(hop_distances(g, source)
        .into_iter()
        .enumerate()
        .filter_map(|(v, d)| d.map(|d| (g.node_id(VID(v)), d)))
        .collect())
}

#[cfg(test)]
mod hop_distance_tests {
    use super::*;
    use crate::graph::Graph;
    use pretty_assertions::assert_eq;

    fn load_graph(edges: Vec<(u64, u64)>) -> Graph {
        Graph::from_edges(edges)
    }

    #[test]
    fn test_hop_distances_1() {
        let graph = load_graph(vec![
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 4),
            (4, 5),
            (5, 6),
        ]);

        let results = hop_distances_from_id(&graph, 1).unwrap();
        let expected: FxHashMap<u64, usize> =
            FxHashMap::from_iter([(1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (6, 3)]);
        assert_eq!(results, expected);
    }

    #[test]
    fn cutoff_hides_far_nodes() {
        let graph = load_graph(vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
        let distances = hop_distances_within(&graph, VID(0), Some(2));
        assert_eq!(distances, vec![Some(0), Some(1), Some(2), None, None]);
    }

    #[test]
    fn unreachable_nodes_are_none() {
        let graph = load_graph(vec![(0, 1), (2, 3)]);
        let distances = hop_distances(&graph, VID(0));
        assert_eq!(distances, vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn unknown_source() {
        let graph = load_graph(vec![(0, 1)]);
        assert!(matches!(
            hop_distances_from_id(&graph, 9),
            Err(GraphError::NodeIdError(9))
        ));
        assert_eq!(hop_distances(&graph, VID(5)), vec![None, None]);
    }
}

//! Square clustering coefficient - how often the neighbours of a node share
//! another common neighbour, closing a square through it.
//!
//! For a node `v` and each pair of its neighbours `u`, `w`, let `q` be the number
//! of common neighbours of `u` and `w` other than `v`. The coefficient is
//!
//! ```text
//! C4(v) = sum q / sum (a + q)
//! ```
//!
//! where `a` counts the remaining neighbours of `u` and `w` that could have closed
//! a square but did not: `a = (k_u - (1 + q + t)) + (k_w - (1 + q + t))` with `t = 1`
//! when `u` and `w` are adjacent themselves (Lind, González and Herrmann, 2005).
//!
//! # Examples
//!
//! ```rust
//! use netscale::algorithms::metrics::square_clustering::*;
//! use netscale::prelude::*;
//!
//! // a 4-cycle is a single square
//! let g = Graph::from_edges(vec![(1, 2), (2, 3), (3, 4), (4, 1)]);
//!
//! assert_eq!(average_square_clustering(&g), 1.0);
//! ```
use crate::graph::GraphViewOps;
use itertools::Itertools;
use netscale_api::core::entities::VID;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Number of nodes in both sorted neighbour lists, `skip` excluded.
fn common_neighbours(a: &[VID], b: &[VID], skip: VID) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if a[i] != skip {
                    count += 1;
                }
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Square clustering coefficient of `v`, 0 when no square can pass through it.
pub fn square_clustering<G: GraphViewOps>(graph: &G, v: VID) -> f64 {
    let (squares, potential) = graph
        .neighbours(v)
        .iter()
        .tuple_combinations()
        .fold((0usize, 0usize), |(squares, potential), (&u, &w)| {
            let (nu, nw) = (graph.neighbours(u), graph.neighbours(w));
            let q = common_neighbours(nu, nw, v);
            let closed = q + 1 + usize::from(nu.binary_search(&w).is_ok());
            let missing = nu.len().saturating_sub(closed) + nw.len().saturating_sub(closed);
            (squares + q, potential + missing + q)
        });

    if potential == 0 {
        0.0
    } else {
        squares as f64 / potential as f64
    }
}

/// Square clustering of every node, indexed by [`VID`].
pub fn local_square_clustering<G: GraphViewOps>(graph: &G) -> Vec<f64> {
    (0..graph.count_nodes())
        .into_par_iter()
        .map(|v| square_clustering(graph, VID(v)))
        .collect()
}

/// Mean square clustering over all nodes, 0 for an empty graph.
pub fn average_square_clustering<G: GraphViewOps>(graph: &G) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }
    local_square_clustering(graph).iter().sum::<f64>() / graph.count_nodes() as f64
}

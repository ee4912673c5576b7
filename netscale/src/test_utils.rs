//! Small deterministic topologies for tests and benchmarks.
//!
//! Every builder inserts nodes `0..n` before any edge, so external ids and
//! internal [`VID`](netscale_api::core::entities::VID)s coincide.
use crate::graph::{Graph, GraphBuilder};

fn with_nodes(n: u64) -> GraphBuilder {
    let mut builder = GraphBuilder::new();
    for i in 0..n {
        builder.add_node(i);
    }
    builder
}

/// Ring of `n` nodes, each linked to its `k` nearest neighbours on either side.
pub fn ring_lattice(n: u64, k: u64) -> Graph {
    let mut builder = with_nodes(n);
    if n > 1 {
        for i in 0..n {
            for j in 1..=k {
                builder.add_edge(i, (i + j) % n);
            }
        }
    }
    builder.build()
}

pub fn complete_graph(n: u64) -> Graph {
    let mut builder = with_nodes(n);
    for i in 0..n {
        for j in (i + 1)..n {
            builder.add_edge(i, j);
        }
    }
    builder.build()
}

pub fn path_graph(n: u64) -> Graph {
    let mut builder = with_nodes(n);
    for i in 1..n {
        builder.add_edge(i - 1, i);
    }
    builder.build()
}

/// `width` x `height` square lattice, node `row * width + col`.
pub fn grid_graph(width: u64, height: u64) -> Graph {
    let mut builder = with_nodes(width * height);
    for row in 0..height {
        for col in 0..width {
            let v = row * width + col;
            if col + 1 < width {
                builder.add_edge(v, v + 1);
            }
            if row + 1 < height {
                builder.add_edge(v, v + width);
            }
        }
    }
    builder.build()
}

pub fn single_node() -> Graph {
    with_nodes(1).build()
}

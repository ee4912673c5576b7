use criterion::{measurement::WallTime, Bencher, BenchmarkGroup, BenchmarkId};
use netscale::{graph::Graph, prelude::GraphBuilder};
use netscale_api::core::utils::logging::global_info_logger;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

/// Random graph with `num_nodes` nodes and `num_edges` uniformly drawn edges.
///
/// Every node is added up front, so small edge counts leave isolated nodes.
pub fn random_graph(num_nodes: u64, num_edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();
    for id in 0..num_nodes {
        builder.add_node(id);
    }
    for _ in 0..num_edges {
        let src = rng.gen_range(0..num_nodes);
        let dst = rng.gen_range(0..num_nodes);
        builder.add_edge(src, dst);
    }
    let graph = builder.build();
    global_info_logger();
    info!(num_nodes, num_edges, "Generated benchmark graph");
    graph
}

pub fn bench<F>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    parameter: Option<usize>,
    mut task: F,
) where
    F: FnMut(&mut Bencher<'_, WallTime>),
{
    match parameter {
        Some(parameter) => group.bench_with_input(
            BenchmarkId::new(name, parameter),
            &parameter,
            |b: &mut Bencher, _| task(b),
        ),
        None => group.bench_function(name, task),
    };
}

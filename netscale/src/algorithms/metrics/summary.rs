use crate::{
    algorithms::{
        diameter::diameter::diameter,
        metrics::{
            degree::average_degree, density::density,
            square_clustering::average_square_clustering,
        },
    },
    graph::GraphViewOps,
};
use serde::{Deserialize, Serialize};

/// Elementary statistics reported next to the multiscale metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub square_clustering: f64,
    pub diameter: usize,
}

impl GraphSummary {
    pub fn new<G: GraphViewOps>(graph: &G) -> Self {
        Self::with_diameter(graph, diameter(graph))
    }

    /// Summary for a graph whose diameter is already known.
    pub fn with_diameter<G: GraphViewOps>(graph: &G, diameter: usize) -> Self {
        Self {
            nodes: graph.count_nodes(),
            edges: graph.count_edges(),
            density: density(graph),
            average_degree: average_degree(graph),
            square_clustering: average_square_clustering(graph),
            diameter,
        }
    }
}

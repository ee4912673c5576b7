use crate::assert_approx;
use netscale::{
    algorithms::metrics::{
        degree::{average_degree, max_degree, min_degree},
        density::density,
        square_clustering::{local_square_clustering, square_clustering},
    },
    graph_loader::example::karate_club::karate_club_graph,
    prelude::*,
    test_utils::{complete_graph, grid_graph},
};

#[test]
fn karate_club_summary() {
    let graph = karate_club_graph();
    let summary = GraphSummary::new(&graph);
    assert_eq!(summary.nodes, 34);
    assert_eq!(summary.edges, 78);
    assert_eq!(summary.diameter, 5);
    assert_approx(summary.density, 0.139037, 1e-6);
    assert_approx(summary.average_degree, 4.588235, 1e-6);
    assert_approx(summary.square_clustering, 0.234254, 1e-6);
}

#[test]
fn karate_club_square_clustering() {
    let graph = karate_club_graph();
    let local = local_square_clustering(&graph);
    assert_eq!(local.len(), 34);
    let instructor = graph.node(0).unwrap();
    let administrator = graph.node(33).unwrap();
    assert_approx(local[instructor.index()], 21.0 / 232.0, 1e-12);
    assert_approx(square_clustering(&graph, administrator), 0.121581, 1e-6);
}

#[test]
fn karate_club_degrees() {
    let graph = karate_club_graph();
    assert_eq!(max_degree(&graph), 17);
    assert_eq!(min_degree(&graph), 1);
}

#[test]
fn complete_graph_is_dense() {
    let graph = complete_graph(7);
    assert_eq!(density(&graph), 1.0);
    assert_eq!(average_degree(&graph), 6.0);
}

#[test]
fn grid_summary() {
    let summary = GraphSummary::new(&grid_graph(4, 3));
    assert_eq!(summary.nodes, 12);
    assert_eq!(summary.edges, 17);
    assert_eq!(summary.diameter, 5);
    assert!(summary.square_clustering > 0.0 && summary.square_clustering < 1.0);
}

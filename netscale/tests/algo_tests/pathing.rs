use netscale::{
    algorithms::pathing::hop_distance::{hop_distances_from_id, hop_distances_within},
    graph_loader::example::karate_club::karate_club_graph,
    prelude::*,
    test_utils::path_graph,
};

#[test]
fn karate_club_pairwise_distances() {
    let graph = karate_club_graph();
    let total: usize = graph
        .nodes()
        .map(|v| {
            hop_distances(&graph, v)
                .into_iter()
                .skip(v.index() + 1)
                .flatten()
                .sum::<usize>()
        })
        .sum();
    assert_eq!(total, 1351);
}

#[test]
fn distances_by_external_id() {
    let graph = Graph::from_edges(vec![(100, 200), (200, 300), (400, 500)]);
    let distances = hop_distances_from_id(&graph, 100).unwrap();
    assert_eq!(distances.len(), 3);
    assert_eq!(distances[&300], 2);
    assert!(!distances.contains_key(&400));

    assert!(matches!(
        hop_distances_from_id(&graph, 7),
        Err(GraphError::NodeIdError(7))
    ));
}

#[test]
fn cutoff_stops_the_search() {
    let graph = path_graph(6);
    let distances = hop_distances_within(&graph, VID(0), Some(2));
    assert_eq!(distances, vec![Some(0), Some(1), Some(2), None, None, None]);
}

#[test]
fn eccentricity_and_connectivity() {
    let graph = path_graph(5);
    assert_eq!(eccentricity(&graph, VID(2)), 2);
    assert_eq!(eccentricity(&graph, VID(0)), 4);
    assert!(is_connected(&graph));
    assert!(!is_connected(&Graph::from_edges(vec![(0, 1), (2, 3)])));
}

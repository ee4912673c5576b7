use crate::assert_approx;
use netscale::{
    algorithms::fractal::profile::multiscale_profile_with_diameter,
    graph_loader::example::karate_club::karate_club_graph,
    prelude::*,
    test_utils::{complete_graph, grid_graph, ring_lattice, single_node},
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn seeded(seed: u64) -> MultiscaleOptions {
    MultiscaleOptions::default().with_seed(seed)
}

#[test]
fn ring_of_sixteen() {
    let graph = ring_lattice(16, 1);
    for seed in 0..50 {
        let profile = multiscale_profile(&graph, &seeded(seed));
        let counts = profile.box_counts();
        assert_eq!(counts.len(), 9);
        assert_eq!(counts[0], 16);
        assert_eq!(counts[8], 1);

        let dimension = profile.fractal_dimension().unwrap();
        assert!((0.8..=1.2).contains(&dimension), "seed {seed}: {dimension}");

        assert_eq!(profile.average_path_length(PathNormalisation::Legacy), Ok(4.0));
        assert_approx(
            profile
                .average_path_length(PathNormalisation::AllPairs)
                .unwrap(),
            512.0 / 120.0,
            1e-12,
        );
    }
}

#[test]
fn ring_growth_exponent() {
    // every node of a ring sees the growth curve 3, 5, ..., 15, 16
    let profile = multiscale_profile(&ring_lattice(16, 1), &seeded(3));
    assert_eq!(profile.scale_one().num_gamma, 16);
    assert_approx(profile.growth_exponent().unwrap(), 0.34306f64.exp(), 1e-3);
}

#[test]
fn growth_exponent_does_not_depend_on_the_seed() {
    let graph = karate_club_graph();
    let a = multiscale_profile(&graph, &seeded(1)).growth_exponent();
    let b = multiscale_profile(&graph, &seeded(2)).growth_exponent();
    match (a, b) {
        (Ok(a), Ok(b)) => assert_approx(a, b, 1e-9 * a.abs().max(1.0)),
        (Err(a), Err(b)) => assert_eq!(a, b),
        (a, b) => panic!("seeds disagree: {a:?} vs {b:?}"),
    }
}

#[test]
fn karate_club_profile() {
    let graph = karate_club_graph();
    let profile = multiscale_profile_with_diameter(&graph, 5, &seeded(12));
    assert_eq!(profile.diameter(), 5);
    assert_eq!(profile.box_counts()[0], 34);
    assert_eq!(profile.box_counts()[5], 1);

    let dimension = profile.fractal_dimension().unwrap();
    assert!(dimension > 0.0);

    assert_eq!(profile.scale_one().num_paths, 34 * 33 / 2);
    assert_eq!(profile.scale_one().path_len, 1351);
    assert_approx(
        profile
            .average_path_length(PathNormalisation::Legacy)
            .unwrap(),
        2.337370,
        1e-6,
    );
    assert_approx(
        profile
            .average_path_length(PathNormalisation::AllPairs)
            .unwrap(),
        2.408200,
        1e-6,
    );
}

#[test]
fn karate_club_growth_curves_are_all_tried() {
    // curves of three points are fitted too, 16 longer curves do not converge
    let graph = karate_club_graph();
    let profile = multiscale_profile_with_diameter(&graph, 5, &seeded(1));
    assert_eq!(profile.scale_one().num_gamma, 18);
    assert_approx(profile.growth_exponent().unwrap(), 22.93723, 1e-3);
}

#[test]
fn complete_graph_has_no_regression() {
    let profile = multiscale_profile(&complete_graph(5), &seeded(0));
    assert_eq!(profile.box_counts(), &[5, 1]);
    assert_eq!(
        profile.fractal_dimension(),
        Err(MultiscaleError::InsufficientScales { diameter: 1 })
    );
    assert_eq!(
        profile.average_path_length(PathNormalisation::Legacy),
        Err(MultiscaleError::NoPathSamples)
    );
}

#[test]
fn single_node_is_degenerate() {
    let profile = multiscale_profile(&single_node(), &seeded(0));
    assert_eq!(profile.box_counts(), &[1]);
    assert_eq!(
        profile.fractal_dimension(),
        Err(MultiscaleError::DegenerateDiameter { diameter: 0 })
    );
    assert_eq!(profile.growth_exponent(), Err(MultiscaleError::NoGrowthFits));
}

#[test]
fn grid_is_roughly_two_dimensional() {
    let profile = multiscale_profile(&grid_graph(12, 12), &seeded(5));
    assert_eq!(profile.diameter(), 22);
    let dimension = profile.fractal_dimension().unwrap();
    assert!(dimension > 1.0 && dimension < 3.0, "{dimension}");
}

#[test]
fn power_law_sequence() {
    let counts: Vec<usize> = (1..=30u32)
        .map(|x| (1e6 / f64::from(x).powi(2)).round() as usize)
        .collect();
    assert_approx(fractal_dimension(&counts).unwrap(), 2.0, 1e-3);
}

fn edge_lists() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0..25u64, 0..25u64), 0..60)
}

proptest! {
    #[test]
    fn boxes_partition_and_stay_compact(edges in edge_lists(), scale in 1..5usize, seed in any::<u64>()) {
        let graph = Graph::from_edges(edges);
        let cover = box_cover(&graph, scale, &mut StdRng::seed_from_u64(seed)).unwrap();

        let mut seen = vec![0usize; graph.count_nodes()];
        for members in cover.boxes() {
            prop_assert!(!members.is_empty());
            for (i, a) in members.iter().enumerate() {
                seen[a.index()] += 1;
                let distances = hop_distances(&graph, *a);
                for b in &members[i + 1..] {
                    prop_assert!(matches!(distances[b.index()], Some(d) if d <= scale));
                }
            }
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn sequence_is_bounded_by_node_count(edges in edge_lists(), seed in any::<u64>()) {
        let graph = Graph::from_edges(edges);
        let profile = multiscale_profile(&graph, &seeded(seed));
        let n = graph.count_nodes();
        prop_assert_eq!(profile.box_counts().len(), diameter(&graph) + 1);
        prop_assert!(profile.box_counts().iter().all(|&c| c <= n));
        if profile.diameter() > 0 {
            prop_assert_eq!(profile.box_counts()[profile.diameter()], 1);
        }
    }
}
